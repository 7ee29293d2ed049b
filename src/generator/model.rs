use crate::schema::ContentTypeSchema;

/// Classification of one schema attribute
///
/// Drives both the generated TypeScript interface and which surfaces the
/// attribute appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClass {
    /// Displayed/edited directly; carries the generated-language kind
    /// (`string`, `number`, `boolean`, or the declared kind verbatim)
    Scalar(String),
    /// `media`/`relation` attribute fetched via a populate directive and
    /// never surfaced as a direct column or form field
    EagerLoad,
}

/// Classify a declared attribute kind
///
/// First match wins:
/// - `richtext`, `date`, `datetime`, `time`, `json` → scalar `string`
/// - `integer` → scalar `number`
/// - `media`, `relation` → eager-load reference
/// - anything else passes through verbatim (`string`, `boolean`, and any
///   unrecognized kind degrade to pass-through rather than aborting)
pub fn classify_attribute(kind: &str) -> FieldClass {
    match kind {
        "richtext" | "date" | "datetime" | "time" | "json" => {
            FieldClass::Scalar("string".to_string())
        }
        "integer" => FieldClass::Scalar("number".to_string()),
        "media" | "relation" => FieldClass::EagerLoad,
        other => FieldClass::Scalar(other.to_string()),
    }
}

/// One antd table column in the generated list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column header, the attribute name
    pub title: String,
    /// Column alignment, always `center`
    pub align: String,
    /// Record key the column reads
    pub data_index: String,
}

/// One control in the generated create/edit modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    /// Emits a required-value validation rule when set
    pub required: bool,
    /// `boolean` attributes render as a switch, everything else as a text input
    pub toggle: bool,
}

/// One entry of the generated TypeScript interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKind {
    pub name: String,
    /// Generated-language kind (`string`, `number`, `boolean`, ...)
    pub kind: String,
}

/// Everything the template generators need, derived from one schema
///
/// Returned fully populated by [`build_view_model`]; callers never observe a
/// partially built value and the synthetic `createdAt` entry is appended
/// exactly once, last.
#[derive(Debug, Clone)]
pub struct ViewModel {
    /// Display columns, in attribute order, excluding eager-load attributes
    pub columns: Vec<ColumnDef>,
    /// Form controls, in attribute order, excluding eager-load attributes
    pub form_fields: Vec<FormField>,
    /// TypeScript interface entries, `createdAt: string` appended last
    pub field_kinds: Vec<FieldKind>,
    /// Eager-load keys (`media`/`relation` attribute names), in attribute order
    pub populate: Vec<String>,
}

/// Build the view model for one content-type schema
///
/// Walks the attributes once, in source order, classifying each and filling
/// the columns, form fields, interface entries, and populate list. Eager-load
/// attributes only ever surface through the populate list.
pub fn build_view_model(schema: &ContentTypeSchema) -> ViewModel {
    let mut columns = Vec::new();
    let mut form_fields = Vec::new();
    let mut field_kinds = Vec::new();
    let mut populate = Vec::new();

    for attr in &schema.attributes {
        match classify_attribute(&attr.kind) {
            FieldClass::Scalar(kind) => {
                columns.push(ColumnDef {
                    title: attr.name.clone(),
                    align: "center".to_string(),
                    data_index: attr.name.clone(),
                });
                form_fields.push(FormField {
                    name: attr.name.clone(),
                    required: attr.required,
                    toggle: attr.kind == "boolean",
                });
                field_kinds.push(FieldKind {
                    name: attr.name.clone(),
                    kind,
                });
            }
            FieldClass::EagerLoad => populate.push(attr.name.clone()),
        }
    }

    // Every record carries a creation timestamp regardless of the schema; a
    // schema-declared createdAt is superseded by the synthetic entry.
    field_kinds.retain(|f| f.name != "createdAt");
    field_kinds.push(FieldKind {
        name: "createdAt".to_string(),
        kind: "string".to_string(),
    });

    ViewModel {
        columns,
        form_fields,
        field_kinds,
        populate,
    }
}
