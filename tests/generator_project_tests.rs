use serde_json::json;
use std::fs;
use strapi_admin_gen::generator::{generate_admin, GeneratorConfig};

fn write_schema(dir: &std::path::Path, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("schema.json");
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_generate_admin_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let schema_path = write_schema(
        tmp.path(),
        &json!({
            "info": { "pluralName": "articles", "displayName": "Article" },
            "attributes": {
                "title": { "type": "string", "required": true },
                "body": { "type": "richtext" },
                "cover": { "type": "media" },
                "author": { "type": "relation", "target": "api::author.author" }
            }
        }),
    );

    let config = GeneratorConfig {
        schema_path,
        pages_dir: tmp.path().join("out/pages"),
        modals_dir: tmp.path().join("out/modals"),
        force: false,
    };
    generate_admin(&config).unwrap();

    // output directories are created on demand, one artifact each
    let page = fs::read_to_string(tmp.path().join("out/pages/ArticlePage.tsx")).unwrap();
    let modal = fs::read_to_string(tmp.path().join("out/modals/AEArticle.tsx")).unwrap();
    assert!(page.contains("const ArticlePage"));
    assert!(page.contains(r#"populate: ["cover","author"],"#));
    assert!(modal.contains("export const AEArticle"));
    assert!(modal.contains("data: { title: values.title, body: values.body },"));
}

#[test]
fn test_generate_admin_all_references_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    let schema_path = write_schema(
        tmp.path(),
        &json!({
            "info": { "pluralName": "galleries", "displayName": "Gallery" },
            "attributes": {
                "photos": { "type": "media" },
                "owner": { "type": "relation" }
            }
        }),
    );

    let config = GeneratorConfig {
        schema_path,
        pages_dir: tmp.path().join("pages"),
        modals_dir: tmp.path().join("modals"),
        force: false,
    };
    generate_admin(&config).unwrap();

    let page = fs::read_to_string(tmp.path().join("pages/GalleryPage.tsx")).unwrap();
    assert!(page.contains("title: 'Created At',"));
    assert!(page.contains("title: 'Actions',"));

    let modal = fs::read_to_string(tmp.path().join("modals/AEGallery.tsx")).unwrap();
    assert!(modal.contains("export const AEGallery"));
    assert!(modal.contains("data: {},"));
}

#[test]
fn test_generate_admin_missing_schema_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        schema_path: tmp.path().join("does-not-exist.json"),
        pages_dir: tmp.path().join("pages"),
        modals_dir: tmp.path().join("modals"),
        force: false,
    };
    let err = generate_admin(&config).unwrap_err();
    assert!(err.to_string().contains("failed to read schema file"));
    // no partial output
    assert!(!tmp.path().join("pages").exists());
}

#[test]
fn test_generate_admin_malformed_schema() {
    let tmp = tempfile::tempdir().unwrap();
    let schema_path = write_schema(tmp.path(), &json!({ "attributes": {} }));

    let config = GeneratorConfig {
        schema_path,
        pages_dir: tmp.path().join("pages"),
        modals_dir: tmp.path().join("modals"),
        force: false,
    };
    let err = generate_admin(&config).unwrap_err();
    assert!(format!("{err:#}").contains("info"));
    assert!(!tmp.path().join("pages").exists());
}

#[test]
fn test_generate_admin_invalid_json() {
    let tmp = tempfile::tempdir().unwrap();
    let schema_path = tmp.path().join("schema.json");
    fs::write(&schema_path, "{ not json").unwrap();

    let config = GeneratorConfig {
        schema_path,
        pages_dir: tmp.path().join("pages"),
        modals_dir: tmp.path().join("modals"),
        force: false,
    };
    let err = generate_admin(&config).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}
