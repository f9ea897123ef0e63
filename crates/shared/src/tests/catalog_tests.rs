use super::*;

use std::fs;

#[test]
fn sample_catalog_has_four_unique_projects() {
    let catalog = Catalog::sample();
    assert_eq!(catalog.len(), 4);
    let revalidated = Catalog::new(catalog.projects().to_vec()).expect("sample is valid");
    assert_eq!(revalidated, catalog);
    assert!(catalog.find("Todo App").expect("todo").has_tag(Tag::Js));
    assert!(catalog.iter().all(|project| project.url.is_none()));
}

#[test]
fn rejects_empty_and_duplicate_titles() {
    let err = Catalog::new(vec![ProjectRecord::new("  ", [Tag::Css], "blank")])
        .expect_err("empty title");
    assert!(matches!(err, CatalogError::EmptyTitle { index: 0 }));

    let err = Catalog::new(vec![
        ProjectRecord::new("Same", [Tag::Css], "one"),
        ProjectRecord::new("Same", [Tag::Js], "two"),
    ])
    .expect_err("duplicate title");
    assert!(matches!(err, CatalogError::DuplicateTitle { title } if title == "Same"));
}

#[test]
fn rejects_unparseable_urls() {
    let err = Catalog::new(vec![
        ProjectRecord::new("Linked", [Tag::Html], "has link").with_url("not a url"),
    ])
    .expect_err("invalid url");
    assert!(matches!(err, CatalogError::InvalidUrl { .. }));

    let catalog = Catalog::new(vec![
        ProjectRecord::new("Linked", [Tag::Html], "has link").with_url("https://example.com/p"),
    ])
    .expect("valid url");
    assert_eq!(
        catalog.projects()[0].url.as_deref(),
        Some("https://example.com/p")
    );
}

#[test]
fn parses_toml_catalog() {
    let raw = r#"
[[projects]]
title = "Landing Page"
tags = ["HTML", "CSS"]
description = "Static landing page."
url = "https://example.com/landing"

[[projects]]
title = "Style Guide"
tags = ["Design"]
description = "Colour and type tokens."
"#;
    let catalog = Catalog::from_toml_str(raw).expect("toml catalog");
    assert_eq!(catalog.len(), 2);
    let landing = catalog.find("Landing Page").expect("landing");
    assert!(landing.has_tag(Tag::Html) && landing.has_tag(Tag::Css));
    assert!(catalog.find("Style Guide").expect("guide").url.is_none());
}

#[test]
fn parses_json_catalog_with_stack_alias() {
    let raw = r#"{"projects":[{"title":"Todo App","stack":["JS"],"description":"CRUD todos."}]}"#;
    let catalog = Catalog::from_json_str(raw).expect("json catalog");
    assert!(catalog.projects()[0].has_tag(Tag::Js));
}

#[test]
fn rejects_unknown_tags_in_files() {
    let raw = r#"{"projects":[{"title":"X","tags":["Rust"],"description":"d"}]}"#;
    assert!(matches!(
        Catalog::from_json_str(raw),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn load_picks_format_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("catalog.toml");
    fs::write(
        &toml_path,
        "[[projects]]\ntitle = \"One\"\ntags = [\"JS\"]\ndescription = \"first\"\n",
    )
    .expect("write toml");
    assert_eq!(Catalog::load(&toml_path).expect("load toml").len(), 1);

    let yaml_path = dir.path().join("catalog.yaml");
    fs::write(&yaml_path, "projects: []").expect("write yaml");
    assert!(matches!(
        Catalog::load(&yaml_path),
        Err(CatalogError::UnsupportedFormat { extension }) if extension == "yaml"
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        Catalog::load(&missing),
        Err(CatalogError::Io { .. })
    ));
}
