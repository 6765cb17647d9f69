//! Integration tests for the load, merge, render and write pipeline

use bettybot::config::Settings;
use bettybot::{BuildError, Engine, Files, FILE_SEPARATOR};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out a data directory with themes and module templates
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let themes = dir.path().join("themes");
    let modules = dir.path().join("modules");
    fs::create_dir_all(&themes).unwrap();
    fs::create_dir_all(&modules).unwrap();

    fs::write(themes.join("dark"), r#"{"color": "black", "font": "mono"}"#).unwrap();
    fs::write(themes.join("corporate.json"), r#"{"color": "navy", "company": "ACME"}"#).unwrap();

    fs::write(modules.join("greet"), "Hello [[.name]], color [[.color]]").unwrap();
    fs::write(modules.join("header.md"), "# [[ .title ]] ([[ .company ]])\n").unwrap();
    fs::write(
        modules.join("list.md"),
        "[% for item in .items %]- [[ item ]]\n[% endfor %]",
    )
    .unwrap();
    fs::write(modules.join("footer.md"), "-- [[ .font ]] --").unwrap();
    dir
}

fn engine(dir: &Path) -> Engine {
    let settings = Settings::default()
        .with_themes_dir(dir.join("themes"))
        .with_templates(format!("{}/modules/*", dir.display()));
    Engine::load(&settings).unwrap()
}

/// Module with a theme from its file renders the documented greeting
#[test]
fn test_greeting_with_dark_theme() {
    let dir = data_dir();
    let files = Files::from_json(
        r#"{
            "files": [{
                "themes": ["dark"],
                "modules": [{"name": "greet", "values": {"name": "Ann"}}]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(engine(dir.path()).build(&files).unwrap(), "Hello Ann, color black");
}

/// Two single-module files are joined with the separator
#[test]
fn test_two_files_joined() {
    let dir = data_dir();
    let files = Files::from_json(
        r#"{
            "globals": {"color": "c"},
            "files": [
                {"modules": [{"name": "greet", "values": {"name": "X"}}]},
                {"modules": [{"name": "greet", "values": {"name": "Y"}}]}
            ]
        }"#,
    )
    .unwrap();

    let out = engine(dir.path()).build(&files).unwrap();
    assert_eq!(
        out,
        format!("Hello X, color c{FILE_SEPARATOR}Hello Y, color c")
    );
}

/// A multi-module document using file and collection scopes
#[test]
fn test_document_from_config_file() {
    let dir = data_dir();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{
            "outputDir": "",
            "globals": {"title": "Quarterly"},
            "themes": ["dark", "corporate.json"],
            "files": [{
                "filename": "report.md",
                "globals": {"items": ["alpha", "beta"]},
                "themes": [],
                "modules": [
                    {"name": "header.md", "values": {}},
                    {"name": "list.md", "values": null},
                    {"name": "footer.md", "values": {"font": "serif"}}
                ]
            }]
        }"#,
    )
    .unwrap();

    let files = Files::from_path(&config).unwrap();
    let out = engine(dir.path()).build(&files).unwrap();
    assert_eq!(out, "# Quarterly (ACME)\n- alpha\n- beta\n-- serif --");
}

/// Unknown themes and templates fail the whole build
#[test]
fn test_failures_produce_no_text() {
    let dir = data_dir();
    let engine = engine(dir.path());

    let unknown_theme = Files::from_json(
        r#"{"files": [{"themes": ["dark.json"], "modules": [{"name": "greet", "values": {"name": "A"}}]}]}"#,
    )
    .unwrap();
    assert!(matches!(
        engine.build(&unknown_theme),
        Err(BuildError::UnknownTheme { name }) if name == "dark.json"
    ));

    let unknown_template = Files::from_json(
        r#"{"files": [{"modules": [{"name": "greet.tmpl", "values": {}}]}]}"#,
    )
    .unwrap();
    assert!(matches!(
        engine.build(&unknown_template),
        Err(BuildError::Render { module, .. }) if module == "greet.tmpl"
    ));
}

/// Written files hold exactly the built text
#[test]
fn test_write_round_trip() {
    let dir = data_dir();
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();

    let json = serde_json::json!({
        "outputDir": out_dir,
        "themes": ["dark"],
        "files": [
            {"filename": "a.txt", "modules": [{"name": "greet", "values": {"name": "A"}}]},
            {"filename": "b.txt", "modules": [{"name": "greet", "values": {"name": "B", "color": "red"}}]}
        ]
    });
    let files: Files = serde_json::from_value(json).unwrap();
    let engine = engine(dir.path());

    let expected = engine.build(&files).unwrap();
    let paths = engine.build_and_write(&files).unwrap();

    let written: Vec<String> = paths
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(written.join(FILE_SEPARATOR), expected);
    assert_eq!(written, vec!["Hello A, color black", "Hello B, color red"]);
}

/// Loading fails on an unparsable theme
#[test]
fn test_bad_theme_fails_load() {
    let dir = data_dir();
    fs::write(dir.path().join("themes").join("broken"), "{ nope").unwrap();

    let settings = Settings::default()
        .with_themes_dir(dir.path().join("themes"))
        .with_templates(format!("{}/modules/*", dir.path().display()));
    assert!(Engine::load(&settings).is_err());
}
