use std::io::Write;

use minijson::{ConfigError, JsonKind, ParserErrKind, ProjectConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load() {
    let file = write_config(
        r#"{
    "nome": "demo",
    "fontes": ["src/main.cpp"],
    "recursos": ["assets/icon.png", "assets/font.ttf"],
    "pasta_saida": "build/out"
}
"#,
    );

    let config = ProjectConfig::load(file.path()).expect("valid config");
    assert_eq!(Some("demo"), config.name.as_deref());
    assert_eq!(Some(vec!["src/main.cpp".to_string()]), config.sources);
    assert_eq!(2, config.resources.map(|x| x.len()).unwrap_or_default());
    assert_eq!(Some("build/out"), config.output_dir.as_deref());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");

    match ProjectConfig::load(&path) {
        Err(ConfigError::Io { path: err_path, .. }) => assert_eq!(path, err_path),
        other => panic!("Expected 'Err(ConfigError::Io {{ .. }})', got '{other:?}'"),
    }
}

#[test]
fn test_load_non_object_root() {
    let file = write_config("\"just a string\"");

    match ProjectConfig::load(file.path()) {
        Err(ConfigError::Parse(err)) => {
            assert_eq!(ParserErrKind::ExpectedKind(JsonKind::Object), err.kind)
        }
        other => panic!("Expected 'Err(ConfigError::Parse(_))', got '{other:?}'"),
    }
}

#[test]
fn test_error_message() {
    let file = write_config("{\n  \"nome\": \"demo\",\n  \"fontes\": [1]\n}");

    let err = ProjectConfig::load(file.path()).expect_err("invalid config");
    assert_eq!(
        "invalid configuration: expected string at line 3, column 14",
        err.to_string()
    );
}
