//! The project configuration file read by the build tooling.
//!
//! The file is a JSON object with four optional keys, named as the existing build tooling
//! writes them:
//!
//! ```json
//! {
//!     "nome": "app",
//!     "fontes": ["main.cpp", "util.cpp"],
//!     "recursos": ["assets/logo.png"],
//!     "pasta_saida": "dist"
//! }
//! ```
//!
//! Unknown keys are ignored. A root that is not an object, a key holding the wrong type, or
//! any syntax error makes the whole file invalid.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{JsonDeserialise, Parser, ParserErr};

#[derive(Debug, Clone, Default, PartialEq, JsonDeserialise)]
pub struct ProjectConfig {
    #[json(rename = "nome")]
    pub name: Option<String>,
    #[json(rename = "fontes")]
    pub sources: Option<Vec<String>>,
    #[json(rename = "recursos")]
    pub resources: Option<Vec<String>>,
    #[json(rename = "pasta_saida")]
    pub output_dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] ParserErr),
}

impl ProjectConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Parser::parse(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading project configuration");

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use crate::{JsonKind, ParserErrKind};

    use super::*;

    fn parse_err_kind(source: &str) -> ParserErrKind {
        match ProjectConfig::from_json_str(source) {
            Err(ConfigError::Parse(err)) => err.kind,
            other => panic!("Expected a parse error, got '{other:?}'"),
        }
    }

    #[test]
    fn test_full() {
        let result = ProjectConfig::from_json_str(
            r#"{
                "nome": "app",
                "fontes": ["main.cpp", "util.cpp"],
                "recursos": [],
                "pasta_saida": "dist"
            }"#,
        );

        let expected = ProjectConfig {
            name: Some("app".to_string()),
            sources: Some(vec!["main.cpp".to_string(), "util.cpp".to_string()]),
            resources: Some(vec![]),
            output_dir: Some("dist".to_string()),
        };

        assert_eq!(expected, result.expect("valid config"));
    }

    #[test]
    fn test_partial_and_unknown_keys() {
        let result = ProjectConfig::from_json_str(
            r#"{"nome": "app", "version": {"major": 1, "tags": [null, true]}}"#,
        );

        let expected = ProjectConfig {
            name: Some("app".to_string()),
            ..ProjectConfig::default()
        };

        assert_eq!(expected, result.expect("valid config"));
    }

    #[test]
    fn test_english_keys_are_not_config_keys() {
        let result = ProjectConfig::from_json_str(
            r#"{"name": "app", "sources": ["main.cpp"], "output_dir": "dist"}"#,
        );

        assert_eq!(ProjectConfig::default(), result.expect("valid config"));
    }

    #[test]
    fn test_empty_object() {
        let result = ProjectConfig::from_json_str("{}");
        assert_eq!(ProjectConfig::default(), result.expect("valid config"));
    }

    #[test]
    fn test_root_not_object() {
        assert_eq!(
            ParserErrKind::ExpectedKind(JsonKind::Object),
            parse_err_kind(r#"["nome"]"#)
        );
    }

    #[test]
    fn test_wrong_field_types() {
        assert_eq!(
            ParserErrKind::ExpectedKind(JsonKind::String),
            parse_err_kind(r#"{"nome": 5}"#)
        );
        assert_eq!(
            ParserErrKind::ExpectedKind(JsonKind::String),
            parse_err_kind(r#"{"fontes": ["a.cpp", 3]}"#)
        );
        assert_eq!(
            ParserErrKind::ExpectedKind(JsonKind::Array),
            parse_err_kind(r#"{"recursos": "logo.png"}"#)
        );
    }

    #[test]
    fn test_syntax_error() {
        assert_eq!(
            ParserErrKind::ExpectedCommaOr('}'),
            parse_err_kind(r#"{"nome": "app" "fontes": []}"#)
        );
    }
}
