//! A small JSON document model and recursive-descent parser.
//!
//! [`parse`] turns text into a [`JsonValue`] tree and [`JsonValue::to_string_indented`] (or
//! `Display`) turns it back into text. The same grammar productions are exposed through the
//! [`Parse`] trait, so text can also be read straight into typed values, including structs
//! deriving [`JsonDeserialise`].
//!
//! The accepted grammar is a subset of JSON: numbers have no exponent part and `\u` escapes
//! are not decoded.

// Lets the derive macro refer to `::minijson` from inside this crate too
extern crate self as minijson;

mod config;
mod json_value;
mod parse_impl;
mod parse_options;
mod parser;
mod scanner;
mod writer;

pub use config::{ConfigError, ProjectConfig};
pub use json_value::{JsonArray, JsonKind, JsonObject, JsonValue};
pub use minijson_macros::JsonDeserialise;
pub use parse_options::ParseOptions;
pub use parser::{Parse, Parser, ParserErr, ParserErrKind, parse, parse_prefix};
pub use scanner::Location;
