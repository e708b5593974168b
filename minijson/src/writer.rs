use std::fmt::{self, Write};

use crate::json_value::JsonValue;

impl JsonValue {
    /// Serialise to JSON text.
    ///
    /// An `indent` of 0 gives the single-line form, `{"a": 1, "b": [true, false]}`. Anything
    /// larger puts each member/element on its own line, indented by `indent` spaces per level.
    /// Object keys come out in sorted order. Non-finite numbers are written as `null`.
    pub fn to_string_indented(&self, indent: usize) -> String {
        let mut out = String::new();
        write_value(&mut out, self, indent, 0);
        out
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_indented(0))
    }
}

fn write_value(out: &mut String, value: &JsonValue, indent: usize, level: usize) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(val) => out.push_str(if *val { "true" } else { "false" }),
        JsonValue::Number(val) => write_number(out, *val),
        JsonValue::String(val) => write_string(out, val),
        JsonValue::Object(members) => {
            if members.is_empty() {
                out.push_str("{}");
                return;
            }

            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                write_separator(out, i, indent, level + 1);
                write_string(out, key);
                out.push_str(": ");
                write_value(out, member, indent, level + 1);
            }
            write_newline(out, indent, level);
            out.push('}');
        }
        JsonValue::Array(elems) => {
            if elems.is_empty() {
                out.push_str("[]");
                return;
            }

            out.push('[');
            for (i, elem) in elems.iter().enumerate() {
                write_separator(out, i, indent, level + 1);
                write_value(out, elem, indent, level + 1);
            }
            write_newline(out, indent, level);
            out.push(']');
        }
    }
}

fn write_separator(out: &mut String, index: usize, indent: usize, level: usize) {
    if index > 0 {
        out.push(',');
        if indent == 0 {
            out.push(' ');
        }
    }

    write_newline(out, indent, level);
}

fn write_newline(out: &mut String, indent: usize, level: usize) {
    if indent == 0 {
        return;
    }

    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent * level));
}

fn write_number(out: &mut String, val: f64) {
    if !val.is_finite() {
        out.push_str("null");
        return;
    }

    // `f64`'s Display never uses exponent notation, so the output stays inside the grammar
    // the parser accepts
    let _ = write!(out, "{val}");
}

fn write_string(out: &mut String, val: &str) {
    out.push('"');
    for c in val.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            c if c < '\x20' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
