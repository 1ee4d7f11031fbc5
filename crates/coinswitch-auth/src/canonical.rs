//! Canonical forms used in the signature message
//!
//! The server rebuilds the signature message from what it receives, so the
//! bytes produced here must match its encoder exactly:
//! - JSON bodies: keys sorted at every level, `,`/`:` separators, no
//!   whitespace, non-ASCII escaped as `\uXXXX`
//! - GET query strings: form-urlencoded, then `+`/percent decoded before signing

use serde_json::Value;
use std::fmt::Write;

use crate::error::{AuthError, AuthResult};

/// Serialize a JSON value in canonical form
///
/// `{"b":1,"a":2}` becomes `{"a":2,"b":1}`.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
    }
}

/// Only printable ASCII is written verbatim; everything else is escaped.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Writing to a String cannot fail
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
    }
    out.push('"');
}

/// Form-urlencode ordered query parameters (space becomes `+`)
pub fn encode_query<K, V>(params: &[(K, V)]) -> AuthResult<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect();
    serde_urlencoded::to_string(&pairs).map_err(|e| AuthError::Serialization(e.to_string()))
}

/// Append an encoded query string to an endpoint that may already have one
pub fn append_query(endpoint: &str, query: &str) -> String {
    if query.is_empty() {
        return endpoint.to_string();
    }

    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, query)
}

/// Decode `+` to space, then percent-escapes
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn unquote_plus(s: &str) -> String {
    let spaced = s.replace('+', " ");
    let decoded = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_sorted_without_whitespace() {
        let value: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        assert_eq!(canonical_json(&value), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn test_nested_keys_sorted() {
        let value = json!({"z": {"y": [1, {"b": true, "a": null}], "x": "s"}, "a": []});
        assert_eq!(
            canonical_json(&value),
            r#"{"a":[],"z":{"x":"s","y":[1,{"a":null,"b":true}]}}"#
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(canonical_json(&json!({})), "{}");
    }

    #[test]
    fn test_string_escaping() {
        let value = json!({"q": "a\"b\\c\nd"});
        assert_eq!(canonical_json(&value), r#"{"q":"a\"b\\c\nd"}"#);
    }

    #[test]
    fn test_non_ascii_escaped() {
        assert_eq!(canonical_json(&json!("\u{20b9}")), r#""\u20b9""#);
        // Astral characters become a surrogate pair
        assert_eq!(canonical_json(&json!("\u{1f680}")), r#""\ud83d\ude80""#);
        assert_eq!(canonical_json(&json!("\u{7f}")), r#""\u007f""#);
    }

    #[test]
    fn test_encode_query_preserves_order() {
        let params = [("symbol", "btc/inr"), ("exchange", "coinswitchx")];
        assert_eq!(
            encode_query(&params).unwrap(),
            "symbol=btc%2Finr&exchange=coinswitchx"
        );
    }

    #[test]
    fn test_encode_query_space_as_plus() {
        assert_eq!(encode_query(&[("a", "1 2")]).unwrap(), "a=1+2");
    }

    #[test]
    fn test_append_query_separator() {
        assert_eq!(append_query("/x", "a=1"), "/x?a=1");
        assert_eq!(append_query("/x?b=2", "a=1"), "/x?b=2&a=1");
        assert_eq!(append_query("/x?", "a=1"), "/x?&a=1");
        assert_eq!(append_query("/x", ""), "/x");
    }

    #[test]
    fn test_unquote_plus() {
        assert_eq!(unquote_plus("/x?a=1+2"), "/x?a=1 2");
        assert_eq!(unquote_plus("symbol=btc%2Finr"), "symbol=btc/inr");
        assert_eq!(unquote_plus("a=%2B"), "a=+");
    }
}
