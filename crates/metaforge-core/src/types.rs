//! Fixed diagram-type → SQL-type mapping tables.
//!
//! Two total, pure lookups over the small diagram type vocabulary. Both
//! accept a lower-cased raw type token and always return a value;
//! unrecognized tokens resolve to the generic string-like pair.

use log::debug;

/// Map a diagram type token to the registry's logical data type.
pub fn logical_type(token: &str) -> &'static str {
    match token {
        "string" => "STRING",
        "integer" => "INTEGER",
        "long" => "DECIMAL",
        "date" => "DATE",
        "boolean" => "BOOLEAN",
        other => {
            debug!(token = other; "Unknown type token, defaulting to STRING");
            "STRING"
        }
    }
}

/// Map a diagram type token to the registry's physical field type.
pub fn field_type(token: &str) -> &'static str {
    match token {
        "string" => "VARCHAR",
        "integer" => "INTEGER",
        "long" => "DECIMAL",
        "date" => "DATE",
        "boolean" => "BOOLEAN",
        _ => "VARCHAR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(logical_type("string"), "STRING");
        assert_eq!(field_type("string"), "VARCHAR");
        assert_eq!(logical_type("long"), "DECIMAL");
        assert_eq!(field_type("long"), "DECIMAL");
        assert_eq!(logical_type("boolean"), "BOOLEAN");
        assert_eq!(field_type("boolean"), "BOOLEAN");
    }

    #[test]
    fn test_unknown_token_defaults_to_string_pair() {
        assert_eq!(logical_type("uuid"), "STRING");
        assert_eq!(field_type("uuid"), "VARCHAR");
        assert_eq!(logical_type(""), "STRING");
        assert_eq!(field_type(""), "VARCHAR");
    }
}
