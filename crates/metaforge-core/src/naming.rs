//! Identifier case conversion and registry code resolution.
//!
//! Pure functions deriving the various spellings the generated script
//! needs from a single diagram identifier: physical field names
//! (snake_case), comment headings (title case), and the object-type codes
//! pre-seeded in the registry.

use log::debug;

/// Convert a camelCase identifier to its snake_case field name.
///
/// Splits before a capital-initial word following any character
/// (`ABCDef` → `abc_def`) and at every lowercase-or-digit to uppercase
/// boundary (`sectionOwnerID` → `section_owner_id`), then lower-cases the
/// whole result. Identifiers already in lower case pass through
/// unchanged.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || next_is_lower {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

/// Derive the comment heading for an entity code: underscores become
/// spaces and each word is title-cased, e.g. `toll_road` → `Toll Road`.
///
/// Word casing follows the original generator: a letter is upper-cased
/// iff the preceding character is not a letter, and lower-cased
/// otherwise (so `TollRoad` → `Tollroad`).
pub fn heading(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut prev_is_letter = false;

    for c in code.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Resolve a diagram entity code to the object-type code expected to
/// already exist in the registry.
///
/// The table covers the entities seeded by the main schema script; codes
/// without an entry fall back to the upper-cased diagram code.
pub fn registry_code(code: &str) -> String {
    match code {
        "User" => "USER".to_string(),
        "Vehicle" => "VEHICLE".to_string(),
        "Medium" => "MEDIUM".to_string(),
        "TollRoad" => "TOLL_ROAD".to_string(),
        "SectionOwner" => "SECTION_OWNER".to_string(),
        "Section" => "SECTION".to_string(),
        "TollStation" => "TOLL_STATION".to_string(),
        "TollPlaza" => "TOLL_PLAZA".to_string(),
        "TollGantry" => "TOLL_GANTRY".to_string(),
        "TollInterval" => "TOLL_INTERVAL".to_string(),
        "TollLane" => "TOLL_LANE".to_string(),
        "Transaction" => "TRANSACTION".to_string(),
        "Path" => "PATH".to_string(),
        "PathDetail" => "PATH_DETAIL".to_string(),
        "RestorePath" => "RESTORE_PATH".to_string(),
        "RestorePathDetail" => "RESTORE_PATH_DETAIL".to_string(),
        "SplitDetail" => "SPLIT_DETAIL".to_string(),
        other => {
            debug!(code = other; "No registry mapping for entity code, using upper-cased code");
            other.to_uppercase()
        }
    }
}
