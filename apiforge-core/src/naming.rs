//! Identifier normalization for generated code.

/// Acronyms kept fully upper-cased when they appear as a name segment.
const ACRONYMS: &[&str] = &[
    "ID", "UUID", "URL", "API", "HTTP", "JSON", "XML", "SQL", "IP", "HTML", "CSS",
];

/// Convert a snake/kebab/space-delimited name to PascalCase
/// (e.g., "user_id" -> "UserID").
///
/// Idempotent on already-normalized input; empty input yields empty output.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    for part in s.split(['_', '-', ' ']) {
        if part.is_empty() {
            continue;
        }
        let upper = part.to_uppercase();
        if ACRONYMS.contains(&upper.as_str()) {
            result.push_str(&upper);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }
    result
}

/// Convert a snake/kebab/space-delimited name to camelCase
/// (e.g., "user_id" -> "userID", "id_card" -> "idCard").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let chars: Vec<char> = pascal.chars().collect();
    if chars.is_empty() {
        return pascal;
    }
    if chars.len() > 1 && chars[1].is_uppercase() {
        // Acronym prefix: lowercase the run except its last character,
        // or the whole string when it is all upper-case.
        let run = chars.iter().take_while(|c| c.is_uppercase()).count();
        if run == chars.len() {
            return pascal.to_lowercase();
        }
        let mut out = String::with_capacity(pascal.len());
        for (i, c) in chars.iter().enumerate() {
            if i < run - 1 {
                out.extend(c.to_lowercase());
            } else {
                out.push(*c);
            }
        }
        return out;
    }
    let mut out = String::with_capacity(pascal.len());
    out.extend(chars[0].to_lowercase());
    out.extend(&chars[1..]);
    out
}
