// SPDX-License-Identifier: MPL-2.0
//! Display formatting for contact phone numbers.

/// Formats a phone number for display.
///
/// Recognized shapes (after stripping every non-digit):
/// - 10 digits: `(555) 123-4567`
/// - 11 digits starting with `1`: `+1 (555) 123-4567`
/// - 12 digits starting with `336`: `+33` then digits four to twelve grouped
///   1-2-2-2-2, so `336612345678` becomes `+33 6 12 34 56 78`
///
/// Anything else is returned unchanged when it already starts with `+`,
/// and prefixed with `+` otherwise. An empty input yields an empty string.
#[must_use]
pub fn format_phone_number(phone_number: &str) -> String {
    if phone_number.is_empty() {
        return String::new();
    }

    let cleaned: String = phone_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    match cleaned.len() {
        10 => format!(
            "({}) {}-{}",
            &cleaned[0..3],
            &cleaned[3..6],
            &cleaned[6..]
        ),
        11 if cleaned.starts_with('1') => format!(
            "+1 ({}) {}-{}",
            &cleaned[1..4],
            &cleaned[4..7],
            &cleaned[7..]
        ),
        12 if cleaned.starts_with("336") => format!(
            "+33 {} {} {} {} {}",
            &cleaned[3..4],
            &cleaned[4..6],
            &cleaned[6..8],
            &cleaned[8..10],
            &cleaned[10..]
        ),
        _ if phone_number.starts_with('+') => phone_number.to_string(),
        _ => format!("+{phone_number}"),
    }
}
