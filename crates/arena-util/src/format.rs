//! Formatting and string helpers.

use std::collections::HashSet;
use std::hash::Hash;

use arena_core::error::InputValidationError;

/// Format elapsed milliseconds as `HH:MM:SS`, zero padded.
///
/// The canonical unit is milliseconds, matching every duration in the
/// parameter tree. Negative input is an error.
pub fn format_clock(elapsed_ms: i64) -> Result<String, InputValidationError> {
    if elapsed_ms < 0 {
        return Err(InputValidationError::OutOfDomain {
            name: "elapsed_ms",
            value: elapsed_ms as f64,
            expected: "[0, inf)",
        });
    }
    let total_secs = elapsed_ms / 1_000;
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let secs = total_secs % 60;
    Ok(format!("{hours:02}:{minutes:02}:{secs:02}"))
}

/// Format a number with thousands separators and a fixed number of
/// decimal places, e.g. `format_number(1234567.891, 2) == "1,234,567.89"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// camelCase to kebab-case: each ASCII uppercase letter becomes `-` plus
/// its lowercase form.
pub fn camel_to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// kebab-case to camelCase: `-x` becomes `X`.
pub fn kebab_to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the first character.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Order-preserving dedup.
pub fn unique<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}
