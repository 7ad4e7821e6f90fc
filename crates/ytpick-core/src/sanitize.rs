//! Filesystem-safe file stems: forbidden characters, padding, reserved names.

use unicode_normalization::UnicodeNormalization;

/// Characters never allowed in a file stem.
const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Device names reserved by Windows; a stem equal to one of these
/// (ignoring case) is unusable on that platform.
const RESERVED_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Substitute stem when sanitization leaves nothing usable.
pub const FALLBACK_STEM: &str = "untitled";

/// Sanitizes a file stem (no extension) into a filesystem-safe form.
///
/// - NFKC-normalizes the input
/// - deletes `\ / : * ? " < > |` and control characters 0x00–0x1F
/// - collapses whitespace runs into a single ASCII space
/// - strips leading spaces and periods, and trailing spaces and periods
/// - replaces reserved device names (`CON`, `COM1`, …) and empty results
///   with [`FALLBACK_STEM`]
///
/// Pure: same input, same output, no side effects. The result is never
/// empty and never starts or ends with a space or period.
pub fn sanitize_stem(stem: &str) -> String {
    let composed: String = stem.nfkc().collect();

    let mut collapsed = String::with_capacity(composed.len());
    let mut in_whitespace = false;
    for c in composed.chars() {
        if FORBIDDEN.contains(&c) || (c as u32) < 0x20 {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    let trimmed = collapsed
        .trim_start_matches(|c| c == ' ' || c == '.')
        .trim_end_matches(|c| c == ' ' || c == '.');

    let kept = if RESERVED_STEMS.iter().any(|r| trimmed.eq_ignore_ascii_case(r)) {
        ""
    } else {
        trimmed
    };

    if kept.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        kept.to_string()
    }
}
