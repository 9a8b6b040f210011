//! Value classification for alignment.

/// Decide whether a value renders as a number (right-aligned).
///
/// True iff the value is non-empty and every character is an ASCII
/// digit, with at most one `.` anywhere in the string. A bare `"."`
/// therefore qualifies; signed values (`-5`), scientific notation,
/// thousands separators, and non-ASCII digits do not.
pub fn is_numeric(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut seen_decimal = false;
    for c in value.chars() {
        if c == '.' {
            if seen_decimal {
                return false;
            }
            seen_decimal = true;
        } else if !c.is_ascii_digit() {
            return false;
        }
    }
    true
}
