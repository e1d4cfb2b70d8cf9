//! # Shared Display Helpers
//!
//! Small formatting functions used by the dashboard when rendering records
//! whose fields the backend may omit.

/// Substitute a placeholder dash for an empty field value.
///
/// # Examples
///
/// ```rust
/// use shared::utils::or_placeholder;
///
/// assert_eq!(or_placeholder("Main St"), "Main St");
/// assert_eq!(or_placeholder(""), "-");
/// assert_eq!(or_placeholder("   "), "-");
/// ```
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Build the "Loaded N thing(s)" status line for a list screen.
///
/// # Examples
///
/// ```rust
/// use shared::utils::count_label;
///
/// assert_eq!(count_label(3, "project"), "Loaded 3 project(s)");
/// assert_eq!(count_label(1, "report"), "Loaded 1 report(s)");
/// ```
pub fn count_label(count: usize, noun: &str) -> String {
    format!("Loaded {} {}(s)", count, noun)
}
