//! Label and URL formatting used by the page composers.
//!
//! All of these are literal concatenation: no locale handling, no escaping.

/// Base URL for social profile links.
pub const X_PROFILE_BASE: &str = "https://x.com/";

/// Label for a numbered workflow step, e.g. `"2. Compile to KRB"`.
pub fn step_label(step: u32, title: &str) -> String {
    format!("{}. {}", step, title)
}

/// Strip a single leading `@` from a social handle.
pub fn bare_handle(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}

/// Profile URL for a handle; the leading `@` is dropped.
pub fn x_profile_url(handle: &str) -> String {
    format!("{}{}", X_PROFILE_BASE, bare_handle(handle))
}

/// Display label for a handle, always with exactly one leading `@`.
pub fn handle_label(handle: &str) -> String {
    format!("@{}", bare_handle(handle))
}

/// Footer notice, e.g. `"© 2025 Kryon Labs. All rights reserved."`
pub fn copyright_notice(year: u16, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

/// Output file name for an exported page.
pub fn page_file_name(page: &str) -> String {
    format!("{}.json", page)
}
