use std::path::Path;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count using the largest fitting unit up to TB, with at
/// most two decimal places and no trailing zeros (`1536` -> `"1.5 KB"`).
pub fn format_bytes(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut s = format!("{value:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    format!("{s} {}", UNITS[unit])
}

/// Map a file name to the first configured category listing its extension.
///
/// `categories` is an ordered list of `(category, extensions)` pairs where
/// `extensions` is a comma-separated list (`("image", "jpg,png,gif")`).
/// Matching is case-insensitive on the extension; a file without an
/// extension matches nothing.
pub fn storage_category<'a>(categories: &[(&'a str, &str)], file_name: &str) -> Option<&'a str> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    categories
        .iter()
        .find(|(_, list)| list.split(',').any(|e| e.trim().eq_ignore_ascii_case(ext)))
        .map(|(category, _)| *category)
}
