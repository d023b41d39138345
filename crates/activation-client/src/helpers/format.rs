const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Shortens `text` to `limit` characters followed by `"..."`.
///
/// Text that already fits is returned unchanged. Counts `char`s, not bytes, so a
/// multi-byte character is never split.
pub fn truncate_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Human-readable byte count with two decimals, e.g. `"1.50 KB"`.
///
/// Uses 1024 as the step. Anything past terabytes is still shown in TB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    // floor(log1024(bytes)) in integers, so exact powers of 1024 land on the right unit.
    let mut index = 0;
    while index < SIZE_UNITS.len() - 1 && bytes >> (10 * (index + 1)) > 0 {
        index += 1;
    }
    let value = bytes as f64 / 1024f64.powi(index as i32);
    format!("{value:.2} {}", SIZE_UNITS[index])
}
