//! Assertions over rendered terminal buffers.

use anyhow::Result;
use ratatui::buffer::Buffer;

/// Rows of the buffer as plain text, trailing spaces removed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    if width == 0 {
        return Vec::new();
    }

    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Whole buffer as newline-joined text.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}

/// Number of rows that contain `needle`.
pub fn count_lines_containing(buffer: &Buffer, needle: &str) -> usize {
    buffer_lines(buffer)
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}

/// Fail with the rendered screen attached if `needle` is not on it.
pub fn assert_screen_contains(buffer: &Buffer, needle: &str) -> Result<()> {
    let text = buffer_text(buffer);
    if !text.contains(needle) {
        anyhow::bail!("Expected screen to contain {:?}, got:\n{}", needle, text);
    }
    Ok(())
}

/// Fail with the rendered screen attached if `needle` is on it.
pub fn assert_screen_lacks(buffer: &Buffer, needle: &str) -> Result<()> {
    let text = buffer_text(buffer);
    if text.contains(needle) {
        anyhow::bail!("Expected screen not to contain {:?}, got:\n{}", needle, text);
    }
    Ok(())
}

/// Row index of the first line containing `needle`.
pub fn line_index_of(buffer: &Buffer, needle: &str) -> Option<usize> {
    buffer_lines(buffer)
        .iter()
        .position(|line| line.contains(needle))
}
