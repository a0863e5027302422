//! Console input helpers.
//!
//! Prompts read through `&mut dyn BufRead` so a session can be driven from a
//! `Cursor` in tests exactly as from a locked stdin.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Surrounding whitespace (including the line ending) is trimmed.
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use slotline_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  100\n");
/// assert_eq!(read_stdin_line(&mut input), Some("100".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_valid_input() {
        let mut cursor = Cursor::new(b"12.5\n");
        assert_eq!(read_stdin_line(&mut cursor), Some("12.5".to_string()));
    }

    #[test]
    fn test_read_stdin_line_crlf() {
        let mut cursor = Cursor::new(b"y\r\n");
        assert_eq!(read_stdin_line(&mut cursor), Some("y".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("".to_string()));
    }

    #[test]
    fn test_read_stdin_line_last_line_without_newline() {
        let mut cursor = Cursor::new(b"n");
        assert_eq!(read_stdin_line(&mut cursor), Some("n".to_string()));
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }
}
