//! Input line source.
//!
//! Each text line is one input string. Line endings are removed, including
//! one carriage return before the newline.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line of `reader`.
pub fn lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Read every line of the file at `path`.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    lines(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_newlines() {
        let read = lines(Cursor::new("ab\naabb\n")).unwrap();
        assert_eq!(read, vec!["ab", "aabb"]);
    }

    #[test]
    fn keeps_last_line_without_newline() {
        let read = lines(Cursor::new("ab\nba")).unwrap();
        assert_eq!(read, vec!["ab", "ba"]);
    }

    #[test]
    fn strips_one_carriage_return() {
        let read = lines(Cursor::new("ab\r\ncd\r\r\n")).unwrap();
        assert_eq!(read, vec!["ab", "cd\r"]);
    }

    #[test]
    fn keeps_empty_lines() {
        let read = lines(Cursor::new("\n\nx\n")).unwrap();
        assert_eq!(read, vec!["", "", "x"]);
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert!(lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_lines("definitely/not/here/text.txt").is_err());
    }
}
