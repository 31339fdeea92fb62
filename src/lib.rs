#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// A zero-width span at `position`.
    pub fn at(position: Position) -> Self {
        Span {
            start: position.clone(),
            end: position,
        }
    }
}

/// Finds the line containing the byte offset `position` in `source`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line, or `None` when the offset lies past the end
/// of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End-of-input sits just after the last character.
    source
        .lines()
        .last()
        .map(|line| (line_number.saturating_sub(1).max(1), line.to_string(), line.len()))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nlet x = 5;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let source = "let x = 5";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 9).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x = 5");
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position(source, 10).is_none());
    }
}
