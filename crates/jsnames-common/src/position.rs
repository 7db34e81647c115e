//! Line/column positions for diagnostics.

use serde::Serialize;

/// A zero-based line and character position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Byte offsets of line starts, used to translate node positions into
/// line/column pairs.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        let bytes = source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
                }
                b'\n' => line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX)),
                _ => {}
            }
            i += 1;
        }
        LineMap { line_starts }
    }

    /// Convert a byte offset to a position. Characters are counted in bytes.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            offset.saturating_sub(start),
        )
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
