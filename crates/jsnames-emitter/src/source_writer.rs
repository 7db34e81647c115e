//! Output buffer with indentation and token separation.

use jsnames_scanner::is_identifier_part;

const INDENT: &str = "    ";

/// Accumulates printed text.
///
/// Adjacent tokens that would merge when re-scanned (two words, `+` `+`,
/// `-` `-`) are separated by a single space even in compact mode.
#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    compact: bool,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(compact: bool) -> Self {
        SourceWriter {
            output: String::new(),
            indent_level: 0,
            compact,
            at_line_start: true,
        }
    }

    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn write(&mut self, text: &str) {
        let Some(first) = text.chars().next() else {
            return;
        };
        self.write_indent_if_needed();
        if self.needs_separator(first) {
            self.output.push(' ');
        }
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.write_indent_if_needed();
        if self.needs_separator(ch) {
            self.output.push(' ');
        }
        self.output.push(ch);
    }

    /// Optional whitespace; dropped in compact mode.
    pub fn write_space(&mut self) {
        if self.compact || self.at_line_start || self.output.ends_with(' ') {
            return;
        }
        self.output.push(' ');
    }

    /// Line break; dropped in compact mode.
    pub fn write_line(&mut self) {
        if self.compact {
            return;
        }
        while self.output.ends_with(' ') {
            self.output.pop();
        }
        self.output.push('\n');
        self.at_line_start = true;
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn write_indent_if_needed(&mut self) {
        if !self.at_line_start {
            return;
        }
        self.at_line_start = false;
        if self.compact {
            return;
        }
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    fn needs_separator(&self, next: char) -> bool {
        let Some(last) = self.output.chars().next_back() else {
            return false;
        };
        (is_identifier_part(last) && is_identifier_part(next))
            || (last == '+' && next == '+')
            || (last == '-' && next == '-')
    }
}
