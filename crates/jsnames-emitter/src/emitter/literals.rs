use std::fmt::Write;

use super::Printer;

impl<'a> Printer<'a> {
    // =========================================================================
    // Literals
    // =========================================================================

    /// Emit a string literal from its cooked value.
    pub(super) fn emit_string_literal(&mut self, pos: u32, text: &str) {
        let quote = if self.options.single_quote {
            '\''
        } else {
            self.detect_original_quote(pos).unwrap_or('"')
        };
        self.write(&quote_string(text, quote));
    }

    /// Quote character used in the source text at `pos`, if known.
    fn detect_original_quote(&self, pos: u32) -> Option<char> {
        let text = self.source_text?;
        match text.as_bytes().get(pos as usize) {
            Some(b'\'') => Some('\''),
            Some(b'"') => Some('"'),
            _ => None,
        }
    }
}

/// Quote and escape `value` as a JavaScript string literal.
pub fn quote_string(value: &str, quote_char: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote_char);
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\x00"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote_char => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote_char);
    out
}
