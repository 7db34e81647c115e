//! Scanner state machine.
//!
//! `ScannerState` turns source text into a token stream on demand. The parser
//! pulls one token at a time with [`ScannerState::scan`] and uses
//! [`ScannerState::save_state`]/[`ScannerState::restore_state`] for
//! look-ahead (arrow function detection).
//!
//! Regular expression and template literals are not part of the supported
//! subset: `/` always scans as a division operator and a backtick is reported
//! as an invalid character.

use std::sync::Arc;

use jsnames_common::diagnostics::diagnostic_codes;
use memchr::memmem;

use crate::char_codes::{
    is_identifier_part, is_identifier_start, is_line_break, is_white_space_single_line,
};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};

/// A lexical error found while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Saved scanner position for speculative parsing.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_value: String,
    preceding_line_break: bool,
    diagnostic_count: usize,
}

#[derive(Clone, Debug)]
pub struct ScannerState {
    text: Arc<str>,
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    /// Identifier text, cooked string value or raw numeric text of the
    /// current token.
    token_value: String,
    preceding_line_break: bool,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        ScannerState {
            text: text.into(),
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_value: String::new(),
            preceding_line_break: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    pub fn source_text_arc(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_pos(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw source text of the current token.
    pub fn token_text(&self) -> &str {
        self.text.get(self.token_start..self.pos).unwrap_or("")
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_start: self.token_start,
            token_value: self.token_value.clone(),
            preceding_line_break: self.preceding_line_break,
            diagnostic_count: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_start = snapshot.token_start;
        self.token_value = snapshot.token_value;
        self.preceding_line_break = snapshot.preceding_line_break;
        self.diagnostics.truncate(snapshot.diagnostic_count);
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    fn error(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.preceding_line_break = false;
        self.token_value.clear();
        self.token = loop {
            self.token_start = self.pos;
            let Some(ch) = self.current_char() else {
                break SyntaxKind::EndOfFileToken;
            };

            if is_line_break(ch) {
                self.preceding_line_break = true;
                self.pos += ch.len_utf8();
                continue;
            }
            if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }
            if ch == '/' {
                match self.byte_at(self.pos + 1) {
                    Some(b'/') => {
                        self.skip_single_line_comment();
                        continue;
                    }
                    Some(b'*') => {
                        self.skip_multi_line_comment();
                        continue;
                    }
                    _ => {}
                }
            }

            if ch == '"' || ch == '\'' {
                break self.scan_string(ch);
            }
            if ch.is_ascii_digit()
                || (ch == '.' && self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit()))
            {
                break self.scan_number();
            }
            if is_identifier_start(ch) {
                break self.scan_identifier();
            }

            break self.scan_punctuation(ch);
        };
        self.token
    }

    fn skip_single_line_comment(&mut self) {
        self.pos += 2;
        while let Some(ch) = self.current_char() {
            if is_line_break(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_multi_line_comment(&mut self) {
        let start = self.pos;
        let body_start = self.pos + 2;
        let rest = self.text.get(body_start..).unwrap_or("");
        match memmem::find(rest.as_bytes(), b"*/") {
            Some(offset) => {
                let body = &rest[..offset];
                if body.chars().any(is_line_break) {
                    self.preceding_line_break = true;
                }
                self.pos = body_start + offset + 2;
            }
            None => {
                self.pos = self.text.len();
                self.error(
                    start,
                    self.pos - start,
                    "'*/' expected.",
                    diagnostic_codes::UNTERMINATED_MULTI_LINE_COMMENT,
                );
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.current_char() {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        let text = &self.text[start..self.pos];
        self.token_value.push_str(text);
        text_to_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let is_hex = self.byte_at(self.pos) == Some(b'0')
            && matches!(self.byte_at(self.pos + 1), Some(b'x' | b'X'));
        if is_hex {
            self.pos += 2;
            let digits_start = self.pos;
            while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            if self.pos == digits_start {
                self.error(
                    self.pos,
                    1,
                    "Hexadecimal digit expected.",
                    diagnostic_codes::HEXADECIMAL_DIGIT_EXPECTED,
                );
            }
        } else {
            self.skip_digits();
            if self.byte_at(self.pos) == Some(b'.') {
                self.pos += 1;
                self.skip_digits();
            }
            if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
                let save = self.pos;
                self.pos += 1;
                if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
                if self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
                    self.skip_digits();
                } else {
                    self.pos = save;
                }
            }
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::NumericLiteral
    }

    fn skip_digits(&mut self) {
        while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                self.error(
                    start,
                    self.pos - start,
                    "Unterminated string literal.",
                    diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                );
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\n' || ch == '\r' {
                self.error(
                    start,
                    self.pos - start,
                    "Unterminated string literal.",
                    diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                );
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                self.scan_escape_sequence(&mut value);
                continue;
            }
            value.push(ch);
            self.pos += ch.len_utf8();
        }
        self.token_value = value;
        SyntaxKind::StringLiteral
    }

    /// Cook one escape sequence; `self.pos` is just past the backslash.
    fn scan_escape_sequence(&mut self, value: &mut String) {
        let Some(ch) = self.current_char() else {
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'v' => value.push('\u{000B}'),
            '0' if !self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) => {
                value.push('\0');
            }
            'x' => match self.scan_hex_digits(2, 2) {
                Some(code) => push_code_point(value, code),
                None => self.report_hex_digit_expected(),
            },
            'u' => {
                let code = if self.byte_at(self.pos) == Some(b'{') {
                    self.pos += 1;
                    let code = self.scan_hex_digits(1, 6);
                    if self.byte_at(self.pos) == Some(b'}') {
                        self.pos += 1;
                        code
                    } else {
                        None
                    }
                } else {
                    self.scan_hex_digits(4, 4)
                };
                match code {
                    Some(code) => push_code_point(value, code),
                    None => self.report_hex_digit_expected(),
                }
            }
            // Line continuation contributes nothing to the value.
            '\r' => {
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => value.push(other),
        }
    }

    fn scan_hex_digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let start = self.pos;
        let mut code: u32 = 0;
        while self.pos - start < max {
            let Some(digit) = self.byte_at(self.pos).and_then(|b| (b as char).to_digit(16))
            else {
                break;
            };
            code = code * 16 + digit;
            self.pos += 1;
        }
        (self.pos - start >= min).then_some(code)
    }

    fn report_hex_digit_expected(&mut self) {
        self.error(
            self.pos,
            1,
            "Hexadecimal digit expected.",
            diagnostic_codes::HEXADECIMAL_DIGIT_EXPECTED,
        );
    }

    fn scan_punctuation(&mut self, ch: char) -> SyntaxKind {
        let next = self.byte_at(self.pos + 1);
        let next2 = self.byte_at(self.pos + 2);
        let (kind, len) = match ch {
            '{' => (SyntaxKind::OpenBraceToken, 1),
            '}' => (SyntaxKind::CloseBraceToken, 1),
            '(' => (SyntaxKind::OpenParenToken, 1),
            ')' => (SyntaxKind::CloseParenToken, 1),
            '[' => (SyntaxKind::OpenBracketToken, 1),
            ']' => (SyntaxKind::CloseBracketToken, 1),
            ';' => (SyntaxKind::SemicolonToken, 1),
            ',' => (SyntaxKind::CommaToken, 1),
            '?' => (SyntaxKind::QuestionToken, 1),
            ':' => (SyntaxKind::ColonToken, 1),
            '~' => (SyntaxKind::TildeToken, 1),
            '.' if next == Some(b'.') && next2 == Some(b'.') => (SyntaxKind::DotDotDotToken, 3),
            '.' => (SyntaxKind::DotToken, 1),
            '<' if next == Some(b'=') => (SyntaxKind::LessThanEqualsToken, 2),
            '<' => (SyntaxKind::LessThanToken, 1),
            '>' if next == Some(b'=') => (SyntaxKind::GreaterThanEqualsToken, 2),
            '>' => (SyntaxKind::GreaterThanToken, 1),
            '=' if next == Some(b'=') && next2 == Some(b'=') => {
                (SyntaxKind::EqualsEqualsEqualsToken, 3)
            }
            '=' if next == Some(b'=') => (SyntaxKind::EqualsEqualsToken, 2),
            '=' if next == Some(b'>') => (SyntaxKind::EqualsGreaterThanToken, 2),
            '=' => (SyntaxKind::EqualsToken, 1),
            '!' if next == Some(b'=') && next2 == Some(b'=') => {
                (SyntaxKind::ExclamationEqualsEqualsToken, 3)
            }
            '!' if next == Some(b'=') => (SyntaxKind::ExclamationEqualsToken, 2),
            '!' => (SyntaxKind::ExclamationToken, 1),
            '+' if next == Some(b'+') => (SyntaxKind::PlusPlusToken, 2),
            '+' if next == Some(b'=') => (SyntaxKind::PlusEqualsToken, 2),
            '+' => (SyntaxKind::PlusToken, 1),
            '-' if next == Some(b'-') => (SyntaxKind::MinusMinusToken, 2),
            '-' if next == Some(b'=') => (SyntaxKind::MinusEqualsToken, 2),
            '-' => (SyntaxKind::MinusToken, 1),
            '*' if next == Some(b'=') => (SyntaxKind::AsteriskEqualsToken, 2),
            '*' => (SyntaxKind::AsteriskToken, 1),
            '/' if next == Some(b'=') => (SyntaxKind::SlashEqualsToken, 2),
            '/' => (SyntaxKind::SlashToken, 1),
            '%' if next == Some(b'=') => (SyntaxKind::PercentEqualsToken, 2),
            '%' => (SyntaxKind::PercentToken, 1),
            '&' if next == Some(b'&') => (SyntaxKind::AmpersandAmpersandToken, 2),
            '|' if next == Some(b'|') => (SyntaxKind::BarBarToken, 2),
            _ => {
                let len = ch.len_utf8();
                self.error(
                    self.pos,
                    len,
                    "Invalid character.",
                    diagnostic_codes::INVALID_CHARACTER,
                );
                self.pos += len;
                return SyntaxKind::Unknown;
            }
        };
        self.pos += len;
        kind
    }
}

fn push_code_point(value: &mut String, code: u32) {
    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
