//! Parser state: token handling, diagnostics and recursion guards.
//!
//! The grammar itself lives in `state_statements`, `state_expressions` and
//! `state_class_members`, each adding methods to [`ParserState`].

use jsnames_common::diagnostics::{Diagnostic, diagnostic_codes};
use jsnames_common::limits::MAX_PARSER_RECURSION_DEPTH;
use jsnames_scanner::{ScannerState, SyntaxKind};

use super::base::{NodeIndex, NodeList};
use super::node::NodeArena;

/// Parsing inside a generator body: `yield` is an operator.
pub(crate) const CONTEXT_FLAG_GENERATOR: u32 = 1 << 0;
/// Parsing inside an async body.
pub(crate) const CONTEXT_FLAG_ASYNC: u32 = 1 << 1;
/// Parsing the initializer of a `for(;;)` statement.
pub(crate) const CONTEXT_FLAG_FOR_INITIALIZER: u32 = 1 << 2;

/// A syntax error found while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) context_flags: u32,
    pub(crate) current_token: SyntaxKind,
    /// End of the most recently consumed token; used as node end positions.
    pub(crate) previous_token_end: u32,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    pub(crate) recursion_depth: u32,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let capacity = source_text.len() / 4;
        ParserState {
            scanner: ScannerState::new(source_text),
            arena: NodeArena::with_capacity(capacity),
            file_name,
            context_flags: 0,
            current_token: SyntaxKind::Unknown,
            previous_token_end: 0,
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Parse diagnostics as shared [`Diagnostic`] values for reporting.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.parse_diagnostics
            .iter()
            .map(|d| Diagnostic::error(&self.file_name, d.start, d.length, &d.message, d.code))
            .collect()
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.u32_from_usize(self.scanner.token_pos())
    }

    /// End position of the last consumed token.
    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.previous_token_end
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    pub(crate) fn u32_from_usize(&self, value: usize) -> u32 {
        u32::try_from(value).unwrap_or(u32::MAX)
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.previous_token_end = self.u32_from_usize(self.scanner.token_end());
        self.current_token = self.scanner.scan();
        self.current_token
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        self.parse_error_at_current_token(
            &format!("'{}' expected.", kind.text()),
            diagnostic_codes::TOKEN_EXPECTED,
        );
        false
    }

    /// Identifiers, plus contextual keywords usable as binding names.
    pub(crate) fn is_identifier(&self) -> bool {
        match self.token() {
            SyntaxKind::Identifier => true,
            SyntaxKind::YieldKeyword => !self.in_generator_context(),
            kind => kind.is_contextual_keyword(),
        }
    }

    /// Any identifier or keyword (property names after `.`, member names).
    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.is_token(SyntaxKind::Identifier) || self.token().is_keyword()
    }

    pub(crate) fn can_parse_semicolon(&self) -> bool {
        self.is_token(SyntaxKind::SemicolonToken)
            || self.is_token(SyntaxKind::CloseBraceToken)
            || self.is_token(SyntaxKind::EndOfFileToken)
            || self.has_preceding_line_break()
    }

    /// Consume a semicolon, applying automatic semicolon insertion.
    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.parse_optional(SyntaxKind::SemicolonToken) {
            return true;
        }
        if self.can_parse_semicolon() {
            return true;
        }
        self.parse_expected(SyntaxKind::SemicolonToken)
    }

    pub(crate) fn make_node_list(&self, nodes: Vec<NodeIndex>) -> NodeList {
        NodeList::new(nodes)
    }

    // =========================================================================
    // Look-ahead
    // =========================================================================

    /// Run `callback` speculatively and rewind the scanner afterwards.
    pub(crate) fn look_ahead<T>(&mut self, callback: impl FnOnce(&mut ParserState) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let saved_token = self.current_token;
        let saved_end = self.previous_token_end;
        let saved_diagnostics = self.parse_diagnostics.len();
        let result = callback(self);
        self.scanner.restore_state(snapshot);
        self.current_token = saved_token;
        self.previous_token_end = saved_end;
        self.parse_diagnostics.truncate(saved_diagnostics);
        result
    }

    // =========================================================================
    // Context flags
    // =========================================================================

    #[inline]
    pub(crate) fn in_generator_context(&self) -> bool {
        self.context_flags & CONTEXT_FLAG_GENERATOR != 0
    }

    #[inline]
    pub(crate) fn in_for_initializer(&self) -> bool {
        self.context_flags & CONTEXT_FLAG_FOR_INITIALIZER != 0
    }

    // =========================================================================
    // Diagnostics and recursion
    // =========================================================================

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self
            .u32_from_usize(self.scanner.token_end())
            .saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        // Only one error per position, like tsc.
        if self
            .parse_diagnostics
            .last()
            .is_some_and(|last| last.start == start)
        {
            return;
        }
        tracing::trace!(start, code, message, "parse error");
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: message.to_string(),
            code,
        });
    }

    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            self.parse_error_at_current_token(
                "Expression or statement nested too deeply.",
                diagnostic_codes::NESTING_TOO_DEEP,
            );
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}
