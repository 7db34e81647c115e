use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// Codes for the diagnostics produced while scanning and parsing.
///
/// The numbering follows the TypeScript compiler where an equivalent exists so
/// messages stay recognizable to people used to `tsc` output.
pub mod diagnostic_codes {
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const TOKEN_EXPECTED: u32 = 1005;
    pub const UNEXPECTED_END_OF_TEXT: u32 = 1126;
    pub const INVALID_CHARACTER: u32 = 1127;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const VARIABLE_DECLARATION_EXPECTED: u32 = 1134;
    pub const EXPRESSION_EXPECTED: u32 = 1109;
    pub const PROPERTY_ASSIGNMENT_EXPECTED: u32 = 1136;
    pub const UNTERMINATED_MULTI_LINE_COMMENT: u32 = 1010;
    pub const HEXADECIMAL_DIGIT_EXPECTED: u32 = 1125;
    pub const NESTING_TOO_DEEP: u32 = 2589;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
