//! Centralized limits for the jsnames front end and passes.
//!
//! Every recursive walk over the syntax tree is bounded so that adversarial
//! input (thousands of nested parentheses, blocks or member accesses) cannot
//! overflow the stack.

/// Maximum depth for AST traversal in the naming passes and the printer.
///
/// Nodes nested deeper than this are not visited. Functions beyond the limit
/// are left unnamed.
///
/// ```javascript
/// // Deeply nested blocks or calls:
/// f(f(f(f(f(f(f(f(f(f(f(f(/* ... 500 levels ... */))))))))))));
/// ```
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum depth for recursive-descent parsing.
///
/// When exceeded the parser reports a diagnostic and returns a missing node
/// instead of descending further.
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 1_000;

/// Maximum number of member-access links followed while reconstructing a
/// qualified path (`a.b.c.d...`). Longer chains are not naming contexts.
pub const MAX_QUALIFIED_NAME_DEPTH: u32 = 100;
