//! JavaScript printer over the arena AST.
//!
//! Split by syntactic area the same way the parser is:
//! - `statements`: source files, statements, declarations
//! - `expressions`: operators, member access, calls, literals of aggregate type
//! - `functions`: functions, arrows, classes, members, parameters, binding patterns
//! - `literals`: identifiers, strings, numbers, keywords
//! - `helpers`: output helpers delegating to [`SourceWriter`]

use jsnames_parser::parser::{NodeArena, NodeData, NodeIndex};

use crate::source_writer::SourceWriter;

mod expressions;
mod functions;
mod helpers;
mod literals;
mod statements;

pub use literals::quote_string;

/// Printing options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Omit optional whitespace and line breaks.
    pub compact: bool,
    /// Always quote strings with `'`; otherwise the source quote is kept and
    /// `"` is used when the source is unknown.
    pub single_quote: bool,
}

impl PrinterOptions {
    /// Compact, single-quoted layout used for path segments.
    pub const fn compact() -> Self {
        PrinterOptions {
            compact: true,
            single_quote: true,
        }
    }
}

pub struct Printer<'a> {
    pub(super) arena: &'a NodeArena,
    pub(super) writer: SourceWriter,
    pub(super) options: PrinterOptions,
    /// Source text of the printed file, used to keep the original quote style.
    pub(super) source_text: Option<&'a str>,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena, options: PrinterOptions) -> Self {
        Printer {
            arena,
            writer: SourceWriter::new(options.compact),
            options,
            source_text: None,
        }
    }

    pub fn with_source_text(mut self, text: &'a str) -> Self {
        self.source_text = Some(text);
        self
    }

    /// Print `idx` and everything below it.
    pub fn emit(&mut self, idx: NodeIndex) {
        self.emit_node(idx);
    }

    pub fn get_output(&self) -> &str {
        self.writer.get_output()
    }

    pub fn finish(self) -> String {
        self.writer.into_output()
    }

    pub(super) fn emit_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match &node.data {
            NodeData::SourceFile(data) => self.emit_source_file(data),
            NodeData::VariableStatement(data) => self.emit_variable_statement(data),
            NodeData::VariableDeclarationList(data) => self.emit_variable_declaration_list(data),
            NodeData::VariableDeclaration(data) => self.emit_variable_declaration(data),
            NodeData::FunctionDeclaration(data) | NodeData::FunctionExpression(data) => {
                self.emit_function(data);
            }
            NodeData::ArrowFunction(data) => self.emit_arrow_function(data),
            NodeData::ClassDeclaration(data) | NodeData::ClassExpression(data) => {
                self.emit_class(data);
            }
            NodeData::Block(data) => self.emit_block(&data.statements),
            NodeData::ExpressionStatement(data) => self.emit_expression_statement(data),
            NodeData::ReturnStatement(data) => self.emit_keyword_statement("return", data),
            NodeData::ThrowStatement(data) => self.emit_keyword_statement("throw", data),
            NodeData::IfStatement(data) => self.emit_if_statement(data),
            NodeData::WhileStatement(data) => self.emit_while_statement(data),
            NodeData::ForStatement(data) => self.emit_for_statement(data),
            NodeData::EmptyStatement => self.write(";"),
            NodeData::ExportDefault(data) => self.emit_export_default(data.expression),
            NodeData::ExportDeclaration(data) => {
                self.write("export");
                self.write_space();
                self.emit_node(data.declaration);
            }
            NodeData::Identifier(data) => self.write(&data.escaped_text),
            NodeData::StringLiteral(data) => self.emit_string_literal(node.pos, &data.text),
            NodeData::NumericLiteral(data) => self.write(&data.text),
            NodeData::TrueKeyword => self.write("true"),
            NodeData::FalseKeyword => self.write("false"),
            NodeData::NullKeyword => self.write("null"),
            NodeData::ThisKeyword => self.write("this"),
            NodeData::SuperKeyword => self.write("super"),
            NodeData::ArrayLiteralExpression(data) => self.emit_array_literal(&data.elements),
            NodeData::ObjectLiteralExpression(data) => self.emit_object_literal(&data.properties),
            NodeData::OmittedExpression => {}
            NodeData::PropertyAssignment(data) => {
                self.emit_node(data.name);
                self.write(":");
                self.write_space();
                self.emit_node(data.initializer);
            }
            NodeData::ShorthandPropertyAssignment(data) => self.emit_node(data.name),
            NodeData::SpreadElement(data) => {
                self.write("...");
                self.emit_node(data.expression);
            }
            NodeData::ComputedPropertyName(data) => {
                self.write("[");
                self.emit_node(data.expression);
                self.write("]");
            }
            NodeData::MethodDeclaration(data) => self.emit_method(data),
            NodeData::GetAccessor(data) => self.emit_accessor("get", data),
            NodeData::SetAccessor(data) => self.emit_accessor("set", data),
            NodeData::Constructor(data) => {
                self.write("constructor");
                self.emit_parameters(&data.parameters);
                self.write_space();
                self.emit_node(data.body);
            }
            NodeData::PropertyDeclaration(data) => self.emit_property_declaration(data),
            NodeData::Parameter(data) => {
                if data.dot_dot_dot_token {
                    self.write("...");
                }
                self.emit_node(data.name);
                self.emit_initializer(data.initializer);
            }
            NodeData::ObjectBindingPattern(data) => self.emit_object_binding_pattern(&data.elements),
            NodeData::ArrayBindingPattern(data) => {
                self.write("[");
                self.emit_comma_list(&data.elements);
                self.write("]");
            }
            NodeData::BindingElement(data) => self.emit_binding_element(data),
            NodeData::PropertyAccessExpression(data) => {
                self.emit_node(data.expression);
                self.write(".");
                self.emit_node(data.name_or_argument);
            }
            NodeData::ElementAccessExpression(data) => {
                self.emit_node(data.expression);
                self.write("[");
                self.emit_node(data.name_or_argument);
                self.write("]");
            }
            NodeData::CallExpression(data) => self.emit_call(data, false),
            NodeData::NewExpression(data) => self.emit_call(data, true),
            NodeData::BinaryExpression(data) => self.emit_binary(data),
            NodeData::PrefixUnaryExpression(data) => self.emit_prefix_unary(data),
            NodeData::PostfixUnaryExpression(data) => {
                self.emit_node(data.operand);
                self.write(data.operator.text());
            }
            NodeData::ConditionalExpression(data) => self.emit_conditional(data),
            NodeData::ParenthesizedExpression(data) => {
                self.write("(");
                self.emit_node(data.expression);
                self.write(")");
            }
            NodeData::YieldExpression(data) => self.emit_yield(data),
        }
    }
}

/// Print a whole source file in the readable layout.
pub fn print_source_file(arena: &NodeArena, root: NodeIndex) -> String {
    let mut printer = Printer::new(arena, PrinterOptions::default());
    if let Some(source_file) = arena.get_source_file_at(root) {
        printer = printer.with_source_text(&source_file.text);
    }
    printer.emit(root);
    let output = printer.finish();
    tracing::debug!(bytes = output.len(), "printed source file");
    output
}

/// Print any node with the given options.
pub fn print_node(arena: &NodeArena, idx: NodeIndex, options: PrinterOptions) -> String {
    let mut printer = Printer::new(arena, options);
    printer.emit(idx);
    printer.finish()
}

/// Print an expression without optional whitespace and with single-quoted
/// strings, e.g. `'x'+this.id`.
pub fn print_expression_compact(arena: &NodeArena, idx: NodeIndex) -> String {
    print_node(arena, idx, PrinterOptions::compact())
}
