use super::Printer;
use jsnames_parser::parser::{
    AccessorData, BindingElementData, ClassData, FunctionData, MethodDeclData, NodeList,
    PropertyDeclData,
};

impl<'a> Printer<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    /// Function declarations and expressions.
    pub(super) fn emit_function(&mut self, data: &FunctionData) {
        if data.is_async {
            self.write("async");
            self.write_space();
        }
        self.write("function");
        if data.asterisk_token {
            self.write("*");
        }
        if data.name.is_some() {
            self.write_space();
            self.emit_node(data.name);
        }
        self.emit_parameters(&data.parameters);
        self.write_space();
        self.emit_node(data.body);
    }

    pub(super) fn emit_arrow_function(&mut self, data: &FunctionData) {
        if data.is_async {
            self.write("async");
            self.write_space();
        }
        self.emit_parameters(&data.parameters);
        self.write_space();
        self.write("=>");
        self.write_space();
        self.emit_node(data.body);
    }

    pub(super) fn emit_parameters(&mut self, parameters: &NodeList) {
        self.write("(");
        self.emit_comma_list(parameters);
        self.write(")");
    }

    // =========================================================================
    // Classes and members
    // =========================================================================

    pub(super) fn emit_class(&mut self, data: &ClassData) {
        self.write("class");
        if data.name.is_some() {
            self.write_space();
            self.emit_node(data.name);
        }
        if data.heritage.is_some() {
            self.write_space();
            self.write("extends");
            self.write_space();
            self.emit_node(data.heritage);
        }
        self.write_space();
        if data.members.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for &member in &data.members.nodes {
            self.emit_node(member);
            self.write_line();
        }
        self.decrease_indent();
        self.write("}");
    }

    fn emit_static(&mut self, is_static: bool) {
        if is_static {
            self.write("static");
            self.write_space();
        }
    }

    pub(super) fn emit_method(&mut self, data: &MethodDeclData) {
        self.emit_static(data.is_static);
        if data.is_async {
            self.write("async");
            self.write_space();
        }
        if data.asterisk_token {
            self.write("*");
        }
        self.emit_node(data.name);
        self.emit_parameters(&data.parameters);
        self.write_space();
        self.emit_node(data.body);
    }

    /// `get name() {}` / `set name(v) {}`
    pub(super) fn emit_accessor(&mut self, keyword: &str, data: &AccessorData) {
        self.emit_static(data.is_static);
        self.write(keyword);
        self.write_space();
        self.emit_node(data.name);
        self.emit_parameters(&data.parameters);
        self.write_space();
        self.emit_node(data.body);
    }

    pub(super) fn emit_property_declaration(&mut self, data: &PropertyDeclData) {
        self.emit_static(data.is_static);
        self.emit_node(data.name);
        self.emit_initializer(data.initializer);
        self.write(";");
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub(super) fn emit_object_binding_pattern(&mut self, elements: &NodeList) {
        if elements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_space();
        self.emit_comma_list(elements);
        self.write_space();
        self.write("}");
    }

    pub(super) fn emit_binding_element(&mut self, data: &BindingElementData) {
        if data.dot_dot_dot_token {
            self.write("...");
        }
        if data.property_name.is_some() {
            self.emit_node(data.property_name);
            self.write(":");
            self.write_space();
        }
        self.emit_node(data.name);
        self.emit_initializer(data.initializer);
    }
}
