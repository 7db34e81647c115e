use super::Printer;
use jsnames_parser::parser::{NodeIndex, NodeList};

impl<'a> Printer<'a> {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_char(&mut self, ch: char) {
        self.writer.write_char(ch);
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    // =========================================================================
    // List Helpers
    // =========================================================================

    /// Emit nodes separated by `,` (plus a space in the readable layout).
    pub(super) fn emit_comma_list(&mut self, list: &NodeList) {
        for (i, &idx) in list.nodes.iter().enumerate() {
            if i > 0 {
                self.write(",");
                self.write_space();
            }
            self.emit_node(idx);
        }
        // A trailing hole needs its own comma: `[a, ,]` keeps its length.
        if let Some(&last) = list.nodes.last()
            && self.is_omitted(last)
        {
            self.write(",");
        }
    }

    /// Emit ` = initializer` when present.
    pub(super) fn emit_initializer(&mut self, initializer: NodeIndex) {
        if initializer.is_none() {
            return;
        }
        self.write_space();
        self.write("=");
        self.write_space();
        self.emit_node(initializer);
    }

    fn is_omitted(&self, idx: NodeIndex) -> bool {
        matches!(
            self.arena.data(idx),
            Some(jsnames_parser::parser::NodeData::OmittedExpression)
        )
    }
}
