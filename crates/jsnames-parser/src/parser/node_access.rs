//! NodeArena access methods.
//!
//! Typed getters return `None` when the node is absent or has a different
//! shape, so callers can chain them with `?` and `let ... else`.

use super::base::NodeIndex;
use super::node::*;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn data(&self, index: NodeIndex) -> Option<&NodeData> {
        self.get(index).map(|node| &node.data)
    }

    /// Parent of a node, `NodeIndex::NONE` for the root or an absent node.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    /// Children of a node in source order (for traversal).
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        self.data(index).map(NodeData::children).unwrap_or_default()
    }

    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        match self.data(index)? {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    /// Get identifier data for a node.
    #[inline]
    pub fn get_identifier<'a>(&self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// Text of an identifier node.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|data| data.escaped_text.as_str())
    }

    /// Get literal data for a string or numeric literal node.
    #[inline]
    pub fn get_literal<'a>(&self, node: &'a Node) -> Option<&'a LiteralData> {
        match &node.data {
            NodeData::StringLiteral(data) | NodeData::NumericLiteral(data) => Some(data),
            _ => None,
        }
    }

    /// Cooked value of a string literal node.
    pub fn get_string_literal_text(&self, index: NodeIndex) -> Option<&str> {
        match self.data(index)? {
            NodeData::StringLiteral(data) => Some(data.text.as_str()),
            _ => None,
        }
    }

    /// Function data for declarations, expressions and arrow functions.
    #[inline]
    pub fn get_function<'a>(&self, node: &'a Node) -> Option<&'a FunctionData> {
        match &node.data {
            NodeData::FunctionDeclaration(data)
            | NodeData::FunctionExpression(data)
            | NodeData::ArrowFunction(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_variable_declaration<'a>(
        &self,
        node: &'a Node,
    ) -> Option<&'a VariableDeclarationData> {
        match &node.data {
            NodeData::VariableDeclaration(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_binary_expr<'a>(&self, node: &'a Node) -> Option<&'a BinaryExprData> {
        match &node.data {
            NodeData::BinaryExpression(data) => Some(data),
            _ => None,
        }
    }

    /// Access data for property and element access expressions.
    #[inline]
    pub fn get_access_expr<'a>(&self, node: &'a Node) -> Option<&'a AccessExprData> {
        match &node.data {
            NodeData::PropertyAccessExpression(data) | NodeData::ElementAccessExpression(data) => {
                Some(data)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn get_property_assignment<'a>(
        &self,
        node: &'a Node,
    ) -> Option<&'a PropertyAssignmentData> {
        match &node.data {
            NodeData::PropertyAssignment(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_parameter<'a>(&self, node: &'a Node) -> Option<&'a ParameterData> {
        match &node.data {
            NodeData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_binding_element<'a>(&self, node: &'a Node) -> Option<&'a BindingElementData> {
        match &node.data {
            NodeData::BindingElement(data) => Some(data),
            _ => None,
        }
    }

    /// Unwrap any number of parentheses around an expression.
    pub fn skip_parentheses(&self, mut index: NodeIndex) -> NodeIndex {
        while let Some(NodeData::ParenthesizedExpression(data)) = self.data(index) {
            index = data.expression;
        }
        index
    }

    /// Walk up through parentheses wrapping `index`, returning the outermost
    /// parenthesized node (or `index` itself when it is not wrapped).
    pub fn outermost_parenthesized(&self, mut index: NodeIndex) -> NodeIndex {
        loop {
            let parent = self.parent_of(index);
            match self.data(parent) {
                Some(NodeData::ParenthesizedExpression(_)) => index = parent,
                _ => return index,
            }
        }
    }
}
