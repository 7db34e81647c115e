//! NodeArena creation and mutation methods.
//!
//! This module contains node creation (which wires parent links) and the
//! few in-place mutations passes are allowed to make.

use super::base::NodeIndex;
use super::node::{IdentifierData, Node, NodeArena, NodeData};

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Set the parent for a single child node.
    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Append a node and point its children back at it.
    pub fn add_node(&mut self, pos: u32, end: u32, data: NodeData) -> NodeIndex {
        let index = NodeIndex(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX - 1));
        let children = data.children();
        self.nodes.push(Node {
            pos,
            end,
            parent: NodeIndex::NONE,
            data,
        });
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    pub fn add_identifier(&mut self, pos: u32, end: u32, text: impl Into<String>) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::Identifier(IdentifierData {
                escaped_text: text.into(),
            }),
        )
    }

    // ============================================================================
    // Mutation
    // ============================================================================

    /// Attach `name` to an anonymous function expression or declaration.
    ///
    /// The identifier is created at the function's position with an empty
    /// range. Parameters, body and the async/generator markers are untouched.
    /// Returns `false` if `func` is not a function or already has a name.
    pub fn set_function_name(&mut self, func: NodeIndex, name: &str) -> bool {
        let Some(node) = self.get(func) else {
            return false;
        };
        let pos = node.pos;
        match &node.data {
            NodeData::FunctionExpression(data) | NodeData::FunctionDeclaration(data)
                if data.name.is_none() => {}
            _ => return false,
        }

        let name_idx = self.add_identifier(pos, pos, name);
        self.set_parent(name_idx, func);
        match self.get_mut(func).map(|node| &mut node.data) {
            Some(NodeData::FunctionExpression(data) | NodeData::FunctionDeclaration(data)) => {
                data.name = name_idx;
                true
            }
            _ => false,
        }
    }
}
