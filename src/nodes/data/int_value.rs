//! Integer literal node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Editable integer literal; new nodes start at zero
#[derive(Default)]
pub struct IntValueNodeFactory;

impl NodeFactory for IntValueNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Integer",
            "Integer",
            NodeCategory::Data,
            "Editable integer literal",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        Self::create_with_value(position, 0)
    }
}

impl IntValueNodeFactory {
    /// Create a literal pre-seeded with a value, used by starter graphs
    pub fn create_with_value(position: Pos2, value: i64) -> Node {
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::IntValue { value },
            position,
        )
        .with_size(meta.size_hint);
        node.add_output("out");
        node.update_port_positions();
        node
    }
}
