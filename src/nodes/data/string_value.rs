//! String literal node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Editable string literal; new nodes start empty
#[derive(Default)]
pub struct StringValueNodeFactory;

impl NodeFactory for StringValueNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "String",
            "String",
            NodeCategory::Data,
            "Editable string literal",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::StringValue {
                value: String::new(),
            },
            position,
        )
        .with_size(meta.size_hint);
        node.add_output("out");
        node.update_port_positions();
        node
    }
}
