//! Display node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Sink node that shows the value arriving on its input
///
/// Unconnected it renders "None"; an incoming Error marker renders as the
/// literal string "Error".
#[derive(Default)]
pub struct DisplayNodeFactory;

impl NodeFactory for DisplayNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Display",
            "Display",
            NodeCategory::Output,
            "Shows the incoming value",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Display, position).with_size(meta.size_hint);
        node.add_input("in");
        node.update_port_positions();
        node
    }
}
