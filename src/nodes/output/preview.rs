//! Preview node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Pass-through display: shows the incoming value and re-emits it downstream
#[derive(Default)]
pub struct PreviewNodeFactory;

impl NodeFactory for PreviewNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Preview",
            "Preview",
            NodeCategory::Output,
            "Shows the incoming value and passes it on",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Preview, position).with_size(meta.size_hint);
        node.add_input("in").add_output("out");
        node.update_port_positions();
        node
    }
}
