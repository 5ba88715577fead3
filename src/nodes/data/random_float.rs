//! Random float literal node implementation

use egui::Pos2;
use rand::Rng;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Float literal sampled from the unit interval once at creation
#[derive(Default)]
pub struct RandomFloatNodeFactory;

impl NodeFactory for RandomFloatNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Random Float",
            "Random Float",
            NodeCategory::Data,
            "Float fixed at creation time",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let value = rand::rng().random::<f64>();
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::RandomFloat { value },
            position,
        )
        .with_size(meta.size_hint);
        node.add_output("out");
        node.update_port_positions();
        node
    }
}
