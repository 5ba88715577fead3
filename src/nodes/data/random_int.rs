//! Random integer literal node implementation

use egui::Pos2;
use rand::Rng;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Integer literal sampled from 0..100 once at creation; not editable and
/// never re-rolled by evaluation
#[derive(Default)]
pub struct RandomIntNodeFactory;

impl NodeFactory for RandomIntNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Random Integer",
            "Random Integer",
            NodeCategory::Data,
            "Integer fixed at creation time",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let value = rand::rng().random_range(0..100);
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::RandomInt { value },
            position,
        )
        .with_size(meta.size_hint);
        node.add_output("out");
        node.update_port_positions();
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::value::Value;

    #[test]
    fn test_random_integer_is_fixed_after_creation() {
        let node = RandomIntNodeFactory::create(Pos2::ZERO);
        let NodeKind::RandomInt { value } = &node.kind else {
            panic!("wrong kind");
        };
        let value = *value;
        assert!((0..100).contains(&value));
        assert!(!node.kind.is_editable());

        // Re-running compute emits the same sample
        assert_eq!(node.kind.compute(&[]), vec![("out", Value::Int(value))]);
        assert_eq!(node.kind.compute(&[]), vec![("out", Value::Int(value))]);
    }
}
