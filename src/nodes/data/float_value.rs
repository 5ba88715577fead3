//! Float literal node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Editable float literal; new nodes start at zero
#[derive(Default)]
pub struct FloatValueNodeFactory;

impl NodeFactory for FloatValueNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Float",
            "Float",
            NodeCategory::Data,
            "Editable float literal",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::FloatValue { value: 0.0 },
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
    fn test_float_literal() {
        let node = FloatValueNodeFactory::create(Pos2::ZERO);
        assert_eq!(node.kind.compute(&[]), vec![("out", Value::Float(0.0))]);
        assert!(node.kind.is_editable());
    }
}
