//! List literal node implementation

use egui::Pos2;

use crate::constants;
use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};

/// Editable list-of-strings literal, edited as comma-separated text
#[derive(Default)]
pub struct ListValueNodeFactory;

impl NodeFactory for ListValueNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "List",
            "List",
            NodeCategory::Data,
            "Editable list of strings",
        )
        .with_size_hint(constants::node::COMPACT_SIZE)
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node = Node::new(
            0,
            meta.display_name,
            NodeKind::ListValue { items: Vec::new() },
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
    fn test_list_literal() {
        let node = ListValueNodeFactory::create(Pos2::ZERO);
        assert_eq!(node.kind.compute(&[]), vec![("out", Value::List(vec![]))]);
        assert!(node.kind.is_editable());
    }
}
