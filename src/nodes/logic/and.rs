//! Logical AND node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// AND node emitting 1 when both inputs are truthy
#[derive(Default)]
pub struct AndNodeFactory;

impl NodeFactory for AndNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("And", "And", NodeCategory::Logic, "1 when A and B are truthy")
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::And, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("result");
        node.update_port_positions();
        node
    }
}

pub fn process_and(a: &Value, b: &Value) -> Value {
    if a.is_error() || b.is_error() {
        return Value::Error;
    }
    Value::Int((a.is_truthy() && b.is_truthy()) as i64)
}
