//! Logical XOR node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// XOR node emitting 1 when exactly one input is truthy
#[derive(Default)]
pub struct XorNodeFactory;

impl NodeFactory for XorNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Xor",
            "Xor",
            NodeCategory::Logic,
            "1 when exactly one of A, B is truthy",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Xor, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("result");
        node.update_port_positions();
        node
    }
}

pub fn process_xor(a: &Value, b: &Value) -> Value {
    if a.is_error() || b.is_error() {
        return Value::Error;
    }
    Value::Int((a.is_truthy() != b.is_truthy()) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_xor() {
        assert_eq!(process_xor(&Value::Int(1), &Value::Int(0)), Value::Int(1));
        assert_eq!(process_xor(&Value::Int(1), &Value::Int(5)), Value::Int(0));
        assert_eq!(process_xor(&Value::Int(0), &Value::Int(0)), Value::Int(0));
    }
}
