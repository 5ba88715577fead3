//! Logical OR node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// OR node emitting 1 when either input is truthy
#[derive(Default)]
pub struct OrNodeFactory;

impl NodeFactory for OrNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("Or", "Or", NodeCategory::Logic, "1 when A or B is truthy")
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Or, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("result");
        node.update_port_positions();
        node
    }
}

pub fn process_or(a: &Value, b: &Value) -> Value {
    if a.is_error() || b.is_error() {
        return Value::Error;
    }
    Value::Int((a.is_truthy() || b.is_truthy()) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_or() {
        assert_eq!(process_or(&Value::Int(0), &Value::Int(0)), Value::Int(0));
        assert_eq!(process_or(&Value::Int(0), &Value::Int(3)), Value::Int(1));
        assert_eq!(process_or(&Value::Error, &Value::Int(1)), Value::Error);
    }
}
