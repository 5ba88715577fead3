//! Logical NOT node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// Unary NOT node inverting the truthiness of its input
#[derive(Default)]
pub struct NotNodeFactory;

impl NodeFactory for NotNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("Not", "Not", NodeCategory::Logic, "1 when the input is falsy")
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Not, position).with_size(meta.size_hint);
        node.add_input("in").add_output("result");
        node.update_port_positions();
        node
    }
}

pub fn process_not(value: &Value) -> Value {
    if value.is_error() {
        return Value::Error;
    }
    Value::Int(!value.is_truthy() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_not() {
        assert_eq!(process_not(&Value::Int(0)), Value::Int(1));
        assert_eq!(process_not(&Value::Int(7)), Value::Int(0));
        assert_eq!(process_not(&Value::String(String::new())), Value::Int(1));
        assert_eq!(process_not(&Value::Error), Value::Error);
    }
}
