//! Subtraction node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Subtraction node that takes two inputs and produces their difference
#[derive(Default)]
pub struct SubtractNodeFactory;

impl NodeFactory for SubtractNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Subtract",
            "Subtract",
            NodeCategory::Math,
            "Subtracts B from A",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Subtract, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("difference");
        node.update_port_positions();
        node
    }
}

/// Numeric subtraction; non-numeric operands yield Error
pub fn process_subtract(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) => Value::Int(x.wrapping_sub(y)),
        (Some(x), Some(y)) => Value::Float(x.as_f64() - y.as_f64()),
        _ => Value::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_subtract() {
        assert_eq!(process_subtract(&Value::Int(10), &Value::Int(4)), Value::Int(6));
        assert_eq!(
            process_subtract(&Value::Float(1.5), &Value::Int(1)),
            Value::Float(0.5)
        );
        assert_eq!(
            process_subtract(&Value::String("a".into()), &Value::Int(1)),
            Value::Error
        );
    }
}
