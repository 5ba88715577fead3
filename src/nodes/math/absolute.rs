//! Absolute-value node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Unary node producing the magnitude of its input
#[derive(Default)]
pub struct AbsoluteNodeFactory;

impl NodeFactory for AbsoluteNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Absolute",
            "Absolute",
            NodeCategory::Math,
            "Magnitude of the input",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Absolute, position).with_size(meta.size_hint);
        node.add_input("in").add_output("result");
        node.update_port_positions();
        node
    }
}

pub fn process_absolute(value: &Value) -> Value {
    match value.as_numeric() {
        Some(Numeric::Int(i)) => Value::Int(i.saturating_abs()),
        Some(Numeric::Float(f)) => Value::Float(f.abs()),
        None => Value::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_absolute() {
        assert_eq!(process_absolute(&Value::Int(-4)), Value::Int(4));
        assert_eq!(process_absolute(&Value::Float(-2.5)), Value::Float(2.5));
        assert_eq!(process_absolute(&Value::String("x".into())), Value::Error);
    }
}
