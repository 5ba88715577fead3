//! Multiplication node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Multiplication node that takes two inputs and produces their product
#[derive(Default)]
pub struct MultiplyNodeFactory;

impl NodeFactory for MultiplyNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Multiply",
            "Multiply",
            NodeCategory::Math,
            "Multiplies two values",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Multiply, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("product");
        node.update_port_positions();
        node
    }
}

/// Numeric multiplication; non-numeric operands yield Error
pub fn process_multiply(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) => Value::Int(x.wrapping_mul(y)),
        (Some(x), Some(y)) => Value::Float(x.as_f64() * y.as_f64()),
        _ => Value::Error,
    }
}
