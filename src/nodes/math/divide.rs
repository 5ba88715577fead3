//! Division node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// Division node that takes two inputs and produces their true quotient
#[derive(Default)]
pub struct DivideNodeFactory;

impl NodeFactory for DivideNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Divide",
            "Divide",
            NodeCategory::Math,
            "Divides A by B as a float",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Divide, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("quotient");
        node.update_port_positions();
        node
    }
}

/// True division: the quotient is always a Float. Division by zero is not
/// fatal; it produces the Error marker that flows downstream.
pub fn process_divide(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(x), Some(y)) => {
            if y.is_zero() {
                Value::Error
            } else {
                Value::Float(x.as_f64() / y.as_f64())
            }
        }
        _ => Value::Error,
    }
}
