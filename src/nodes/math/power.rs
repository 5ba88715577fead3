//! Exponentiation node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Exponentiation node that raises A to the power B
#[derive(Default)]
pub struct PowerNodeFactory;

impl NodeFactory for PowerNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Power",
            "Power",
            NodeCategory::Math,
            "Raises A to the power B",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Power, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("result");
        node.update_port_positions();
        node
    }
}

/// Int ^ non-negative Int stays Int while the result fits; everything else
/// goes through float exponentiation
pub fn process_power(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) if y >= 0 => u32::try_from(y)
            .ok()
            .and_then(|exp| x.checked_pow(exp))
            .map(Value::Int)
            .unwrap_or_else(|| Value::Float((x as f64).powf(y as f64))),
        (Some(x), Some(y)) => Value::Float(x.as_f64().powf(y.as_f64())),
        _ => Value::Error,
    }
}
