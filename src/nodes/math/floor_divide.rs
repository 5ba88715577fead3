//! Floor-division node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Floor-division node, rounding the quotient toward negative infinity
#[derive(Default)]
pub struct FloorDivideNodeFactory;

impl NodeFactory for FloorDivideNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Floor Divide",
            "Floor Divide",
            NodeCategory::Math,
            "Divides A by B, rounding down",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node = Node::new(0, meta.display_name, NodeKind::FloorDivide, position)
            .with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("quotient");
        node.update_port_positions();
        node
    }
}

/// Floored division: Int // Int stays Int, any Float operand makes the
/// result Float. B = 0 yields Error.
pub fn process_floor_divide(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(_), Some(y)) if y.is_zero() => Value::Error,
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) => {
            // i64::MIN // -1 has no i64 representation
            if x == i64::MIN && y == -1 {
                Value::Error
            } else {
                Value::Int(floor_div(x, y))
            }
        }
        (Some(x), Some(y)) => Value::Float((x.as_f64() / y.as_f64()).floor()),
        _ => Value::Error,
    }
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}
