//! Modulo node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Modulo node that takes two inputs and produces the remainder
#[derive(Default)]
pub struct ModuloNodeFactory;

impl NodeFactory for ModuloNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Modulo",
            "Modulo",
            NodeCategory::Math,
            "Remainder of A divided by B",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Modulo, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("remainder");
        node.update_port_positions();
        node
    }
}

/// Floored remainder: the sign follows the divisor. B = 0 yields Error.
pub fn process_modulo(a: &Value, b: &Value) -> Value {
    match (a.as_numeric(), b.as_numeric()) {
        (Some(_), Some(y)) if y.is_zero() => Value::Error,
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) => {
            if x == i64::MIN && y == -1 {
                Value::Int(0)
            } else {
                Value::Int(floor_rem(x, y))
            }
        }
        (Some(x), Some(y)) => {
            let (x, y) = (x.as_f64(), y.as_f64());
            Value::Float(x - y * (x / y).floor())
        }
        _ => Value::Error,
    }
}

/// Remainder whose sign matches the divisor
fn floor_rem(a: i64, b: i64) -> i64 {
    let remainder = a % b;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(process_modulo(&Value::Int(7), &Value::Int(3)), Value::Int(1));
        assert_eq!(process_modulo(&Value::Int(-7), &Value::Int(3)), Value::Int(2));
        assert_eq!(process_modulo(&Value::Int(7), &Value::Int(-3)), Value::Int(-2));
    }

    #[test]
    fn test_modulo_by_zero_is_error() {
        assert_eq!(process_modulo(&Value::Int(5), &Value::Int(0)), Value::Error);
        assert_eq!(
            process_modulo(&Value::Float(5.0), &Value::Float(0.0)),
            Value::Error
        );
    }

    #[test]
    fn test_modulo_floats() {
        assert_eq!(
            process_modulo(&Value::Float(5.5), &Value::Int(2)),
            Value::Float(1.5)
        );
    }
}
