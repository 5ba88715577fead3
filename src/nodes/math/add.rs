//! Addition node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::{Numeric, Value};

/// Addition node that takes two inputs and produces their sum
#[derive(Default)]
pub struct AddNodeFactory;

impl NodeFactory for AddNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("Add", "Add", NodeCategory::Math, "Adds two values together")
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Add, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("sum");
        node.update_port_positions();
        node
    }
}

/// Addition over whatever arrives: Int + Int stays Int, mixed numerics
/// promote to Float, String + String concatenates, anything else is Error
pub fn process_add(a: &Value, b: &Value) -> Value {
    if let (Value::String(x), Value::String(y)) = (a, b) {
        return Value::String(format!("{x}{y}"));
    }
    match (a.as_numeric(), b.as_numeric()) {
        (Some(Numeric::Int(x)), Some(Numeric::Int(y))) => Value::Int(x.wrapping_add(y)),
        (Some(x), Some(y)) => Value::Float(x.as_f64() + y.as_f64()),
        _ => Value::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_creation() {
        let node = AddNodeFactory::create(Pos2::new(100.0, 100.0));
        assert_eq!(node.title, "Add");
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.inputs[0].name, "A");
        assert_eq!(node.inputs[1].name, "B");
        assert_eq!(node.outputs[0].name, "sum");
    }

    #[test]
    fn test_process_add_numeric() {
        assert_eq!(process_add(&Value::Int(5), &Value::Int(10)), Value::Int(15));
        assert_eq!(
            process_add(&Value::Int(1), &Value::Float(0.5)),
            Value::Float(1.5)
        );
    }

    #[test]
    fn test_process_add_strings_concatenate() {
        assert_eq!(
            process_add(&Value::String("ab".into()), &Value::String("cd".into())),
            Value::String("abcd".into())
        );
    }

    #[test]
    fn test_process_add_mismatch_is_error() {
        assert_eq!(
            process_add(&Value::String("a".into()), &Value::Int(1)),
            Value::Error
        );
        assert_eq!(process_add(&Value::Error, &Value::Int(1)), Value::Error);
    }
}
