//! String concatenation node implementation

use egui::Pos2;

use crate::nodes::factory::{NodeCategory, NodeFactory, NodeMetadata};
use crate::nodes::node::{Node, NodeKind};
use crate::nodes::value::Value;

/// Concatenation node joining the text forms of its two inputs
#[derive(Default)]
pub struct ConcatNodeFactory;

impl NodeFactory for ConcatNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Concat",
            "Concat",
            NodeCategory::Utility,
            "Joins A and B as text",
        )
    }

    fn create(position: Pos2) -> Node {
        let meta = Self::metadata();
        let mut node =
            Node::new(0, meta.display_name, NodeKind::Concat, position).with_size(meta.size_hint);
        node.add_input("A").add_input("B").add_output("result");
        node.update_port_positions();
        node
    }
}

/// Concatenation stringifies numeric operands rather than rejecting them;
/// only the Error marker refuses to coerce
pub fn process_concat(a: &Value, b: &Value) -> Value {
    match (a.coerce_string(), b.coerce_string()) {
        (Some(x), Some(y)) => Value::String(format!("{x}{y}")),
        _ => Value::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_concat() {
        assert_eq!(
            process_concat(&Value::String("a".into()), &Value::String("b".into())),
            Value::String("ab".into())
        );
        assert_eq!(
            process_concat(&Value::String("n=".into()), &Value::Int(5)),
            Value::String("n=5".into())
        );
        assert_eq!(process_concat(&Value::Error, &Value::Int(1)), Value::Error);
    }
}
