//! Node graph data structures and operations

use std::collections::HashMap;

use egui::Pos2;
use log::{debug, warn};

use super::node::{Node, NodeId};
use super::port::PortId;
use super::value::Value;

/// Represents a connection between an output port and an input port
///
/// Directed output → input. The graph's `connections` list is the single
/// source of truth; the target input port additionally caches its incoming
/// `Connection` for O(1) lookup during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: PortId,
    pub to_node: NodeId,
    pub to_port: PortId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_node: NodeId, from_port: PortId, to_node: NodeId, to_port: PortId) -> Self {
        Self {
            from_node,
            from_port,
            to_node,
            to_port,
        }
    }
}

/// A graph containing nodes and their connections
///
/// `order` is append order and doubles as z-order: the last entry is the
/// topmost node for hit testing and event dispatch.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        self.nodes.insert(id, node);
        self.order.push(id);
        self.next_node_id += 1;
        debug!("Added node {}", id);
        id
    }

    /// Removes a node, cascading over every connection that touches it
    ///
    /// Connections into the node die with it; connections out of it are
    /// removed and the cached link on each downstream input is cleared, so no
    /// socket is left referencing a dead node.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&node_id)?;
        self.order.retain(|&id| id != node_id);

        let nodes = &mut self.nodes;
        let before = self.connections.len();
        self.connections.retain(|conn| {
            if conn.from_node != node_id && conn.to_node != node_id {
                return true;
            }
            if conn.to_node != node_id {
                if let Some(target) = nodes.get_mut(&conn.to_node) {
                    if let Some(port) = target.inputs.get_mut(conn.to_port) {
                        port.link = None;
                    }
                }
            }
            false
        });

        debug!(
            "Removed node {} with {} connection(s)",
            node_id,
            before - self.connections.len()
        );
        Some(node)
    }

    /// Adds a connection between two ports
    ///
    /// Rejects connections into an input that is already linked; the old
    /// connection is never silently severed. Appends to the connection list
    /// and sets the target port's cache in the same mutation.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), &'static str> {
        let source = self
            .nodes
            .get(&connection.from_node)
            .ok_or("Source node does not exist")?;
        if source.outputs.get(connection.from_port).is_none() {
            return Err("Source port does not exist");
        }
        let target = self
            .nodes
            .get(&connection.to_node)
            .ok_or("Target node does not exist")?;
        let port = target
            .inputs
            .get(connection.to_port)
            .ok_or("Target port does not exist")?;
        if port.link.is_some() {
            warn!(
                "Rejected connection into occupied input {}:{}",
                connection.to_node, connection.to_port
            );
            return Err("Input socket already connected");
        }

        self.connections.push(connection);
        if let Some(target) = self.nodes.get_mut(&connection.to_node) {
            if let Some(port) = target.inputs.get_mut(connection.to_port) {
                port.link = Some(connection);
            }
        }
        debug!(
            "Connected {}:{} -> {}:{}",
            connection.from_node, connection.from_port, connection.to_node, connection.to_port
        );
        Ok(())
    }

    /// Helper to add a connection by node IDs and port indices
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_port: PortId,
        to_node: NodeId,
        to_port: PortId,
    ) -> Result<(), &'static str> {
        self.add_connection(Connection::new(from_node, from_port, to_node, to_port))
    }

    /// Removes the connection feeding an input port, if any
    ///
    /// Clears the port's cache and drops the matching list entry in the same
    /// mutation.
    pub fn disconnect_input(&mut self, node_id: NodeId, port_id: PortId) -> Option<Connection> {
        let node = self.nodes.get_mut(&node_id)?;
        let port = node.inputs.get_mut(port_id)?;
        let link = port.link.take()?;
        self.connections.retain(|conn| *conn != link);
        debug!("Disconnected input {}:{}", node_id, port_id);
        Some(link)
    }

    /// Borrow a node by ID
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutably borrow a node by ID
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Node IDs in z-order (last = topmost)
    pub fn z_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Topmost node whose bounds contain the point
    pub fn node_at(&self, point: Pos2) -> Option<NodeId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.rect().contains(point)))
    }

    /// First unoccupied input socket under the point, in graph order
    pub fn free_input_at(&self, point: Pos2) -> Option<(NodeId, PortId)> {
        for &id in &self.order {
            if let Some(node) = self.nodes.get(&id) {
                for (index, port) in node.inputs.iter().enumerate() {
                    if port.link.is_none() && port.hit_test(point) {
                        return Some((id, index));
                    }
                }
            }
        }
        None
    }

    /// Whether any socket's hit region contains the point
    pub fn any_port_at(&self, point: Pos2) -> bool {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .any(|node| {
                node.inputs
                    .iter()
                    .chain(node.outputs.iter())
                    .any(|port| port.hit_test(point))
            })
    }

    /// The node currently in edit mode, if any
    pub fn editing_node(&self) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.interaction.editing))
    }

    /// Screen position of an output port
    pub fn output_position(&self, node_id: NodeId, port_id: PortId) -> Option<Pos2> {
        self.nodes
            .get(&node_id)
            .and_then(|node| node.outputs.get(port_id))
            .map(|port| port.position)
    }

    /// Updates port positions for all nodes
    pub fn update_all_port_positions(&mut self) {
        for node in self.nodes.values_mut() {
            node.update_port_positions();
        }
    }

    /// One evaluation pass by bounded relaxation
    ///
    /// Runs every node's compute N times, N = node count, so a value can
    /// cross up to N sequential hops per frame. Deliberately not a
    /// dependency-ordered evaluator: cyclic graphs are tolerated (they keep
    /// updating every frame) instead of detected or rejected.
    pub fn evaluate(&mut self) {
        for _ in 0..self.order.len() {
            for index in 0..self.order.len() {
                let id = self.order[index];
                self.compute_node(id);
            }
        }
    }

    fn compute_node(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let inputs: Vec<Option<Value>> = node
            .inputs
            .iter()
            .map(|port| port.link.map(|link| self.resolve_source(link)))
            .collect();

        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        let results = node.kind.compute(&inputs);
        node.values.clear();
        node.values
            .extend(results.into_iter().map(|(name, value)| (name.to_string(), value)));
    }

    /// Read the value a connection delivers, defaulting to zero when the
    /// source has not produced that output yet
    fn resolve_source(&self, link: Connection) -> Value {
        let Some(source) = self.nodes.get(&link.from_node) else {
            return Value::Int(0);
        };
        let Some(port) = source.outputs.get(link.from_port) else {
            return Value::Int(0);
        };
        source.values.get(&port.name).cloned().unwrap_or(Value::Int(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::node::NodeKind;
    use egui::{Pos2, Vec2};

    fn int_literal(value: i64, position: Pos2) -> Node {
        let mut node = Node::new(0, "Integer", NodeKind::IntValue { value }, position);
        node.add_output("out");
        node.update_port_positions();
        node
    }

    fn add_node(position: Pos2) -> Node {
        let mut node = Node::new(0, "Add", NodeKind::Add, position);
        node.add_input("A").add_input("B").add_output("sum");
        node.update_port_positions();
        node
    }

    fn display_node(position: Pos2) -> Node {
        let mut node = Node::new(0, "Display", NodeKind::Display, position);
        node.add_input("in");
        node.update_port_positions();
        node
    }

    fn preview_node(position: Pos2) -> Node {
        let mut node = Node::new(0, "Preview", NodeKind::Preview, position);
        node.add_input("in").add_output("out");
        node.update_port_positions();
        node
    }

    #[test]
    fn test_basic_graph_operations() {
        let mut graph = NodeGraph::new();
        let id = graph.add_node(int_literal(1, Pos2::ZERO));
        assert_eq!(graph.node_count(), 1);
        assert!(graph.node(id).is_some());

        let removed = graph.remove_node(id);
        assert!(removed.is_some());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.node(id).is_none());
    }

    #[test]
    fn test_connection_sets_cache() {
        let mut graph = NodeGraph::new();
        let lit = graph.add_node(int_literal(1, Pos2::ZERO));
        let add = graph.add_node(add_node(Pos2::new(200.0, 0.0)));

        graph.connect(lit, 0, add, 0).unwrap();
        assert_eq!(graph.connections.len(), 1);
        let cached = graph.node(add).unwrap().inputs[0].link.unwrap();
        assert_eq!(cached, graph.connections[0]);
    }

    #[test]
    fn test_second_connection_into_occupied_input_is_rejected() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(int_literal(1, Pos2::ZERO));
        let b = graph.add_node(int_literal(2, Pos2::ZERO));
        let add = graph.add_node(add_node(Pos2::new(200.0, 0.0)));

        graph.connect(a, 0, add, 0).unwrap();
        let result = graph.connect(b, 0, add, 0);
        assert_eq!(result, Err("Input socket already connected"));
        assert_eq!(graph.connections.len(), 1);
        assert_eq!(graph.node(add).unwrap().inputs[0].link.unwrap().from_node, a);
    }

    #[test]
    fn test_connection_validation() {
        let mut graph = NodeGraph::new();
        let lit = graph.add_node(int_literal(1, Pos2::ZERO));
        let add = graph.add_node(add_node(Pos2::ZERO));

        assert!(graph.connect(99, 0, add, 0).is_err());
        assert!(graph.connect(lit, 7, add, 0).is_err());
        assert!(graph.connect(lit, 0, 99, 0).is_err());
        assert!(graph.connect(lit, 0, add, 7).is_err());
        assert!(graph.connections.is_empty());
    }

    #[test]
    fn test_cascade_deletion_clears_everything() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(int_literal(1, Pos2::ZERO));
        let add = graph.add_node(add_node(Pos2::ZERO));
        let show = graph.add_node(display_node(Pos2::ZERO));

        graph.connect(a, 0, add, 0).unwrap();
        graph.connect(a, 0, add, 1).unwrap();
        graph.connect(add, 0, show, 0).unwrap();
        assert_eq!(graph.connections.len(), 3);

        // Two connections touch the Add node on its inputs, one on its output
        graph.remove_node(add);
        assert_eq!(graph.connections.len(), 0);
        assert!(graph.node(show).unwrap().inputs[0].link.is_none());
        assert!(graph.node(a).is_some());
    }

    #[test]
    fn test_disconnect_input() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(int_literal(1, Pos2::ZERO));
        let show = graph.add_node(display_node(Pos2::ZERO));
        graph.connect(a, 0, show, 0).unwrap();

        let removed = graph.disconnect_input(show, 0);
        assert!(removed.is_some());
        assert!(graph.connections.is_empty());
        assert!(graph.node(show).unwrap().inputs[0].link.is_none());

        // Disconnecting an already-free input is a no-op
        assert!(graph.disconnect_input(show, 0).is_none());
    }

    #[test]
    fn test_evaluation_adds_literals() {
        let mut graph = NodeGraph::new();
        let five = graph.add_node(int_literal(5, Pos2::ZERO));
        let ten = graph.add_node(int_literal(10, Pos2::ZERO));
        let add = graph.add_node(add_node(Pos2::ZERO));
        let show = graph.add_node(display_node(Pos2::ZERO));

        graph.connect(five, 0, add, 0).unwrap();
        graph.connect(ten, 0, add, 1).unwrap();
        graph.connect(add, 0, show, 0).unwrap();

        graph.evaluate();
        assert_eq!(graph.node(add).unwrap().values["sum"], Value::Int(15));
        assert_eq!(graph.node(show).unwrap().values["value"], Value::Int(15));
        assert_eq!(graph.node(show).unwrap().display_text(), Some("15".to_string()));
    }

    #[test]
    fn test_evaluation_converges_against_creation_order() {
        // Build the chain sink-first so a naive single pass cannot propagate
        let mut graph = NodeGraph::new();
        let p3 = graph.add_node(preview_node(Pos2::ZERO));
        let p2 = graph.add_node(preview_node(Pos2::ZERO));
        let p1 = graph.add_node(preview_node(Pos2::ZERO));
        let lit = graph.add_node(int_literal(7, Pos2::ZERO));

        graph.connect(lit, 0, p1, 0).unwrap();
        graph.connect(p1, 0, p2, 0).unwrap();
        graph.connect(p2, 0, p3, 0).unwrap();

        graph.evaluate();
        assert_eq!(graph.node(p3).unwrap().values["out"], Value::Int(7));
    }

    #[test]
    fn test_cyclic_graph_does_not_crash() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(preview_node(Pos2::ZERO));
        let b = graph.add_node(preview_node(Pos2::ZERO));
        graph.connect(a, 0, b, 0).unwrap();
        graph.connect(b, 0, a, 0).unwrap();

        graph.evaluate();
        graph.evaluate();
        assert!(graph.node(a).unwrap().values.contains_key("out"));

        // A self-connection is just the shortest cycle
        let solo = graph.add_node(preview_node(Pos2::ZERO));
        graph.connect(solo, 0, solo, 0).unwrap();
        graph.evaluate();
    }

    #[test]
    fn test_division_by_zero_reaches_display_as_error() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(int_literal(4, Pos2::ZERO));
        let b = graph.add_node(int_literal(0, Pos2::ZERO));
        let mut divide = Node::new(0, "Divide", NodeKind::Divide, Pos2::ZERO);
        divide.add_input("A").add_input("B").add_output("quotient");
        let div = graph.add_node(divide);
        let show = graph.add_node(display_node(Pos2::ZERO));

        graph.connect(a, 0, div, 0).unwrap();
        graph.connect(b, 0, div, 1).unwrap();
        graph.connect(div, 0, show, 0).unwrap();

        graph.evaluate();
        assert_eq!(graph.node(div).unwrap().values["quotient"], Value::Error);
        assert_eq!(graph.node(show).unwrap().display_text(), Some("Error".to_string()));
    }

    #[test]
    fn test_stale_display_value_clears_on_disconnect() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(int_literal(3, Pos2::ZERO));
        let show = graph.add_node(display_node(Pos2::ZERO));
        graph.connect(a, 0, show, 0).unwrap();
        graph.evaluate();
        assert_eq!(graph.node(show).unwrap().display_text(), Some("3".to_string()));

        graph.disconnect_input(show, 0);
        graph.evaluate();
        assert_eq!(graph.node(show).unwrap().display_text(), Some("None".to_string()));
    }

    #[test]
    fn test_z_order_hit_testing() {
        let mut graph = NodeGraph::new();
        let below = graph.add_node(int_literal(1, Pos2::ZERO));
        let mut covering = int_literal(2, Pos2::ZERO);
        covering.size = Vec2::new(120.0, 90.0);
        let above = graph.add_node(covering);

        // Both overlap the origin region; the later node wins
        assert_eq!(graph.node_at(Pos2::new(10.0, 10.0)), Some(above));
        graph.remove_node(above);
        assert_eq!(graph.node_at(Pos2::new(10.0, 10.0)), Some(below));
    }
}
