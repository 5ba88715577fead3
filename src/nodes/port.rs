//! Port types and functionality for node connections

use egui::{Pos2, Rect, Vec2};

use super::graph::Connection;
use crate::constants;

/// Unique identifier for a port within one side of a node
pub type PortId = usize;

/// Type of port (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortType {
    Input,
    Output,
}

/// Represents a connection point on a node
///
/// `link` is a denormalized cache of the graph's connection list, only ever
/// populated on input ports. It is mutated exclusively by `NodeGraph`'s
/// connect/disconnect/remove operations so the two stay in agreement.
#[derive(Debug, Clone)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub port_type: PortType,
    pub position: Pos2,
    pub link: Option<Connection>,
}

impl Port {
    /// Creates a new port
    pub fn new(id: PortId, name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id,
            name: name.into(),
            port_type,
            position: Pos2::ZERO,
            link: None,
        }
    }

    /// Checks if this port is an input
    pub fn is_input(&self) -> bool {
        matches!(self.port_type, PortType::Input)
    }

    /// Checks if this port is an output
    pub fn is_output(&self) -> bool {
        matches!(self.port_type, PortType::Output)
    }

    /// Square hit region centered on the port position
    pub fn hit_rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(constants::port::HIT_SIZE))
    }

    /// Whether the point falls inside this port's hit region
    pub fn hit_test(&self, point: Pos2) -> bool {
        self.hit_rect().contains(point)
    }
}
