//! Frame snapshot for the external render layer
//!
//! The renderer never touches the graph: once per frame it takes a
//! [`FrameSnapshot`], plain data describing everything there is to draw.

use egui::{Pos2, Rect};

use super::NodeEditor;
use crate::nodes::Port;

/// One socket to draw
#[derive(Debug, Clone)]
pub struct PortPaint {
    pub name: String,
    pub position: Pos2,
    pub hit_rect: Rect,
}

/// One node to draw
#[derive(Debug, Clone)]
pub struct NodePaint {
    pub rect: Rect,
    pub title: String,
    /// Centered body text: literal value, edit buffer, or display value
    pub body_text: Option<String>,
    pub editing: bool,
    /// Only meaningful while editing; follows the blink clock
    pub caret_visible: bool,
    pub inputs: Vec<PortPaint>,
    pub outputs: Vec<PortPaint>,
    pub resize_handle: Rect,
}

/// A wire segment between two socket positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    pub from: Pos2,
    pub to: Pos2,
}

/// The open context menu
#[derive(Debug, Clone)]
pub struct MenuPaint {
    pub rect: Rect,
    pub items: Vec<(String, Rect)>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Nodes in z-order; draw in sequence so later nodes land on top
    pub nodes: Vec<NodePaint>,
    pub wires: Vec<Wire>,
    /// Wire being dragged: anchored at its output socket, ending at the pointer
    pub pending_wire: Option<Wire>,
    pub menu: Option<MenuPaint>,
}

fn port_paint(port: &Port) -> PortPaint {
    PortPaint {
        name: port.name.clone(),
        position: port.position,
        hit_rect: port.hit_rect(),
    }
}

impl NodeEditor {
    /// Capture the current frame as plain render data
    pub fn frame_snapshot(&self) -> FrameSnapshot {
        let nodes = self
            .graph
            .z_order()
            .iter()
            .filter_map(|&id| self.graph.node(id))
            .map(|node| NodePaint {
                rect: node.rect(),
                title: node.title.clone(),
                body_text: node.display_text(),
                editing: node.interaction.editing,
                caret_visible: node.interaction.editing && self.interaction.caret_visible(),
                inputs: node.inputs.iter().map(port_paint).collect(),
                outputs: node.outputs.iter().map(port_paint).collect(),
                resize_handle: node.resize_handle_rect(),
            })
            .collect();

        let wires = self
            .graph
            .connections
            .iter()
            .filter_map(|conn| {
                let from = self.graph.output_position(conn.from_node, conn.from_port)?;
                let to = self
                    .graph
                    .node(conn.to_node)?
                    .inputs
                    .get(conn.to_port)?
                    .position;
                Some(Wire { from, to })
            })
            .collect();

        let pending_wire = self.interaction.pending_wire.and_then(|wire| {
            let from = self.graph.output_position(wire.from_node, wire.from_port)?;
            Some(Wire {
                from,
                to: self.interaction.pointer,
            })
        });

        let menu = self.menu.as_ref().map(|menu| MenuPaint {
            rect: menu.rect(),
            items: menu
                .items()
                .iter()
                .map(|item| (item.label.clone(), item.rect))
                .collect(),
        });

        FrameSnapshot {
            nodes,
            wires,
            pending_wire,
            menu,
        }
    }
}
