//! Node interaction handling (dragging, resizing, connecting, editing entry)

use egui::Pos2;
use log::debug;

use super::input::{InputEvent, PointerButton};
use crate::constants;
use crate::nodes::{NodeGraph, NodeId, PortId};

/// A wire being dragged out of an output socket, not yet dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWire {
    pub from_node: NodeId,
    pub from_port: PortId,
}

/// Tracks the transient interaction state the whole editor shares
///
/// This is explicit state threaded through dispatch, never a global: the
/// pending wire, the controller clock and the last pointer position live
/// here, while per-node flags (dragging, resizing, editing) live on the
/// nodes themselves.
#[derive(Debug, Clone, Default)]
pub struct InteractionManager {
    pub(crate) pending_wire: Option<PendingWire>,
    pub(crate) pointer: Pos2,
    clock_ms: u64,
}

impl InteractionManager {
    /// Creates a new interaction manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the controller clock
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.wrapping_add(elapsed_ms);
    }

    /// Current controller time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Whether the edit caret is in the visible half of its blink period
    pub fn caret_visible(&self) -> bool {
        self.clock_ms % constants::interaction::CARET_BLINK_MS
            < constants::interaction::CARET_BLINK_MS / 2
    }

    /// Remember the pointer position from any pointer event
    pub(crate) fn track_pointer(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerPressed { position, .. }
            | InputEvent::PointerReleased { position, .. }
            | InputEvent::PointerMoved { position } => self.pointer = position,
            _ => {}
        }
    }

    /// Offer an event to one node; returns whether the node consumed it
    ///
    /// Press priority within a node: resize handle, then output sockets,
    /// then the body (drag, or edit mode on a double-click for editable
    /// literals). A right press on an occupied input socket severs its
    /// connection.
    pub(crate) fn node_event(
        &mut self,
        graph: &mut NodeGraph,
        id: NodeId,
        event: &InputEvent,
    ) -> bool {
        match *event {
            InputEvent::PointerPressed {
                button: PointerButton::Primary,
                position,
            } => {
                let now = self.clock_ms;
                let Some(node) = graph.node_mut(id) else {
                    return false;
                };
                if node.resize_handle_rect().contains(position) {
                    node.interaction.resizing = true;
                    return true;
                }
                if let Some(port) = node.output_port_at(position) {
                    self.pending_wire = Some(PendingWire {
                        from_node: id,
                        from_port: port,
                    });
                    debug!("Started wire from {}:{}", id, port);
                    return true;
                }
                if node.rect().contains(position) {
                    let double_click = node.kind.is_editable()
                        && node.interaction.last_click_ms.is_some_and(|last| {
                            now.saturating_sub(last) < constants::interaction::DOUBLE_CLICK_MS
                        });
                    if double_click {
                        node.begin_edit();
                    } else {
                        node.interaction.last_click_ms = Some(now);
                        node.interaction.dragging = true;
                        node.interaction.drag_offset = node.position - position;
                    }
                    return true;
                }
                false
            }
            InputEvent::PointerPressed {
                button: PointerButton::Secondary,
                position,
            } => {
                let occupied_port = match graph.node(id) {
                    Some(node) => node
                        .input_port_at(position)
                        .filter(|&port| node.inputs[port].link.is_some()),
                    None => None,
                };
                match occupied_port {
                    Some(port) => {
                        graph.disconnect_input(id, port);
                        true
                    }
                    None => false,
                }
            }
            InputEvent::PointerReleased {
                button: PointerButton::Primary,
                ..
            } => {
                let Some(node) = graph.node_mut(id) else {
                    return false;
                };
                if node.interaction.dragging {
                    node.interaction.dragging = false;
                    true
                } else if node.interaction.resizing {
                    node.interaction.resizing = false;
                    true
                } else {
                    false
                }
            }
            InputEvent::PointerMoved { position } => {
                let Some(node) = graph.node_mut(id) else {
                    return false;
                };
                if node.interaction.dragging {
                    node.position = position + node.interaction.drag_offset;
                    node.update_port_positions();
                    true
                } else if node.interaction.resizing {
                    node.size = (position - node.position).max(node.min_size);
                    node.update_port_positions();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}
