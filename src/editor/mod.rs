//! Editor: event routing, transient interaction state and the frame step

pub mod input;
pub mod interaction;
pub mod menus;
pub mod rendering;

pub use input::{InputEvent, Key, PointerButton};
pub use interaction::{InteractionManager, PendingWire};
pub use menus::{ContextMenu, MenuItem};
pub use rendering::{FrameSnapshot, MenuPaint, NodePaint, PortPaint, Wire};

use egui::Pos2;
use log::{debug, warn};

use crate::nodes::data::int_value::IntValueNodeFactory;
use crate::nodes::math::add::AddNodeFactory;
use crate::nodes::output::display::DisplayNodeFactory;
use crate::nodes::{Connection, NodeFactory, NodeGraph, NodeId, NodeRegistry};

/// Owns the graph and routes raw input to it
///
/// Exactly one interaction mode governs each event, checked in priority
/// order: an active edit session, an open context menu, a pending wire
/// release, the delete key, menu opening, and finally per-node dispatch
/// front-to-back. The first consumer stops propagation.
pub struct NodeEditor {
    pub graph: NodeGraph,
    registry: NodeRegistry,
    pub(crate) menu: Option<ContextMenu>,
    pub(crate) interaction: InteractionManager,
}

impl NodeEditor {
    /// Creates an editor with an empty graph and the built-in catalog
    pub fn new() -> Self {
        Self {
            graph: NodeGraph::new(),
            registry: NodeRegistry::default(),
            menu: None,
            interaction: InteractionManager::new(),
        }
    }

    /// Editor pre-populated with the classic demo wiring:
    /// two integer literals (5, 10) into Add into Display
    pub fn with_starter_graph() -> Self {
        let mut editor = Self::new();
        let five = editor
            .graph
            .add_node(IntValueNodeFactory::create_with_value(
                Pos2::new(100.0, 100.0),
                5,
            ));
        let ten = editor
            .graph
            .add_node(IntValueNodeFactory::create_with_value(
                Pos2::new(100.0, 250.0),
                10,
            ));
        let add = AddNodeFactory::add_to_graph(&mut editor.graph, Pos2::new(350.0, 150.0));
        let show = DisplayNodeFactory::add_to_graph(&mut editor.graph, Pos2::new(600.0, 150.0));

        let wires = [(five, 0, add, 0), (ten, 0, add, 1), (add, 0, show, 0)];
        for (from_node, from_port, to_node, to_port) in wires {
            if let Err(reason) = editor.graph.connect(from_node, from_port, to_node, to_port) {
                warn!("Starter graph wiring failed: {}", reason);
            }
        }
        editor
    }

    /// The closed catalog of creatable node kinds
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// One frame step: drain the queued events, then run an evaluation pass
    pub fn update(&mut self, events: &[InputEvent]) {
        for event in events {
            self.handle_event(event);
        }
        self.graph.evaluate();
    }

    /// Route a single event; returns whether anything consumed it
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Tick { elapsed_ms } = event {
            self.interaction.tick(*elapsed_ms);
            return true;
        }
        self.interaction.track_pointer(event);

        // An active edit session owns every event until it ends
        if let Some(id) = self.graph.editing_node() {
            return self.handle_editing_event(id, event);
        }

        // An open menu consumes everything before nodes see it
        if self.menu.is_some() {
            self.handle_menu_event(event);
            return true;
        }

        // A pending wire resolves on the next left release
        if self.interaction.pending_wire.is_some() {
            if let InputEvent::PointerReleased {
                button: PointerButton::Primary,
                position,
            } = event
            {
                self.finish_wire(*position);
                return true;
            }
        }

        // Delete the topmost node under the pointer
        if let InputEvent::KeyPressed {
            key: Key::Delete, ..
        } = event
        {
            if let Some(id) = self.graph.node_at(self.interaction.pointer) {
                self.graph.remove_node(id);
                return true;
            }
            return false;
        }

        // A right press over empty canvas (no socket) opens the creation menu
        if let InputEvent::PointerPressed {
            button: PointerButton::Secondary,
            position,
        } = event
        {
            if !self.graph.any_port_at(*position) {
                self.menu = Some(ContextMenu::new(*position, &self.registry));
                return true;
            }
        }

        // Per-node dispatch, topmost first; the first consumer wins
        let order: Vec<NodeId> = self.graph.z_order().iter().rev().copied().collect();
        for id in order {
            if self.interaction.node_event(&mut self.graph, id, event) {
                return true;
            }
        }
        false
    }

    /// Keyboard goes to the edit buffer; a press outside the node cancels
    /// the session and reverts, without falling through to other handling
    fn handle_editing_event(&mut self, id: NodeId, event: &InputEvent) -> bool {
        let Some(node) = self.graph.node_mut(id) else {
            return false;
        };
        match event {
            InputEvent::KeyPressed {
                key: Key::Enter, ..
            } => node.commit_edit(),
            InputEvent::KeyPressed {
                key: Key::Backspace,
                ..
            } => {
                node.interaction.edit_buffer.pop();
            }
            InputEvent::KeyPressed {
                character: Some(c), ..
            } if !c.is_control() => {
                node.interaction.edit_buffer.push(*c);
            }
            InputEvent::PointerPressed { position, .. } if !node.rect().contains(*position) => {
                node.cancel_edit();
            }
            _ => {}
        }
        true
    }

    fn handle_menu_event(&mut self, event: &InputEvent) {
        let Some(menu) = &self.menu else {
            return;
        };
        if let InputEvent::PointerPressed { button, position } = event {
            if *button == PointerButton::Primary {
                if let Some(item) = menu.item_at(*position) {
                    let node_type = item.node_type.clone();
                    let anchor = menu.anchor();
                    self.menu = None;
                    if let Some(node) = self.registry.create_node(&node_type, anchor) {
                        self.graph.add_node(node);
                    }
                    return;
                }
            }
            if !menu.rect().contains(*position) {
                self.menu = None;
            }
        }
    }

    /// Drop the pending wire on the first unoccupied input socket under the
    /// pointer; a release over anything else cancels silently
    fn finish_wire(&mut self, position: Pos2) {
        let Some(wire) = self.interaction.pending_wire.take() else {
            return;
        };
        if let Some((to_node, to_port)) = self.graph.free_input_at(position) {
            let connection = Connection::new(wire.from_node, wire.from_port, to_node, to_port);
            if let Err(reason) = self.graph.add_connection(connection) {
                debug!("Wire drop rejected: {}", reason);
            }
        }
    }
}

impl Default for NodeEditor {
    fn default() -> Self {
        Self::new()
    }
}
