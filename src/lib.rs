//! Patchbay - core node graph and interaction engine for visual programming
//!
//! Users place computation nodes on a canvas, wire outputs into inputs, and
//! the graph is re-evaluated every frame by bounded relaxation so results
//! stay live. This crate holds the graph model, the evaluator, and the
//! event-routing state machine; drawing and windowing are external
//! collaborators fed through [`editor::FrameSnapshot`].

pub mod constants;
pub mod editor;
pub mod nodes;

// Re-export the public surface
pub use editor::{
    ContextMenu, FrameSnapshot, InputEvent, InteractionManager, Key, NodeEditor, PointerButton,
};
pub use nodes::{
    Connection, Node, NodeFactory, NodeGraph, NodeId, NodeKind, NodeRegistry, Port, PortId,
    PortType, Value,
};

// Re-export commonly used egui types
pub use egui::{Pos2, Rect, Vec2};
