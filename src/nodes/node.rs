//! Node types and core node functionality

use std::collections::HashMap;

use egui::{Pos2, Rect, Vec2};

use super::port::{Port, PortId, PortType};
use super::value::Value;
use super::{logic, math, utility};
use crate::constants;

/// Unique identifier for a node, stable for the node's lifetime
pub type NodeId = usize;

/// Closed set of node variants
///
/// Every variant shares the same record layout on [`Node`]; they differ only
/// in their compute semantics and, for literals, the stored value. The
/// catalog is extended through the factory registry, not through trait
/// objects.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Editable integer literal
    IntValue { value: i64 },
    /// Editable float literal
    FloatValue { value: f64 },
    /// Editable string literal
    StringValue { value: String },
    /// Editable list-of-strings literal
    ListValue { items: Vec<String> },
    /// Integer sampled once at creation
    RandomInt { value: i64 },
    /// Float sampled once at creation
    RandomFloat { value: f64 },
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
    Absolute,
    And,
    Or,
    Xor,
    Not,
    Concat,
    /// Sink that caches its input for rendering
    Display,
    /// Like Display, but re-emits the value on an output
    Preview,
}

/// Resolve one compute argument, falling back to the kind's default when the
/// input socket is unconnected
fn arg(inputs: &[Option<Value>], index: usize, default: Value) -> Value {
    inputs
        .get(index)
        .and_then(|slot| slot.clone())
        .unwrap_or(default)
}

impl NodeKind {
    /// Run this kind's computation over the gathered inputs
    ///
    /// `inputs` has one slot per input socket; `None` means unconnected.
    /// Returns the (output name, value) pairs to store on the node. Pure:
    /// never touches any other node.
    pub fn compute(&self, inputs: &[Option<Value>]) -> Vec<(&'static str, Value)> {
        let zero = || Value::Int(0);
        let one = || Value::Int(1);
        match self {
            NodeKind::IntValue { value } => vec![("out", Value::Int(*value))],
            NodeKind::FloatValue { value } => vec![("out", Value::Float(*value))],
            NodeKind::StringValue { value } => vec![("out", Value::String(value.clone()))],
            NodeKind::ListValue { items } => vec![("out", Value::List(items.clone()))],
            NodeKind::RandomInt { value } => vec![("out", Value::Int(*value))],
            NodeKind::RandomFloat { value } => vec![("out", Value::Float(*value))],
            NodeKind::Add => vec![(
                "sum",
                math::add::process_add(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Subtract => vec![(
                "difference",
                math::subtract::process_subtract(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Multiply => vec![(
                "product",
                math::multiply::process_multiply(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Divide => vec![(
                "quotient",
                math::divide::process_divide(&arg(inputs, 0, one()), &arg(inputs, 1, one())),
            )],
            NodeKind::FloorDivide => vec![(
                "quotient",
                math::floor_divide::process_floor_divide(
                    &arg(inputs, 0, one()),
                    &arg(inputs, 1, one()),
                ),
            )],
            NodeKind::Modulo => vec![(
                "remainder",
                math::modulo::process_modulo(&arg(inputs, 0, one()), &arg(inputs, 1, one())),
            )],
            NodeKind::Power => vec![(
                "result",
                math::power::process_power(&arg(inputs, 0, one()), &arg(inputs, 1, one())),
            )],
            NodeKind::Absolute => vec![(
                "result",
                math::absolute::process_absolute(&arg(inputs, 0, zero())),
            )],
            NodeKind::And => vec![(
                "result",
                logic::and::process_and(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Or => vec![(
                "result",
                logic::or::process_or(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Xor => vec![(
                "result",
                logic::xor::process_xor(&arg(inputs, 0, zero()), &arg(inputs, 1, zero())),
            )],
            NodeKind::Not => vec![("result", logic::not::process_not(&arg(inputs, 0, zero())))],
            NodeKind::Concat => vec![(
                "result",
                utility::concat::process_concat(
                    &arg(inputs, 0, Value::String(String::new())),
                    &arg(inputs, 1, Value::String(String::new())),
                ),
            )],
            NodeKind::Display => match inputs.first().and_then(|slot| slot.clone()) {
                Some(value) => vec![("value", value)],
                None => vec![],
            },
            NodeKind::Preview => match inputs.first().and_then(|slot| slot.clone()) {
                Some(value) => vec![("out", value)],
                None => vec![],
            },
        }
    }

    /// Literal kinds that support in-place editing via double-click
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            NodeKind::IntValue { .. }
                | NodeKind::FloatValue { .. }
                | NodeKind::StringValue { .. }
                | NodeKind::ListValue { .. }
        )
    }

    /// Text form of a stored literal, shown in the node body
    pub fn literal_text(&self) -> Option<String> {
        match self {
            NodeKind::IntValue { value } => Some(value.to_string()),
            NodeKind::FloatValue { value } => Some(value.to_string()),
            NodeKind::StringValue { value } => Some(value.clone()),
            NodeKind::ListValue { items } => Some(items.join(",")),
            NodeKind::RandomInt { value } => Some(value.to_string()),
            NodeKind::RandomFloat { value } => Some(value.to_string()),
            _ => None,
        }
    }

    /// Parse an edit buffer into the stored literal. Unparsable numeric text
    /// falls back to the type's zero value rather than failing.
    pub fn commit_edit(&mut self, buffer: &str) {
        match self {
            NodeKind::IntValue { value } => *value = buffer.trim().parse().unwrap_or(0),
            NodeKind::FloatValue { value } => *value = buffer.trim().parse().unwrap_or(0.0),
            NodeKind::StringValue { value } => *value = buffer.to_string(),
            NodeKind::ListValue { items } => {
                *items = if buffer.trim().is_empty() {
                    Vec::new()
                } else {
                    buffer.split(',').map(|s| s.trim().to_string()).collect()
                };
            }
            _ => {}
        }
    }

    /// Where Display/Preview cache the value they show
    fn display_slot(&self) -> Option<&'static str> {
        match self {
            NodeKind::Display => Some("value"),
            NodeKind::Preview => Some("out"),
            _ => None,
        }
    }
}

/// Transient per-node UI flags
///
/// Carried across frames until resolved by a later event; none of these
/// affect the graph model itself.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub dragging: bool,
    pub drag_offset: Vec2,
    pub resizing: bool,
    pub editing: bool,
    pub edit_buffer: String,
    pub last_click_ms: Option<u64>,
}

/// Core node structure representing a visual node in the graph
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub kind: NodeKind,
    pub position: Pos2,
    pub size: Vec2,
    pub min_size: Vec2,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    /// Computed output values, keyed by output socket name
    pub values: HashMap<String, Value>,
    pub interaction: InteractionState,
}

impl Node {
    /// Creates a new node with the specified properties
    pub fn new(id: NodeId, title: impl Into<String>, kind: NodeKind, position: Pos2) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            position,
            size: constants::node::DEFAULT_SIZE,
            min_size: constants::node::MIN_SIZE,
            inputs: vec![],
            outputs: vec![],
            values: HashMap::new(),
            interaction: InteractionState::default(),
        }
    }

    /// Adds an input port to the node
    pub fn add_input(&mut self, name: impl Into<String>) -> &mut Self {
        let port_id = self.inputs.len();
        self.inputs.push(Port::new(port_id, name, PortType::Input));
        self
    }

    /// Adds an output port to the node
    pub fn add_output(&mut self, name: impl Into<String>) -> &mut Self {
        let port_id = self.outputs.len();
        self.outputs.push(Port::new(port_id, name, PortType::Output));
        self
    }

    /// Sets the size of the node
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Updates the positions of all ports based on the node's position and size
    ///
    /// Inputs sit on the left edge, outputs on the right, evenly spaced: the
    /// k-th of n ports on a side is at `height * (k + 1) / (n + 1)` from the
    /// top. Must run after every move or resize, before any port hit test.
    pub fn update_port_positions(&mut self) {
        let input_spacing = self.size.y / (self.inputs.len() + 1) as f32;
        for (i, port) in self.inputs.iter_mut().enumerate() {
            port.position = Pos2::new(
                self.position.x,
                self.position.y + input_spacing * (i + 1) as f32,
            );
        }

        let output_spacing = self.size.y / (self.outputs.len() + 1) as f32;
        for (i, port) in self.outputs.iter_mut().enumerate() {
            port.position = Pos2::new(
                self.position.x + self.size.x,
                self.position.y + output_spacing * (i + 1) as f32,
            );
        }
    }

    /// Returns the bounding rectangle of the node
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Square handle in the bottom-right corner used to start a resize
    pub fn resize_handle_rect(&self) -> Rect {
        let handle = Vec2::splat(constants::node::RESIZE_HANDLE);
        Rect::from_min_size(self.position + self.size - handle, handle)
    }

    /// Index of the input port whose hit region contains the point
    pub fn input_port_at(&self, point: Pos2) -> Option<PortId> {
        self.inputs.iter().position(|port| port.hit_test(point))
    }

    /// Index of the output port whose hit region contains the point
    pub fn output_port_at(&self, point: Pos2) -> Option<PortId> {
        self.outputs.iter().position(|port| port.hit_test(point))
    }

    /// Enter edit mode with an empty buffer; the committed value is exactly
    /// what gets typed, while the old value survives a cancel
    pub fn begin_edit(&mut self) {
        self.interaction.editing = true;
        self.interaction.edit_buffer.clear();
        self.interaction.dragging = false;
    }

    /// Commit the edit buffer into the literal and leave edit mode
    pub fn commit_edit(&mut self) {
        let buffer = std::mem::take(&mut self.interaction.edit_buffer);
        self.kind.commit_edit(&buffer);
        self.interaction.editing = false;
    }

    /// Leave edit mode, discarding the buffer and keeping the old value
    pub fn cancel_edit(&mut self) {
        self.interaction.edit_buffer.clear();
        self.interaction.editing = false;
    }

    /// Text shown in the node body, if this kind shows any
    ///
    /// While editing this is the live buffer; literals show their value;
    /// Display/Preview show their cached input or "None" when unconnected.
    pub fn display_text(&self) -> Option<String> {
        if self.interaction.editing {
            return Some(self.interaction.edit_buffer.clone());
        }
        if let Some(text) = self.kind.literal_text() {
            return Some(text);
        }
        self.kind.display_slot().map(|slot| {
            self.values
                .get(slot)
                .map(Value::display)
                .unwrap_or_else(|| "None".to_string())
        })
    }
}
