//! Node factory system with self-registration and metadata

use std::collections::HashMap;

use egui::{Pos2, Vec2};
use log::{debug, info, warn};

use super::graph::NodeGraph;
use super::node::{Node, NodeId};
use crate::constants;

/// Category a node kind belongs to, used to group the creation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Data,
    Math,
    Logic,
    Utility,
    Output,
}

impl NodeCategory {
    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            NodeCategory::Data => "Data",
            NodeCategory::Math => "Math",
            NodeCategory::Logic => "Logic",
            NodeCategory::Utility => "Utility",
            NodeCategory::Output => "Output",
        }
    }
}

/// Metadata describing a creatable node kind
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    /// Stable registry key
    pub node_type: &'static str,
    /// Label shown in the creation menu
    pub display_name: &'static str,
    pub category: NodeCategory,
    pub description: &'static str,
    /// On-screen extent a fresh node starts with
    pub size_hint: Vec2,
}

impl NodeMetadata {
    /// Create node metadata with the default operator size
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            category,
            description,
            size_hint: constants::node::DEFAULT_SIZE,
        }
    }

    pub fn with_size_hint(mut self, size: Vec2) -> Self {
        self.size_hint = size;
        self
    }
}

/// Factory trait implemented by every creatable node kind
pub trait NodeFactory {
    /// Get node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a node instance at the given position
    fn create(position: Pos2) -> Node
    where
        Self: Sized;

    /// Add this node to a graph
    fn add_to_graph(graph: &mut NodeGraph, position: Pos2) -> NodeId
    where
        Self: Sized,
    {
        graph.add_node(Self::create(position))
    }
}

/// Function pointer type for creating nodes
type NodeCreator = fn(Pos2) -> Node;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry of every creatable node kind
///
/// Maps a type key to its constructor; this is the complete, closed catalog —
/// there is no dynamic loading. Registration order is preserved and drives
/// the context-menu item order.
pub struct NodeRegistry {
    creators: HashMap<String, NodeCreator>,
    metadata_providers: HashMap<String, MetadataProvider>,
    menu_order: Vec<String>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            creators: HashMap::new(),
            metadata_providers: HashMap::new(),
            menu_order: Vec::new(),
        }
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();

        if self.creators.insert(node_type.clone(), T::create).is_some() {
            warn!("Node type {} registered twice, keeping the latest", node_type);
        } else {
            self.menu_order.push(node_type.clone());
        }
        self.metadata_providers.insert(node_type.clone(), T::metadata);
        debug!("Registered node type {}", node_type);
    }

    /// Create a node by type name
    pub fn create_node(&self, node_type: &str, position: Pos2) -> Option<Node> {
        match self.creators.get(node_type) {
            Some(creator) => Some(creator(position)),
            None => {
                warn!("Unknown node type: {}", node_type);
                None
            }
        }
    }

    /// Metadata for a registered type
    pub fn metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// Type keys in registration order, for building the creation menu
    pub fn menu_types(&self) -> &[String] {
        &self.menu_order
    }

    /// Check if a node type is registered
    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.creators.contains_key(node_type)
    }
}

impl Default for NodeRegistry {
    /// Registry pre-populated with the full built-in catalog
    fn default() -> Self {
        let mut registry = Self::new();

        // Data nodes
        registry.register::<crate::nodes::data::int_value::IntValueNodeFactory>();
        registry.register::<crate::nodes::data::float_value::FloatValueNodeFactory>();
        registry.register::<crate::nodes::data::string_value::StringValueNodeFactory>();
        registry.register::<crate::nodes::data::list_value::ListValueNodeFactory>();
        registry.register::<crate::nodes::data::random_int::RandomIntNodeFactory>();
        registry.register::<crate::nodes::data::random_float::RandomFloatNodeFactory>();

        // Math nodes
        registry.register::<crate::nodes::math::add::AddNodeFactory>();
        registry.register::<crate::nodes::math::subtract::SubtractNodeFactory>();
        registry.register::<crate::nodes::math::multiply::MultiplyNodeFactory>();
        registry.register::<crate::nodes::math::divide::DivideNodeFactory>();
        registry.register::<crate::nodes::math::floor_divide::FloorDivideNodeFactory>();
        registry.register::<crate::nodes::math::modulo::ModuloNodeFactory>();
        registry.register::<crate::nodes::math::power::PowerNodeFactory>();
        registry.register::<crate::nodes::math::absolute::AbsoluteNodeFactory>();

        // Logic nodes
        registry.register::<crate::nodes::logic::and::AndNodeFactory>();
        registry.register::<crate::nodes::logic::or::OrNodeFactory>();
        registry.register::<crate::nodes::logic::xor::XorNodeFactory>();
        registry.register::<crate::nodes::logic::not::NotNodeFactory>();

        // Utility nodes
        registry.register::<crate::nodes::utility::concat::ConcatNodeFactory>();

        // Output nodes
        registry.register::<crate::nodes::output::display::DisplayNodeFactory>();
        registry.register::<crate::nodes::output::preview::PreviewNodeFactory>();

        info!("Node registry initialized with {} types", registry.menu_order.len());
        registry
    }
}
