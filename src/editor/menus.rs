//! Context menu for node creation

use egui::{Pos2, Rect, Vec2};

use crate::constants;
use crate::nodes::NodeRegistry;

/// One selectable row of the menu
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Registry key invoked when the row is clicked
    pub node_type: String,
    /// Text shown to the user
    pub label: String,
    pub rect: Rect,
}

/// Transient overlay listing every creatable node kind
///
/// Not part of the graph model: it exists from a right press until a click
/// resolves it, and the node factory is invoked at the menu's anchor
/// position, not at the click.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    position: Pos2,
    items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Build a menu anchored at `position` from the registry's catalog
    pub fn new(position: Pos2, registry: &NodeRegistry) -> Self {
        let item_size = Vec2::new(constants::menu::ITEM_WIDTH, constants::menu::ITEM_HEIGHT);
        let items = registry
            .menu_types()
            .iter()
            .enumerate()
            .map(|(index, node_type)| {
                let label = registry
                    .metadata(node_type)
                    .map(|meta| meta.display_name.to_string())
                    .unwrap_or_else(|| node_type.clone());
                let min = Pos2::new(
                    position.x,
                    position.y + index as f32 * constants::menu::ITEM_HEIGHT,
                );
                MenuItem {
                    node_type: node_type.clone(),
                    label,
                    rect: Rect::from_min_size(min, item_size),
                }
            })
            .collect();
        Self { position, items }
    }

    /// Where the menu was opened; new nodes are created here
    pub fn anchor(&self) -> Pos2 {
        self.position
    }

    /// Bounding rectangle of the whole menu
    pub fn rect(&self) -> Rect {
        let height = self.items.len() as f32 * constants::menu::ITEM_HEIGHT;
        Rect::from_min_size(
            self.position,
            Vec2::new(constants::menu::ITEM_WIDTH, height),
        )
    }

    /// The item under the point, if any
    pub fn item_at(&self, point: Pos2) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.rect.contains(point))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_geometry() {
        let registry = NodeRegistry::default();
        let menu = ContextMenu::new(Pos2::new(40.0, 60.0), &registry);

        assert_eq!(menu.items().len(), registry.menu_types().len());
        assert_eq!(menu.rect().min, Pos2::new(40.0, 60.0));
        assert_eq!(
            menu.rect().height(),
            registry.menu_types().len() as f32 * constants::menu::ITEM_HEIGHT
        );

        // Rows stack downward from the anchor
        let first = &menu.items()[0];
        let second = &menu.items()[1];
        assert_eq!(first.rect.min.y + constants::menu::ITEM_HEIGHT, second.rect.min.y);
    }

    #[test]
    fn test_item_hit_testing() {
        let registry = NodeRegistry::default();
        let menu = ContextMenu::new(Pos2::ZERO, &registry);

        let hit = menu.item_at(Pos2::new(10.0, 30.0)).unwrap();
        assert_eq!(hit.node_type, menu.items()[1].node_type);
        assert!(menu.item_at(Pos2::new(200.0, 10.0)).is_none());
    }
}
