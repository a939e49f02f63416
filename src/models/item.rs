use crate::models::types::ItemId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Healing,
    Quest,
    Treasure,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Healing => "healing",
            ItemKind::Quest => "quest",
            ItemKind::Treasure => "treasure",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A thing that can lie around in a location or be carried by a character.
///
/// Items are never mutated after creation. Every item gets its own id, so two
/// items with the same name are still distinct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Attack bonus for weapons, health restored for healing items
    pub value: i32,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, value: i32, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            value,
            description: description.into(),
        }
    }

    /// "Iron Sword (weapon)"
    pub fn display_text(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
