use crate::dice::Dice;
use crate::models::character::Character;
use crate::models::item::{Item, ItemKind};
use crate::models::types::{ItemId, LocationId};

/// Chance that searching turns up a hidden item
const DISCOVERY_CHANCE: f64 = 0.3;

/// Edge to a neighbouring location. The name is kept alongside the id so a
/// location can describe its surroundings on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub to: LocationId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub characters: Vec<Character>,
    pub items: Vec<Item>,
    pub exits: Vec<Exit>,
    pub visited: bool,
    /// Set once a hidden item has been found here
    pub searched: bool,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            characters: Vec::new(),
            items: Vec::new(),
            exits: Vec::new(),
            visited: false,
            searched: false,
        }
    }

    pub fn alive_characters(&self) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.is_alive).collect()
    }

    pub fn enter_location(&mut self) -> String {
        self.visited = true;
        let mut message = format!("\n=== {} ===\n{}\n", self.name, self.description);

        let alive = self.alive_characters();
        if !alive.is_empty() {
            let names: Vec<&str> = alive.iter().map(|c| c.name.as_str()).collect();
            message.push_str(&format!("\nCharacters here: {}", names.join(", ")));
        }

        if !self.items.is_empty() {
            message.push_str(&format!("\nItems here: {}", self.item_names().join(", ")));
        }

        if !self.exits.is_empty() {
            let names: Vec<&str> = self.exits.iter().map(|e| e.name.as_str()).collect();
            message.push_str(&format!("\nConnected areas: {}", names.join(", ")));
        }

        message
    }

    pub fn search_location(&mut self, dice: &mut dyn Dice) -> String {
        let mut results = Vec::new();

        if !self.items.is_empty() {
            let found: Vec<String> = self.items.iter().map(Item::display_text).collect();
            results.push(format!("Items found: {}", found.join(", ")));
        }

        let alive = self.alive_characters();
        if !alive.is_empty() {
            let names: Vec<&str> = alive.iter().map(|c| c.name.as_str()).collect();
            results.push(format!("Characters present: {}", names.join(", ")));
        }

        if !self.searched && dice.chance(DISCOVERY_CHANCE) {
            let mut pool = hidden_items();
            let item = pool.swap_remove(dice.pick(pool.len()));
            tracing::info!(location = %self.name, item = %item.name, "hidden item discovered");
            results.push(format!("🔍 You discovered a hidden {}!", item.name));
            self.items.push(item);
            self.searched = true;
        }

        if results.is_empty() {
            return "You found nothing of interest.".to_string();
        }
        results.join("\n")
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item with the given identity. Other items with the same
    /// name stay where they are.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn connect_to(&mut self, other: &Location) {
        self.exits.push(Exit {
            to: other.id,
            name: other.name.clone(),
        });
    }
}

fn hidden_items() -> Vec<Item> {
    vec![
        Item::new("Ancient Coin", ItemKind::Treasure, 50, "A mysterious coin with strange markings"),
        Item::new("Health Potion", ItemKind::Healing, 25, "A glowing red potion"),
        Item::new("Magic Stone", ItemKind::Quest, 0, "A stone that pulses with magical energy"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn grove() -> Location {
        Location::new(LocationId(0), "Mystical Grove", "Silver trees glow softly.")
    }

    #[test]
    fn enter_marks_visited_and_renders() {
        let mut loc = grove();
        assert!(!loc.visited);
        assert_eq!(loc.enter_location(), "\n=== Mystical Grove ===\nSilver trees glow softly.\n");
        assert!(loc.visited);

        loc.add_item(Item::new("Magic Scroll", ItemKind::Quest, 0, ""));
        let text = loc.enter_location();
        assert!(loc.visited);
        assert!(text.ends_with("\nItems here: Magic Scroll"));
    }

    #[test]
    fn enter_lists_connections() {
        let mut loc = grove();
        let other = Location::new(LocationId(1), "Forest Entrance", "Trees.");
        loc.connect_to(&other);
        assert!(loc.enter_location().ends_with("\nConnected areas: Forest Entrance"));
        assert_eq!(loc.exits[0].to, LocationId(1));
    }

    #[test]
    fn dead_characters_are_hidden() {
        let mut loc = grove();
        loc.add_character(Character::new("Goblin Warrior", 40, 12));
        loc.add_character(Character::new("Ancient Guardian", 80, 20));
        loc.characters[0].take_damage(40);

        let alive: Vec<&str> = loc.alive_characters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(alive, vec!["Ancient Guardian"]);
        assert!(loc.enter_location().contains("\nCharacters here: Ancient Guardian"));
    }

    #[test]
    fn remove_item_by_identity() {
        let mut loc = grove();
        let a = Item::new("Health Potion", ItemKind::Healing, 30, "");
        let b = Item::new("Health Potion", ItemKind::Healing, 20, "");
        let b_id = b.id;
        loc.add_item(a);
        loc.add_item(b);

        let removed = loc.remove_item(b_id).expect("item present");
        assert_eq!(removed.value, 20);
        assert_eq!(loc.items.len(), 1);
        assert_eq!(loc.items[0].value, 30);
        assert!(loc.remove_item(b_id).is_none());
    }

    #[test]
    fn search_empty_location() {
        let mut loc = grove();
        let mut dice = ScriptedDice::new().chances([false]);
        assert_eq!(loc.search_location(&mut dice), "You found nothing of interest.");
        assert!(!loc.searched);
    }

    #[test]
    fn search_reports_contents() {
        let mut loc = grove();
        loc.add_item(Item::new("Magic Scroll", ItemKind::Quest, 0, ""));
        loc.add_character(Character::new("Wise Hermit", 60, 5));
        let mut dice = ScriptedDice::new();
        assert_eq!(
            loc.search_location(&mut dice),
            "Items found: Magic Scroll (quest)\nCharacters present: Wise Hermit"
        );
    }

    #[test]
    fn search_discovers_only_once() {
        let mut loc = grove();
        let mut dice = ScriptedDice::new().chances([true, true, true]).picks([2, 0]);

        let text = loc.search_location(&mut dice);
        assert_eq!(text, "🔍 You discovered a hidden Magic Stone!");
        assert!(loc.searched);
        assert_eq!(loc.item_names(), vec!["Magic Stone"]);

        for _ in 0..5 {
            let text = loc.search_location(&mut dice);
            assert_eq!(text, "Items found: Magic Stone (quest)");
        }
        assert_eq!(loc.items.len(), 1);
    }
}
