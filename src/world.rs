//! The hard-coded land of Scriptoria.

use crate::error::{AppResult, DomainError};
use crate::models::character::{Behavior, Character};
use crate::models::item::{Item, ItemKind};
use crate::models::location::Location;
use crate::models::types::LocationId;

pub const START_LOCATION: &str = "Forest Entrance";

/// Freshly built world, before the player has entered it
pub struct World {
    pub player: Character,
    pub locations: Vec<Location>,
    pub start: LocationId,
}

pub fn build() -> AppResult<World> {
    let player = Character::player("Adventurer", 100, 15);

    let mut locations: Vec<Location> = Vec::new();
    for (name, description) in [
        (
            "Forest Entrance",
            "You stand at the edge of a mysterious forest. Ancient trees tower above you, their branches creating a canopy that filters the sunlight into dancing shadows.",
        ),
        (
            "Ancient Ruins",
            "Crumbling stone structures rise from the earth, covered in moss and strange symbols. The air here feels heavy with forgotten magic.",
        ),
        (
            "Hidden Cave",
            "A dark cave extends deep into the mountainside. The sound of dripping water echoes from within, and you sense something valuable lies in the depths.",
        ),
        (
            "Mystical Grove",
            "A circular clearing surrounded by silver trees that seem to glow with inner light. This place radiates powerful magic.",
        ),
        (
            "Treasure Chamber",
            "A magnificent chamber filled with ancient treasures. Golden light reflects off precious gems and artifacts. This is the heart of Scriptoria!",
        ),
    ] {
        if locations.iter().any(|l| l.name == name) {
            return Err(DomainError::DuplicateLocation(name.to_string()));
        }
        locations.push(Location::new(LocationId(locations.len()), name, description));
    }

    for (from, to) in [
        ("Forest Entrance", "Ancient Ruins"),
        ("Forest Entrance", "Mystical Grove"),
        ("Ancient Ruins", "Forest Entrance"),
        ("Ancient Ruins", "Hidden Cave"),
        ("Hidden Cave", "Ancient Ruins"),
        ("Hidden Cave", "Treasure Chamber"),
        ("Mystical Grove", "Forest Entrance"),
        ("Mystical Grove", "Treasure Chamber"),
        ("Treasure Chamber", "Hidden Cave"),
        ("Treasure Chamber", "Mystical Grove"),
    ] {
        connect(&mut locations, from, to)?;
    }

    let hermit = Character::new("Wise Hermit", 60, 5)
        .with_behavior(Behavior::Peaceful {
            refusal: "The Wise Hermit raises his hand peacefully. \"I mean you no harm, young adventurer. Perhaps we should talk instead.\"".to_string(),
        })
        .with_dialogue("The hermit speaks softly: \"Welcome to Scriptoria, brave soul. Seek the treasures hidden in the ancient places, but beware the guardians that protect them. The Ancient Key you seek lies in these very ruins.\"");
    let goblin = Character::new("Goblin Warrior", 40, 12)
        .with_dialogue("The goblin snarls: \"You dare enter our territory? Leave now or face our wrath!\"");
    let guardian = Character::new("Ancient Guardian", 80, 20)
        .with_dialogue("The guardian speaks in an ancient voice: \"I have protected these ruins for centuries. Prove your worth in battle, or leave this sacred place.\"");
    let beast = Character::new("Shadow Beast", 60, 18)
        .with_dialogue("The shadow beast whispers menacingly: \"The darkness calls for your soul... but perhaps you seek what lies deeper in the cave?\"");
    let keeper = Character::new("Treasure Keeper", 50, 15)
        .with_dialogue("The keeper guards the treasures: \"These treasures have been mine for ages! You must defeat me to claim them!\"");

    location_mut(&mut locations, "Forest Entrance")?.add_character(hermit);
    location_mut(&mut locations, "Ancient Ruins")?.add_character(goblin);
    location_mut(&mut locations, "Ancient Ruins")?.add_character(guardian);
    location_mut(&mut locations, "Hidden Cave")?.add_character(beast);
    location_mut(&mut locations, "Treasure Chamber")?.add_character(keeper);

    for (at, item) in [
        (
            "Forest Entrance",
            Item::new("Health Potion", ItemKind::Healing, 30, "A red potion that restores vitality"),
        ),
        (
            "Ancient Ruins",
            Item::new("Iron Sword", ItemKind::Weapon, 10, "A sturdy blade that gleams in the light"),
        ),
        (
            "Ancient Ruins",
            Item::new("Ancient Key", ItemKind::Quest, 0, "An ornate key with mysterious engravings"),
        ),
        (
            "Hidden Cave",
            Item::new("Silver Dagger", ItemKind::Weapon, 7, "A quick, lightweight blade"),
        ),
        (
            "Mystical Grove",
            Item::new("Magic Scroll", ItemKind::Quest, 0, "A scroll containing ancient magic"),
        ),
        (
            "Treasure Chamber",
            Item::new("Golden Chalice", ItemKind::Treasure, 100, "A valuable treasure of Scriptoria"),
        ),
    ] {
        location_mut(&mut locations, at)?.add_item(item);
    }

    let start = location_mut(&mut locations, START_LOCATION)?.id;
    tracing::debug!(locations = locations.len(), "world built");

    Ok(World {
        player,
        locations,
        start,
    })
}

fn location_mut<'a>(locations: &'a mut [Location], name: &str) -> AppResult<&'a mut Location> {
    locations
        .iter_mut()
        .find(|l| l.name == name)
        .ok_or_else(|| DomainError::UnknownLocation(name.to_string()))
}

fn connect(locations: &mut [Location], from: &str, to: &str) -> AppResult<()> {
    let target = location_mut(locations, to)?.clone();
    location_mut(locations, from)?.connect_to(&target);
    Ok(())
}

/// Loot an enemy may leave behind
pub fn combat_drops() -> Vec<Item> {
    vec![
        Item::new("Health Potion", ItemKind::Healing, 20, "A healing potion dropped by your enemy"),
        Item::new("Battle Trophy", ItemKind::Treasure, 30, "A valuable trophy from your victory"),
    ]
}
