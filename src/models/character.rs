use crate::dice::Dice;
use crate::models::item::{Item, ItemKind};
use crate::models::types::CharacterId;

const HEALTH_BAR_WIDTH: i32 = 10;

/// How a non-player character reacts to being attacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// Fights back when attacked
    Hostile,
    /// Cannot be attacked. The refusal line is shown instead of a fight.
    Peaceful { refusal: String },
}

#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub inventory: Vec<Item>,
    pub is_player: bool,
    pub is_alive: bool,
    pub behavior: Behavior,
    /// What the character says when talked to
    pub dialogue: Option<String>,
}

/// Result of a single swing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub text: String,
}

impl Character {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            health,
            max_health: health,
            attack_power,
            inventory: Vec::new(),
            is_player: false,
            is_alive: health > 0,
            behavior: Behavior::Hostile,
            dialogue: None,
        }
    }

    pub fn player(name: impl Into<String>, health: i32, attack_power: i32) -> Self {
        Self {
            is_player: true,
            ..Self::new(name, health, attack_power)
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = Some(dialogue.into());
        self
    }

    pub fn is_peaceful(&self) -> bool {
        matches!(self.behavior, Behavior::Peaceful { .. })
    }

    pub fn attack(&self, target: &mut Character, dice: &mut dyn Dice) -> AttackOutcome {
        if !self.is_alive {
            return AttackOutcome {
                damage: 0,
                text: format!("{} cannot attack - they are defeated!", self.name),
            };
        }

        let damage = dice.roll(self.attack_power);
        let result = target.take_damage(damage);
        tracing::debug!(attacker = %self.name, target = %target.name, damage, "attack");

        AttackOutcome {
            damage,
            text: format!("{} attacks {} for {} damage! {}", self.name, target.name, damage, result),
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> String {
        self.health = (self.health - amount).max(0);

        if self.health == 0 {
            self.is_alive = false;
            return format!("{} has been defeated!", self.name);
        }

        format!("{} has {} health remaining.", self.name, self.health)
    }

    /// Takes ownership of `item`. The caller must already have removed it from
    /// wherever it was before.
    pub fn pick_up_item(&mut self, item: Item) -> String {
        let msg = match item.kind {
            ItemKind::Weapon => {
                self.attack_power += item.value;
                format!(
                    "{} picked up {}! Attack power increased by {}.",
                    self.name, item.name, item.value
                )
            }
            ItemKind::Healing => {
                let before = self.health;
                if self.is_alive {
                    self.health = self.max_health.min(self.health + item.value);
                }
                format!(
                    "{} used {} and restored {} health!",
                    self.name,
                    item.name,
                    self.health - before
                )
            }
            ItemKind::Quest | ItemKind::Treasure => format!("{} picked up {}.", self.name, item.name),
        };

        self.inventory.push(item);
        msg
    }

    pub fn view_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return format!("{}'s inventory is empty.", self.name);
        }

        let names: Vec<String> = self.inventory.iter().map(Item::display_text).collect();
        format!("{}'s inventory: {}", self.name, names.join(", "))
    }

    pub fn status(&self) -> String {
        let filled = if self.max_health > 0 {
            (self.health * HEALTH_BAR_WIDTH / self.max_health).clamp(0, HEALTH_BAR_WIDTH)
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(filled as usize),
            "░".repeat((HEALTH_BAR_WIDTH - filled) as usize)
        );

        format!(
            "{} | Health: {}/{} [{}] | Attack: {}",
            self.name, self.health, self.max_health, bar, self.attack_power
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn take_damage_clamps_to_zero() {
        let mut c = Character::new("Goblin Warrior", 40, 12);
        assert_eq!(c.take_damage(15), "Goblin Warrior has 25 health remaining.");
        assert!(c.is_alive);

        assert_eq!(c.take_damage(100), "Goblin Warrior has been defeated!");
        assert_eq!(c.health, 0);
        assert!(!c.is_alive);
    }

    #[test]
    fn exact_damage_defeats() {
        let mut c = Character::new("Goblin Warrior", 40, 12);
        c.take_damage(40);
        assert_eq!(c.health, 0);
        assert!(!c.is_alive);
    }

    #[test]
    fn defeated_stays_defeated() {
        let mut c = Character::new("Shadow Beast", 10, 18);
        c.take_damage(10);
        let msg = c.pick_up_item(Item::new("Health Potion", ItemKind::Healing, 20, ""));
        assert_eq!(msg, "Shadow Beast used Health Potion and restored 0 health!");
        assert_eq!(c.health, 0);
        assert!(!c.is_alive);
        c.take_damage(0);
        assert!(!c.is_alive);
    }

    #[test]
    fn attack_uses_roll() {
        let player = Character::player("Adventurer", 100, 15);
        let mut goblin = Character::new("Goblin Warrior", 40, 12);
        let mut dice = ScriptedDice::new().rolls([7]);

        let out = player.attack(&mut goblin, &mut dice);
        assert_eq!(out.damage, 7);
        assert_eq!(
            out.text,
            "Adventurer attacks Goblin Warrior for 7 damage! Goblin Warrior has 33 health remaining."
        );
        assert_eq!(goblin.health, 33);
    }

    #[test]
    fn defeated_cannot_attack() {
        let mut dead = Character::new("Goblin Warrior", 40, 12);
        dead.take_damage(40);
        let mut player = Character::player("Adventurer", 100, 15);
        let mut dice = ScriptedDice::new();

        let out = dead.attack(&mut player, &mut dice);
        assert_eq!(out.damage, 0);
        assert_eq!(out.text, "Goblin Warrior cannot attack - they are defeated!");
        assert_eq!(player.health, 100);
    }

    #[test]
    fn weapon_raises_attack_only() {
        let mut p = Character::player("Adventurer", 100, 15);
        p.take_damage(30);
        let msg = p.pick_up_item(Item::new("Iron Sword", ItemKind::Weapon, 10, ""));
        assert_eq!(msg, "Adventurer picked up Iron Sword! Attack power increased by 10.");
        assert_eq!(p.attack_power, 25);
        assert_eq!(p.health, 70);
        assert_eq!(p.inventory.len(), 1);
    }

    #[test]
    fn healing_is_capped() {
        let mut p = Character::player("Adventurer", 100, 15);
        p.take_damage(10);
        let msg = p.pick_up_item(Item::new("Health Potion", ItemKind::Healing, 30, ""));
        assert_eq!(p.health, 100);
        assert_eq!(msg, "Adventurer used Health Potion and restored 10 health!");
    }

    #[test]
    fn inventory_listing() {
        let mut p = Character::player("Adventurer", 100, 15);
        assert_eq!(p.view_inventory(), "Adventurer's inventory is empty.");
        p.pick_up_item(Item::new("Ancient Key", ItemKind::Quest, 0, ""));
        p.pick_up_item(Item::new("Golden Chalice", ItemKind::Treasure, 100, ""));
        assert_eq!(
            p.view_inventory(),
            "Adventurer's inventory: Ancient Key (quest), Golden Chalice (treasure)"
        );
    }

    #[test]
    fn status_bar() {
        let mut p = Character::player("Adventurer", 100, 15);
        assert_eq!(p.status(), "Adventurer | Health: 100/100 [██████████] | Attack: 15");
        p.take_damage(35);
        assert_eq!(p.status(), "Adventurer | Health: 65/100 [██████░░░░] | Attack: 15");

        let mut g = Character::new("Goblin Warrior", 40, 12);
        g.take_damage(39);
        assert_eq!(g.status(), "Goblin Warrior | Health: 1/40 [░░░░░░░░░░] | Attack: 12");
    }
}
