//! Command parser for adventure inputs.
//!
//! The grammar is deliberately tiny: the first word is the verb, everything
//! after it is the target.
//!
//! Examples:
//!   "look"                 -> Verb::Look
//!   "go ruins"             -> Verb::Go, target="ruins"
//!   "pick up health potion" -> Verb::Take, target="health potion"
//!   "Attack GOBLIN"        -> Verb::Attack, target="goblin"
//!
//! Words are split on single spaces, so repeated spaces survive in the target
//! as empty words. The only phrase we understand is "pick up", which is read
//! as plain "pick".

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Look,
    Search,
    Go,
    Take,
    Attack,
    Talk,
    Inventory,
    Status,
    Help,
    Locations,
    /// Verb not in our known list
    Custom(String),
}

impl Verb {
    pub fn parse(word: &str) -> Verb {
        match word {
            "look" | "examine" => Verb::Look,
            "search" => Verb::Search,
            "move" | "go" | "travel" => Verb::Go,
            "pick" | "take" | "get" => Verb::Take,
            "attack" | "fight" => Verb::Attack,
            "talk" | "speak" => Verb::Talk,
            "inventory" | "inv" => Verb::Inventory,
            "status" | "health" => Verb::Status,
            "help" => Verb::Help,
            "locations" => Verb::Locations,
            other => Verb::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verb::Look => "look",
            Verb::Search => "search",
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Attack => "attack",
            Verb::Talk => "talk",
            Verb::Inventory => "inventory",
            Verb::Status => "status",
            Verb::Help => "help",
            Verb::Locations => "locations",
            Verb::Custom(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Intent {
    pub verb: Verb,
    /// Input exactly as typed
    pub original: String,
    /// The words after the verb (lowercased)
    pub args: Vec<String>,
    /// Args joined back with single spaces
    pub target: String,
}

pub fn parse_command(input: &str) -> Intent {
    let normalized = input.to_lowercase();
    let mut words = normalized.trim().split(' ');

    let head = words.next().unwrap_or_default();
    let verb = Verb::parse(head);
    let mut args: Vec<String> = words.map(str::to_string).collect();
    if head == "pick" && args.first().is_some_and(|w| w == "up") {
        args.remove(0);
    }
    let target = args.join(" ");

    Intent {
        verb,
        original: input.to_string(),
        args,
        target,
    }
}

/// Case-insensitive substring match of `term` against candidate names.
/// Returns the first candidate, in order, whose name contains the term.
pub fn find_by_name<'a, T>(
    candidates: impl IntoIterator<Item = &'a T>,
    term: &str,
    name: impl Fn(&T) -> &str,
) -> Option<&'a T>
where
    T: 'a,
{
    let term = term.to_lowercase();
    candidates
        .into_iter()
        .find(|c| name(*c).to_lowercase().contains(&term))
}

//
// ---- Tests (basic) ----
//
