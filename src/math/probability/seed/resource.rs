use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seed der Sitzung. Alle Läufe (auch nach einem Reset) stammen aus einem
/// daraus erzeugten `StdRng`, eine Sitzung ist also reproduzierbar.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedResource {
    pub seed: u64,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        let mut hasher = DefaultHasher::new();
        text.as_ref().hash(&mut hasher);
        let seed = hasher.finish();
        Self::from_seed(seed)
    }

    /// Seed aus Benutzereingabe: Zahlen werden direkt übernommen, jeder andere
    /// Text wird gehasht. Leere Eingabe ergibt einen zufälligen Seed.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        match trimmed.parse::<u64>() {
            Ok(seed) => Self::from_seed(seed),
            Err(_) => Self::from_text(trimmed),
        }
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}
