//! Memento: a hero's seven attributes snapshot into an opaque memento and
//! restore as one unit. Each attribute grows by one per level-up and caps
//! at [`STAT_CAP`] independently of the others.

use std::fmt;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

/// Per-attribute growth ceiling.
const STAT_CAP: u8 = 10;

/// The seven SPECIAL attributes, treated as one indivisible unit for
/// snapshot and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Special {
    strength: u8,
    perception: u8,
    endurance: u8,
    charisma: u8,
    intelligence: u8,
    agility: u8,
    luck: u8,
}

/// Opaque snapshot of a hero's attributes. Only the hero can look inside.
pub struct Memento {
    stats: Special,
}

struct Hero {
    stats: Special,
}

fn grown(value: u8) -> u8 {
    if value < STAT_CAP { value + 1 } else { value }
}

impl Hero {
    fn new(stats: Special) -> Self {
        Self { stats }
    }

    /// Raise every attribute by one, each independently capped.
    fn level_up(&mut self) {
        let s = &mut self.stats;
        s.strength = grown(s.strength);
        s.perception = grown(s.perception);
        s.endurance = grown(s.endurance);
        s.charisma = grown(s.charisma);
        s.intelligence = grown(s.intelligence);
        s.agility = grown(s.agility);
        s.luck = grown(s.luck);
    }

    fn save(&self) -> Memento {
        Memento { stats: self.stats }
    }

    /// Reinstate all seven attributes from the snapshot at once.
    fn restore(&mut self, memento: Memento) {
        self.stats = memento.stats;
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        write!(
            f,
            "strength={}, perception={}, endurance={}, charisma={}, intelligence={}, agility={}, luck={}",
            s.strength, s.perception, s.endurance, s.charisma, s.intelligence, s.agility, s.luck
        )
    }
}

pub struct MementoDemo;

impl Demo for MementoDemo {
    fn name(&self) -> &str {
        "memento"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut history: Vec<Memento> = Vec::new();
        let mut hero = Hero::new(Special {
            strength: 5,
            perception: 1,
            endurance: 3,
            charisma: 8,
            intelligence: 5,
            agility: 2,
            luck: 2,
        });

        hero.level_up();
        history.push(hero.save());
        hero.level_up();
        hero.level_up();
        out.line(&format!("current hero level: {hero}"))?;

        if let Some(snapshot) = history.pop() {
            hero.restore(snapshot);
        }
        out.line(&format!("restored hero level: {hero}"))
    }
}
