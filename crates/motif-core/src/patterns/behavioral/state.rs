//! State: a context delegates its behavior to whichever state object it
//! currently holds; swapping the state swaps the behavior.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait PlayerState {
    fn act(&self) -> &'static str;
}

struct Stopped;
struct Playing;

impl PlayerState for Stopped {
    fn act(&self) -> &'static str {
        "player is stopped"
    }
}

impl PlayerState for Playing {
    fn act(&self) -> &'static str {
        "player is playing"
    }
}

struct Player {
    state: Box<dyn PlayerState>,
}

impl Player {
    fn new(state: impl PlayerState + 'static) -> Self {
        Self {
            state: Box::new(state),
        }
    }

    fn do_action(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(self.state.act())
    }

    fn change_state(&mut self, state: impl PlayerState + 'static) {
        self.state = Box::new(state);
    }
}

pub struct StateDemo;

impl Demo for StateDemo {
    fn name(&self) -> &str {
        "state"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut player = Player::new(Stopped);
        player.do_action(out)?;
        player.change_state(Playing);
        player.do_action(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn context_behavior_follows_the_current_state() {
        let mut out = MemoryReporter::new();
        let mut player = Player::new(Playing);
        player.do_action(&mut out).unwrap();
        player.change_state(Stopped);
        player.do_action(&mut out).unwrap();
        assert_eq!(out.lines(), ["player is playing", "player is stopped"]);
    }

    #[test]
    fn demo_switches_from_stopped_to_playing() {
        let mut out = MemoryReporter::new();
        StateDemo.run(&mut out).unwrap();
        assert_eq!(out.lines(), ["player is stopped", "player is playing"]);
    }
}
