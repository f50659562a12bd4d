use std::sync::Mutex;

use guess_core::model::Target;
use rand::Rng;

/// Draws the secret number of each round.
pub trait TargetSource: Send + Sync {
    fn next_target(&self) -> Target;
}

/// Uniformly random targets from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTargets;

impl TargetSource for RandomTargets {
    fn next_target(&self) -> Target {
        Target::nth(rand::rng().random_range(0..Target::COUNT))
    }
}

/// Replays a fixed list of targets, cycling when it runs out.
///
/// Used for deterministic games in tests and demos.
#[derive(Debug)]
pub struct ScriptedTargets {
    script: Vec<Target>,
    next: Mutex<usize>,
}

impl ScriptedTargets {
    /// An empty script always yields `Target::MIN`.
    #[must_use]
    pub fn new(script: Vec<Target>) -> Self {
        Self {
            script,
            next: Mutex::new(0),
        }
    }
}

impl TargetSource for ScriptedTargets {
    fn next_target(&self) -> Target {
        if self.script.is_empty() {
            return Target::nth(0);
        }
        let mut next = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let target = self.script[*next % self.script.len()];
        *next = next.wrapping_add(1);
        target
    }
}
