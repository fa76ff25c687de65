//! Dice state and dice sources.
//!
//! The dice are the only source of nondeterminism in a game. Everything
//! else is a pure function of the roll sequence and the stimuli, so a game
//! driven by [`ScriptedDice`] or a seeded [`RandomDice`] replays exactly.

use crate::error::ConfigError;
use crate::types::DiceValue;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument};

/// Produces dice rolls.
pub trait DiceRoller: std::fmt::Debug {
    /// Rolls one die.
    fn roll(&mut self) -> DiceValue;
}

/// Uniform random dice.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Dice seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Dice that replay the same sequence for the same seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller for RandomDice {
    fn roll(&mut self) -> DiceValue {
        let face = self.rng.random_range(DiceValue::MIN..=DiceValue::MAX);
        DiceValue::new(face).unwrap_or(DiceValue::SIX)
    }
}

/// Dice that cycle through a fixed sequence.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: Vec<DiceValue>,
    next: usize,
}

impl ScriptedDice {
    /// Creates dice from a sequence of faces.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the sequence is empty or holds a value
    /// outside 1..=6.
    #[instrument(skip(faces))]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self, ConfigError> {
        let script = faces
            .into_iter()
            .map(|f| {
                DiceValue::new(f).ok_or_else(|| {
                    ConfigError::new(format!("scripted dice face {} is outside 1..=6", f))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if script.is_empty() {
            return Err(ConfigError::new("scripted dice need at least one face"));
        }
        Ok(Self { script, next: 0 })
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> DiceValue {
        let face = self.script[self.next % self.script.len()];
        self.next += 1;
        face
    }
}

/// Current face of the shared die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct DiceState {
    /// Face showing now.
    value: DiceValue,
    /// Face shown before the latest roll.
    last_value: DiceValue,
    /// A roll is in progress.
    rolling: bool,
}

impl DiceState {
    /// The die shows a six before the first roll.
    pub fn new() -> Self {
        Self {
            value: DiceValue::SIX,
            last_value: DiceValue::SIX,
            rolling: false,
        }
    }

    pub(crate) fn begin_roll(&mut self) {
        self.rolling = true;
    }

    pub(crate) fn land(&mut self, value: DiceValue) {
        self.last_value = self.value;
        self.value = value;
        self.rolling = false;
        debug!(value = value.get(), last = self.last_value.get(), "Dice landed");
    }
}

impl Default for DiceState {
    fn default() -> Self {
        Self::new()
    }
}
