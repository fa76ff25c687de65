//! Rule constants that vary between house rules.

use crate::error::ConfigError;
use crate::types::{CellType, DiceValue};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What it takes to bring a coin out of the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YardRelease {
    /// Any roll moves a yard coin onto its START cell.
    #[default]
    AnyRoll,
    /// Only a six releases a coin (traditional rule).
    OnSix,
}

impl YardRelease {
    /// Whether `dice` lets a yard coin enter the track.
    pub fn allows(self, dice: DiceValue) -> bool {
        match self {
            Self::AnyRoll => true,
            Self::OnSix => dice == DiceValue::SIX,
        }
    }
}

/// House rules applied by the move resolver and the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Yard release policy.
    pub yard_release: YardRelease,
    /// Rolling a six earns another roll.
    pub bonus_on_six: bool,
    /// Landing on a SAFE, START or HOME cell earns another roll.
    pub bonus_on_safe_landing: bool,
    /// Landing on opponents sends them back to their yard.
    pub capture_enabled: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            yard_release: YardRelease::AnyRoll,
            bonus_on_six: true,
            bonus_on_safe_landing: true,
            capture_enabled: true,
        }
    }
}

impl RuleSet {
    /// Classic rules: a six is needed to leave the yard.
    pub fn traditional() -> Self {
        Self {
            yard_release: YardRelease::OnSix,
            ..Self::default()
        }
    }

    /// Checks the rule set can produce a playable game.
    ///
    /// # Errors
    ///
    /// Under `OnSix` release without a bonus on six, a player who rolls the
    /// six to leave the yard would lose the follow-up roll that actually
    /// moves the coin, so the combination is rejected.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.yard_release == YardRelease::OnSix && !self.bonus_on_six {
            return Err(ConfigError::new(
                "yard_release = on_six requires bonus_on_six = true",
            ));
        }
        Ok(())
    }

    /// Whether a move rolled with `dice` and ending on `landing` earns
    /// another roll.
    pub fn grants_bonus(&self, dice: DiceValue, landing: CellType) -> bool {
        (self.bonus_on_six && dice == DiceValue::SIX)
            || (self.bonus_on_safe_landing && landing.grants_bonus())
    }
}
