//! Coins and their identities.

use crate::types::{COINS_PER_PLAYER, PlayerId, Position};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Stable identity of a coin: its owner and a slot 0..4.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "RawCoinId")]
#[display("{player}#{slot}")]
pub struct CoinId {
    player: PlayerId,
    slot: u8,
}

#[derive(Deserialize)]
struct RawCoinId {
    player: PlayerId,
    slot: u8,
}

impl CoinId {
    /// Creates an id. Returns `None` for a slot outside 0..4.
    pub fn new(player: PlayerId, slot: u8) -> Option<Self> {
        (usize::from(slot) < COINS_PER_PLAYER).then_some(Self { player, slot })
    }

    /// Owner.
    pub fn player(self) -> PlayerId {
        self.player
    }

    /// Slot within the owner's four coins.
    pub fn slot(self) -> u8 {
        self.slot
    }

    /// Index into the flat coin list (player-major).
    pub fn index(self) -> usize {
        self.player.index() * COINS_PER_PLAYER + usize::from(self.slot)
    }

    /// All four ids owned by `player`.
    pub fn all_for(player: PlayerId) -> impl Iterator<Item = CoinId> {
        (0..COINS_PER_PLAYER as u8).map(move |slot| CoinId { player, slot })
    }
}

impl TryFrom<RawCoinId> for CoinId {
    type Error = String;

    fn try_from(raw: RawCoinId) -> Result<Self, Self::Error> {
        Self::new(raw.player, raw.slot)
            .ok_or_else(|| format!("coin slot {} is outside 0..{}", raw.slot, COINS_PER_PLAYER))
    }
}

/// A playing piece.
///
/// The origin is the yard cell the coin starts on. It never changes and is
/// where the coin returns after being captured.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Coin {
    /// Identity.
    id: CoinId,
    /// Current cell.
    position: Position,
    /// Yard cell the coin was created on.
    origin: Position,
}

impl Coin {
    /// Creates a coin sitting on its origin.
    pub fn new(id: CoinId, origin: Position) -> Self {
        Self {
            id,
            position: origin,
            origin,
        }
    }

    /// Owner of this coin.
    pub fn player(&self) -> PlayerId {
        self.id.player()
    }

    /// Whether the coin sits on its yard cell.
    pub fn is_at_origin(&self) -> bool {
        self.position == self.origin
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
