//! Data structures for the game: players, weekly scores, raw events, the ledger, errors.

mod error;
mod events;
mod ledger;
mod player;
mod score;

pub use error::{ConfigError, DataIntegrityError, EventKind, GameError, StorageError, Tier};
pub use events::{BonusEvent, KillEvent, PlayerRecord};
pub use ledger::{FrozenLedger, PlayerLedger};
pub use player::{Player, PlayerId};
pub use score::{Bonus, WeekScore};
