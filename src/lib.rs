//! Swiss-system tournament bookkeeping on top of SQLite: registration,
//! match results, standings and next-round pairings.

pub mod data;
pub mod db;
pub mod error;
pub mod import;
pub mod ledger;
pub mod output;
pub mod pairing;
pub mod registry;
pub mod round;
pub mod standings;

pub use data::{Match, Pairing, Player, PlayerId, Standing, TournamentId};
pub use error::{Result, TournamentError};
pub use import::import_results;
pub use ledger::{count_matches, current_round, delete_matches, list_matches, report_match};
pub use pairing::swiss_pairings;
pub use registry::{count_players, delete_players, get_player, register_player};
pub use round::RoundState;
pub use standings::player_standings;
