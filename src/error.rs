use thiserror::Error;

use crate::data::{PlayerId, TournamentId};

#[derive(Debug, Error)]
pub enum TournamentError {
	#[error("database error: {0}")]
	Db(#[from] rusqlite::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("player name must not be empty")]
	EmptyName,

	#[error("player {player} is not registered in tournament {tournament}")]
	NotRegistered {
		player: PlayerId,
		tournament: TournamentId,
	},

	#[error("player {0} cannot play against themselves")]
	SelfMatch(PlayerId),

	/// Rounds and pairings are only defined for an even roster.
	#[error("odd number of players ({0}); byes are not supported")]
	OddPlayerCount(usize),

	#[error("player {player} already has a match in round {round}")]
	AlreadyPlayed { player: PlayerId, round: u32 },

	#[error("tournament {tournament} has {matches} matches but no round state")]
	RoundStateMissing {
		tournament: TournamentId,
		matches: usize,
	},

	#[error("player {player} played {matches} matches across {rounds} rounds")]
	InconsistentMatches {
		player: PlayerId,
		rounds: u32,
		matches: u32,
	},
}

pub type Result<T> = std::result::Result<T, TournamentError>;
