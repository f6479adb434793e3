//! Open-round bookkeeping.
//!
//! Each tournament has at most one row in `rounds` describing the round that
//! newly reported matches are assigned to. `expected` is fixed when the round
//! opens (half the roster at that moment) and `reported` counts the matches
//! recorded in it so far.

use rusqlite::{params, Connection, OptionalExtension};

use crate::{
	data::TournamentId,
	error::{Result, TournamentError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
	pub round: u32,
	pub expected: u32,
	pub reported: u32,
}

impl RoundState {
	pub fn first(expected: u32) -> Self {
		RoundState {
			round: 1,
			expected,
			reported: 0,
		}
	}

	pub fn is_complete(&self) -> bool {
		self.reported >= self.expected
	}

	/// Opens the next round when this one is full, otherwise stays put.
	pub fn advance(self, expected: u32) -> Self {
		if self.is_complete() {
			RoundState {
				round: self.round + 1,
				expected,
				reported: 0,
			}
		} else {
			self
		}
	}

	pub fn record(self) -> Self {
		RoundState {
			reported: self.reported + 1,
			..self
		}
	}
}

/// Matches per round for a roster of `players`.
pub fn expected_matches(players: usize) -> Result<u32> {
	if players % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(players));
	}

	Ok((players / 2) as u32)
}

pub fn load(conn: &Connection, tournament: TournamentId) -> Result<Option<RoundState>> {
	let state = conn
		.query_row(
			"SELECT round, expected, reported FROM rounds WHERE tournament_id = ?1;",
			[tournament],
			|row| {
				Ok(RoundState {
					round: row.get(0)?,
					expected: row.get(1)?,
					reported: row.get(2)?,
				})
			},
		)
		.optional()?;

	Ok(state)
}

pub fn store(conn: &Connection, tournament: TournamentId, state: RoundState) -> Result<()> {
	conn.execute(
		"INSERT INTO rounds (tournament_id, round, expected, reported)
		 VALUES (?1, ?2, ?3, ?4)
		 ON CONFLICT (tournament_id) DO UPDATE SET
			round = excluded.round,
			expected = excluded.expected,
			reported = excluded.reported;",
		params![tournament, state.round, state.expected, state.reported],
	)?;

	Ok(())
}

pub fn reset(conn: &Connection, tournament: TournamentId) -> Result<()> {
	conn.execute("DELETE FROM rounds WHERE tournament_id = ?1;", [tournament])?;

	Ok(())
}
