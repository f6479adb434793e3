use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

/// Identifies the tournament every registry and ledger call operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TournamentId(pub i64);

impl fmt::Display for TournamentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TournamentId {
	type Err = ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(TournamentId)
	}
}

impl ToSql for TournamentId {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(ToSqlOutput::from(self.0))
	}
}

impl FromSql for TournamentId {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		i64::column_result(value).map(TournamentId)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
	pub id: PlayerId,
	pub name: String,
	pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
	pub round: u32,
	pub tournament: TournamentId,
	pub winner: PlayerId,
	pub loser: PlayerId,
}

/// A registered player's record, derived from the ledger on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
	pub id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub matches: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
	pub id_a: PlayerId,
	pub name_a: String,
	pub id_b: PlayerId,
	pub name_b: String,
}
