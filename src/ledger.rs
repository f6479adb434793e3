use rusqlite::{params, Connection};

use crate::{
	data::{Match, PlayerId, TournamentId},
	error::{Result, TournamentError},
	registry::{count_players, is_registered},
	round::{self, expected_matches, RoundState},
};

/// Removes every match of `tournament` and closes its round state, so the
/// next report opens round 1.
pub fn delete_matches(conn: &mut Connection, tournament: TournamentId) -> Result<()> {
	let tx = conn.transaction()?;

	let removed = tx.execute(
		"DELETE FROM matches WHERE tournament_id = ?1;",
		[tournament],
	)?;
	round::reset(&tx, tournament)?;

	tx.commit()?;

	log::info!("removed {removed} matches from tournament {tournament}");
	Ok(())
}

/// Records a finished match in its own transaction.
pub fn report_match(
	conn: &mut Connection,
	winner: PlayerId,
	loser: PlayerId,
	tournament: TournamentId,
) -> Result<Match> {
	let tx = conn.transaction()?;
	let recorded = record_match(&tx, winner, loser, tournament)?;
	tx.commit()?;

	Ok(recorded)
}

/// Assigns the match to the open round and inserts it.
///
/// Must run inside a transaction: the round state is read, advanced and
/// written back around the insert.
pub fn record_match(
	conn: &Connection,
	winner: PlayerId,
	loser: PlayerId,
	tournament: TournamentId,
) -> Result<Match> {
	if winner == loser {
		return Err(TournamentError::SelfMatch(winner));
	}

	for player in [winner, loser] {
		if !is_registered(conn, player, tournament)? {
			return Err(TournamentError::NotRegistered { player, tournament });
		}
	}

	let state = open_round(conn, tournament)?;

	for player in [winner, loser] {
		if played_in_round(conn, player, state.round, tournament)? {
			return Err(TournamentError::AlreadyPlayed {
				player,
				round: state.round,
			});
		}
	}

	conn.execute(
		"INSERT INTO matches (round, tournament_id, winner_id, loser_id)
		 VALUES (?1, ?2, ?3, ?4);",
		params![state.round, tournament, winner, loser],
	)?;
	round::store(conn, tournament, state.record())?;

	log::info!(
		"tournament {tournament} round {}: {winner} beat {loser}",
		state.round
	);

	Ok(Match {
		round: state.round,
		tournament,
		winner,
		loser,
	})
}

/// Round state the next match belongs to, before it is recorded.
fn open_round(conn: &Connection, tournament: TournamentId) -> Result<RoundState> {
	match round::load(conn, tournament)? {
		Some(state) if state.is_complete() => {
			let expected = expected_matches(count_players(conn, tournament)?)?;
			let next = state.advance(expected);
			log::debug!(
				"tournament {tournament}: round {} complete, opening round {} with {expected} matches",
				state.round,
				next.round
			);
			Ok(next)
		}
		Some(state) => Ok(state),
		None => {
			let matches = count_matches(conn, tournament)?;
			if matches > 0 {
				return Err(TournamentError::RoundStateMissing {
					tournament,
					matches,
				});
			}

			let expected = expected_matches(count_players(conn, tournament)?)?;
			log::debug!("tournament {tournament}: opening round 1 with {expected} matches");
			Ok(RoundState::first(expected))
		}
	}
}

fn played_in_round(
	conn: &Connection,
	player: PlayerId,
	round: u32,
	tournament: TournamentId,
) -> Result<bool> {
	let mut stmt = conn.prepare(
		"SELECT 1 FROM matches
		 WHERE tournament_id = ?1
		   AND round = ?2
		   AND (winner_id = ?3 OR loser_id = ?3);",
	)?;

	Ok(stmt.exists(params![tournament, round, player])?)
}

pub fn count_matches(conn: &Connection, tournament: TournamentId) -> Result<usize> {
	let count = conn.query_row(
		"SELECT COUNT(*) FROM matches WHERE tournament_id = ?1;",
		[tournament],
		|row| row.get::<usize, usize>(0),
	)?;

	Ok(count)
}

/// The most recently opened round, or `None` before the first report.
pub fn current_round(conn: &Connection, tournament: TournamentId) -> Result<Option<RoundState>> {
	round::load(conn, tournament)
}

pub fn list_matches(conn: &Connection, tournament: TournamentId) -> Result<Vec<Match>> {
	let mut stmt = conn.prepare(
		"SELECT round, tournament_id, winner_id, loser_id FROM matches
		 WHERE tournament_id = ?1
		 ORDER BY round, id;",
	)?;

	let matches = stmt
		.query_map([tournament], |row| {
			Ok(Match {
				round: row.get(0)?,
				tournament: row.get(1)?,
				winner: row.get(2)?,
				loser: row.get(3)?,
			})
		})?
		.collect::<rusqlite::Result<Vec<_>>>()?;

	Ok(matches)
}
