use rusqlite::Connection;

use crate::{
	data::{Standing, TournamentId},
	error::{Result, TournamentError},
};

/// One row per registered player, best record first.
///
/// `matches` counts the distinct rounds a player appears in. That equals
/// their number of match rows only while nobody plays twice in a round, so
/// a mismatch is reported as an error rather than papered over.
pub fn player_standings(conn: &Connection, tournament: TournamentId) -> Result<Vec<Standing>> {
	let mut stmt = conn.prepare(
		"SELECT r.player_id,
				p.name,
				COUNT(CASE WHEN m.winner_id = r.player_id THEN 1 END) AS wins,
				COUNT(DISTINCT m.round) AS rounds,
				COUNT(m.round) AS played
		 FROM registrations AS r
		 INNER JOIN players AS p ON p.id = r.player_id
		 LEFT JOIN matches AS m
				ON m.tournament_id = r.tournament_id
			   AND (m.winner_id = r.player_id OR m.loser_id = r.player_id)
		 WHERE r.tournament_id = ?1
		 GROUP BY r.player_id, p.name
		 ORDER BY wins DESC, r.player_id ASC;",
	)?;

	let mut result = stmt.query([tournament])?;
	let mut standings = Vec::new();

	while let Some(row) = result.next()? {
		let id = row.get(0)?;
		let rounds: u32 = row.get(3)?;
		let played: u32 = row.get(4)?;

		if rounds != played {
			return Err(TournamentError::InconsistentMatches {
				player: id,
				rounds,
				matches: played,
			});
		}

		standings.push(Standing {
			id,
			name: row.get(1)?,
			wins: row.get(2)?,
			matches: rounds,
		});
	}

	Ok(standings)
}
