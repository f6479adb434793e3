use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
	data::{Player, PlayerId, TournamentId},
	error::{Result, TournamentError},
};

/// Creates a player and registers them in `tournament`.
///
/// Both rows are written in one transaction; a failure in either insert
/// leaves neither behind.
pub fn register_player(
	conn: &mut Connection,
	name: &str,
	tournament: TournamentId,
) -> Result<PlayerId> {
	if name.trim().is_empty() {
		return Err(TournamentError::EmptyName);
	}

	let tx = conn.transaction()?;

	tx.execute(
		"INSERT INTO players (name, created)
		 VALUES (?1, ?2);",
		params![name, Utc::now()],
	)?;
	let id = tx.last_insert_rowid();

	tx.execute(
		"INSERT INTO registrations (tournament_id, player_id)
		 VALUES (?1, ?2);",
		params![tournament, id],
	)?;

	tx.commit()?;

	log::info!("registered player {id} ({name}) in tournament {tournament}");
	Ok(id)
}

/// Clears the roster of `tournament`. Player rows are kept.
pub fn delete_players(conn: &Connection, tournament: TournamentId) -> Result<()> {
	let removed = conn.execute(
		"DELETE FROM registrations WHERE tournament_id = ?1;",
		[tournament],
	)?;

	log::info!("removed {removed} registrations from tournament {tournament}");
	Ok(())
}

pub fn count_players(conn: &Connection, tournament: TournamentId) -> Result<usize> {
	let count = conn.query_row(
		"SELECT COUNT(*) FROM registrations WHERE tournament_id = ?1;",
		[tournament],
		|row| row.get::<usize, usize>(0),
	)?;

	Ok(count)
}

pub fn is_registered(
	conn: &Connection,
	player: PlayerId,
	tournament: TournamentId,
) -> Result<bool> {
	let mut stmt = conn.prepare(
		"SELECT 1 FROM registrations
		 WHERE tournament_id = ?1 AND player_id = ?2;",
	)?;

	Ok(stmt.exists(params![tournament, player])?)
}

pub fn get_player(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
	let player = conn
		.query_row(
			"SELECT id, name, created FROM players WHERE id = ?1;",
			[id],
			|row| {
				Ok(Player {
					id: row.get(0)?,
					name: row.get(1)?,
					created: row.get(2)?,
				})
			},
		)
		.optional()?;

	Ok(player)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::db::open_in_memory;

	const T1: TournamentId = TournamentId(1);

	#[test]
	fn rejects_blank_names() {
		let mut conn = open_in_memory().unwrap();

		assert!(matches!(
			register_player(&mut conn, "   ", T1),
			Err(TournamentError::EmptyName)
		));
		assert_eq!(count_players(&conn, T1).unwrap(), 0);
	}

	#[test]
	fn failed_registration_leaves_no_player() {
		let mut conn = open_in_memory().unwrap();
		conn.execute(
			"CREATE TRIGGER block_registrations BEFORE INSERT ON registrations
			 BEGIN
				SELECT RAISE(ABORT, 'registrations closed');
			 END;",
			[],
		)
		.unwrap();

		assert!(matches!(
			register_player(&mut conn, "Gideon Jura", T1),
			Err(TournamentError::Db(_))
		));

		let players: i64 = conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))
			.unwrap();
		assert_eq!(players, 0);
		assert_eq!(count_players(&conn, T1).unwrap(), 0);
	}

	#[test]
	fn duplicate_names_get_distinct_ids() {
		let mut conn = open_in_memory().unwrap();

		let a = register_player(&mut conn, "Chandra Nalaar", T1).unwrap();
		let b = register_player(&mut conn, "Chandra Nalaar", T1).unwrap();

		assert_ne!(a, b);
		assert_eq!(count_players(&conn, T1).unwrap(), 2);
	}

	#[test]
	fn rosters_are_per_tournament() {
		let mut conn = open_in_memory().unwrap();

		let a = register_player(&mut conn, "Jace Beleren", T1).unwrap();
		register_player(&mut conn, "Liliana Vess", TournamentId(2)).unwrap();

		assert!(is_registered(&conn, a, T1).unwrap());
		assert!(!is_registered(&conn, a, TournamentId(2)).unwrap());

		delete_players(&conn, T1).unwrap();
		assert_eq!(count_players(&conn, T1).unwrap(), 0);
		assert_eq!(count_players(&conn, TournamentId(2)).unwrap(), 1);
	}

	#[test]
	fn deleting_players_keeps_identities() {
		let mut conn = open_in_memory().unwrap();

		let id = register_player(&mut conn, "Nissa Revane", T1).unwrap();
		delete_players(&conn, T1).unwrap();
		delete_players(&conn, T1).unwrap();

		let player = get_player(&conn, id).unwrap().unwrap();
		assert_eq!(player.name, "Nissa Revane");
		assert!(get_player(&conn, id + 1).unwrap().is_none());
	}
}
