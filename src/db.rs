use std::path::Path;

use rusqlite::{Connection, Result};

pub fn open(path: &Path) -> Result<Connection> {
	let mut conn = Connection::open(path)?;
	create_schema(&mut conn)?;

	Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
	let mut conn = Connection::open_in_memory()?;
	create_schema(&mut conn)?;

	Ok(conn)
}

pub fn create_schema(conn: &mut Connection) -> Result<()> {
	conn.pragma_update(None, "foreign_keys", true)?;

	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id      INTEGER PRIMARY KEY AUTOINCREMENT,
			name    TEXT    NOT NULL,
			created TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS registrations (
			tournament_id INTEGER NOT NULL,
			player_id     INTEGER REFERENCES players (id)
								  NOT NULL,
			PRIMARY KEY (tournament_id, player_id)
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id            INTEGER PRIMARY KEY AUTOINCREMENT,
			round         INTEGER NOT NULL
								  CHECK (round > 0),
			tournament_id INTEGER NOT NULL,
			winner_id     INTEGER REFERENCES players (id)
								  NOT NULL,
			loser_id      INTEGER REFERENCES players (id)
								  NOT NULL,
			CHECK (winner_id <> loser_id)
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS rounds (
			tournament_id INTEGER PRIMARY KEY,
			round         INTEGER NOT NULL,
			expected      INTEGER NOT NULL,
			reported      INTEGER NOT NULL
		);",
		[],
	)?;

	tx.commit()
}
