use std::io::Read;

use rusqlite::Connection;
use serde::Deserialize;

use crate::{
	data::{PlayerId, TournamentId},
	error::Result,
	ledger::record_match,
};

#[derive(Debug, Deserialize)]
struct ResultRecord {
	winner: PlayerId,
	loser: PlayerId,
}

/// Reports every `winner,loser` row of a CSV file in order.
///
/// The whole file is one transaction: a bad row leaves the ledger untouched.
pub fn import_results<R: Read>(
	conn: &mut Connection,
	tournament: TournamentId,
	reader: R,
) -> Result<usize> {
	let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
	let tx = conn.transaction()?;
	let mut imported = 0;

	for record in rdr.deserialize() {
		let record: ResultRecord = record?;
		record_match(&tx, record.winner, record.loser, tournament)?;
		imported += 1;
	}

	tx.commit()?;

	log::info!("imported {imported} results into tournament {tournament}");
	Ok(imported)
}
