use std::io::Write;

use crate::{
	data::{Pairing, Standing},
	error::Result,
};

pub fn standings_text(standings: &[Standing]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, s) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) - {} wins / {} matches",
			rank + 1,
			s.name,
			s.id,
			s.wins,
			s.matches
		));
	}

	string.push_str("\n```\n");

	string
}

pub fn pairings_text(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (table, p) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			p.name_a,
			p.id_a,
			p.name_b,
			p.id_b
		));
	}

	string.push_str("\n```\n");

	string
}

pub fn write_standings_csv<W: Write>(standings: &[Standing], out: W) -> Result<()> {
	write_csv(standings, out)
}

pub fn write_pairings_csv<W: Write>(pairings: &[Pairing], out: W) -> Result<()> {
	write_csv(pairings, out)
}

fn write_csv<T: serde::Serialize, W: Write>(rows: &[T], out: W) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(out);

	for row in rows {
		wtr.serialize(row)?;
	}
	wtr.flush()?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn standings() -> Vec<Standing> {
		vec![
			Standing {
				id: 3,
				name: "Cathy Burton".into(),
				wins: 1,
				matches: 1,
			},
			Standing {
				id: 4,
				name: "Diane Grant".into(),
				wins: 0,
				matches: 1,
			},
		]
	}

	#[test]
	fn standings_text_ranks_from_one() {
		let text = standings_text(&standings());

		assert_eq!(
			text,
			"# Standings\n```\n\
			 1: Cathy Burton (#3) - 1 wins / 1 matches\n\
			 2: Diane Grant (#4) - 0 wins / 1 matches\n\
			 ```\n"
		);
	}

	#[test]
	fn pairings_text_numbers_tables() {
		let pairings = vec![Pairing {
			id_a: 1,
			name_a: "Rarity".into(),
			id_b: 5,
			name_b: "Applejack".into(),
		}];

		assert_eq!(
			pairings_text(&pairings),
			"# Pairings\n```\n1: Rarity (#1) vs Applejack (#5)\n```\n"
		);
	}

	#[test]
	fn standings_csv_has_header() {
		let mut buf = Vec::new();
		write_standings_csv(&standings(), &mut buf).unwrap();

		assert_eq!(
			String::from_utf8(buf).unwrap(),
			"id,name,wins,matches\n3,Cathy Burton,1,1\n4,Diane Grant,0,1\n"
		);
	}

	#[test]
	fn empty_pairings_csv_is_empty() {
		let mut buf = Vec::new();
		write_pairings_csv(&[], &mut buf).unwrap();

		assert!(buf.is_empty());
	}
}
