mod cli;

use std::{
	fs::File,
	io::{self, Write},
};

use clap::Parser;
use cli::{Cli, Commands, Format};
use rusqlite::Connection;
use swiss_tournament::{
	count_matches, count_players, current_round, db, delete_matches, delete_players,
	get_player, import_results, output, player_standings, register_player, report_match,
	swiss_pairings, Match, PlayerId, Result, TournamentId,
};

fn main() {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	if let Err(e) = run(Cli::parse()) {
		eprintln!("error: {e}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	let mut conn = db::open(&cli.database)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	let tournament = cli.tournament;

	match cli.command {
		Commands::Register { name } => {
			let id = register_player(&mut conn, &name, tournament)?;
			writeln!(out, "{id}")?;
		}
		Commands::DeletePlayers => delete_players(&conn, tournament)?,
		Commands::Count => writeln!(out, "{}", count_players(&conn, tournament)?)?,
		Commands::DeleteMatches => delete_matches(&mut conn, tournament)?,
		Commands::Report { winner, loser } => {
			let recorded = report_match(&mut conn, winner, loser, tournament)?;
			out.write_all(report_string(&conn, &recorded)?.as_bytes())?;
		}
		Commands::Standings => {
			let standings = player_standings(&conn, tournament)?;
			match cli.format {
				Format::Text => out.write_all(output::standings_text(&standings).as_bytes())?,
				Format::Csv => output::write_standings_csv(&standings, &mut out)?,
			}
		}
		Commands::Pairings => {
			let pairings = swiss_pairings(&player_standings(&conn, tournament)?)?;
			match cli.format {
				Format::Text => out.write_all(output::pairings_text(&pairings).as_bytes())?,
				Format::Csv => output::write_pairings_csv(&pairings, &mut out)?,
			}
		}
		Commands::Status => out.write_all(status_string(&conn, tournament)?.as_bytes())?,
		Commands::Load { results } => {
			let imported = import_results(&mut conn, tournament, File::open(results)?)?;
			writeln!(out, "{imported}")?;
		}
	}

	out.flush()?;

	Ok(())
}

fn report_string(conn: &Connection, recorded: &Match) -> Result<String> {
	let name = |id: PlayerId| -> Result<String> {
		Ok(get_player(conn, id)?.map_or_else(|| id.to_string(), |p| p.name))
	};

	Ok(format!(
		"round {}: {} beat {}\n",
		recorded.round,
		name(recorded.winner)?,
		name(recorded.loser)?
	))
}

fn status_string(conn: &Connection, tournament: TournamentId) -> Result<String> {
	let mut string = format!(
		"tournament {tournament}\nplayers: {}\nmatches: {}\n",
		count_players(conn, tournament)?,
		count_matches(conn, tournament)?
	);

	match current_round(conn, tournament)? {
		Some(state) => string.push_str(&format!(
			"round {}: {}/{} matches reported\n",
			state.round, state.reported, state.expected
		)),
		None => string.push_str("no rounds played\n"),
	}

	Ok(string)
}

#[cfg(test)]
mod tests {
	use super::*;

	const T1: TournamentId = TournamentId(1);

	#[test]
	fn status_before_first_report() {
		let mut conn = db::open_in_memory().unwrap();
		register_player(&mut conn, "Bruno Walton", T1).unwrap();
		register_player(&mut conn, "Boots O'Neal", T1).unwrap();

		assert_eq!(
			status_string(&conn, T1).unwrap(),
			"tournament 1\nplayers: 2\nmatches: 0\nno rounds played\n"
		);
	}

	#[test]
	fn status_mid_round() {
		let mut conn = db::open_in_memory().unwrap();
		let ids: Vec<_> = ["A", "B", "C", "D"]
			.iter()
			.map(|name| register_player(&mut conn, name, T1).unwrap())
			.collect();
		report_match(&mut conn, ids[0], ids[1], T1).unwrap();

		assert_eq!(
			status_string(&conn, T1).unwrap(),
			"tournament 1\nplayers: 4\nmatches: 1\nround 1: 1/2 matches reported\n"
		);
	}

	#[test]
	fn report_names_both_players() {
		let mut conn = db::open_in_memory().unwrap();
		let winner = register_player(&mut conn, "Cathy Burton", T1).unwrap();
		let loser = register_player(&mut conn, "Diane Grant", T1).unwrap();
		let recorded = report_match(&mut conn, winner, loser, T1).unwrap();

		assert_eq!(
			report_string(&conn, &recorded).unwrap(),
			"round 1: Cathy Burton beat Diane Grant\n"
		);
	}

	#[test]
	fn report_falls_back_to_ids() {
		let conn = db::open_in_memory().unwrap();
		let recorded = Match {
			round: 2,
			tournament: T1,
			winner: 7,
			loser: 9,
		};

		assert_eq!(
			report_string(&conn, &recorded).unwrap(),
			"round 2: 7 beat 9\n"
		);
	}
}
