use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use swiss_tournament::{PlayerId, TournamentId};

#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
	#[arg(short, long, value_name = "FILE", env = "SWISS_DB", default_value = "tournament.db")]
	pub database: PathBuf,

	#[arg(short, long, env = "SWISS_TOURNAMENT", default_value = "1")]
	pub tournament: TournamentId,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[arg(short, long, value_enum, default_value_t = Format::Text)]
	pub format: Format,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
	Text,
	Csv,
}

#[derive(Subcommand)]
pub enum Commands {
	Register {
		name: String,
	},
	DeletePlayers,
	Count,
	DeleteMatches,
	Report {
		winner: PlayerId,
		loser: PlayerId,
	},
	Standings,
	Pairings,
	Status,
	Load {
		#[arg(value_name = "FILE")]
		results: PathBuf,
	},
}
