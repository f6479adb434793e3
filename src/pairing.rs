use crate::{
	data::{Pairing, Standing},
	error::{Result, TournamentError},
};

/// Pairs neighbours in `standings`: first with second, third with fourth...
///
/// The ranking already groups equal records together, so no further
/// matching is done: no rematch avoidance and no randomisation.
pub fn swiss_pairings(standings: &[Standing]) -> Result<Vec<Pairing>> {
	if standings.len() % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(standings.len()));
	}

	let pairings = standings
		.chunks_exact(2)
		.map(|pair| Pairing {
			id_a: pair[0].id,
			name_a: pair[0].name.clone(),
			id_b: pair[1].id,
			name_b: pair[1].name.clone(),
		})
		.collect();

	Ok(pairings)
}
