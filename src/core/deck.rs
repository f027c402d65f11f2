//! Deck generation.
//!
//! Builds the shuffled sequence of paired face identifiers a new grid is
//! dealt from. Every face appears exactly twice; the shuffle is a uniform
//! permutation through [`GameRng`]. Re-invoked for every new grid.

use super::{DesignRegistry, FaceId, GameRng};
use crate::error::GameError;

/// Build a shuffled deck of `2 * pairs` faces.
///
/// Takes the first `pairs` designs of the registry (in ID order), doubles
/// them, and shuffles. Fails with [`GameError::InsufficientDesigns`] when the
/// registry is smaller than the pair count; nothing is committed in that
/// case.
pub fn build_deck(
    pairs: usize,
    designs: &DesignRegistry,
    rng: &mut GameRng,
) -> Result<Vec<FaceId>, GameError> {
    if designs.len() < pairs {
        log::error!(
            "not enough face designs for requested grid size: need at least {}",
            pairs
        );
        return Err(GameError::InsufficientDesigns {
            needed: pairs,
            available: designs.len(),
        });
    }

    let pool = designs.sorted_ids();
    let mut deck = Vec::with_capacity(pairs * 2);
    for &face in pool.iter().take(pairs) {
        deck.push(face);
        deck.push(face);
    }

    rng.shuffle(&mut deck);
    Ok(deck)
}
