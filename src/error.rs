//! Error taxonomy.
//!
//! Errors are either auto-corrected deterministically (odd grid sizes are
//! normalized with a warning, not an error) or surfaced once with an early
//! return. No retries, no panics on the library's error paths.

use thiserror::Error;

/// Top-level game errors.
#[derive(Error, Debug)]
pub enum GameError {
    /// The design pool is too small for the requested grid size.
    ///
    /// Grid generation aborts without committing partial state.
    #[error("not enough face designs for requested grid size: need {needed}, have {available}")]
    InsufficientDesigns { needed: usize, available: usize },

    /// `load_game` was called with no saved game in the store.
    ///
    /// Informational; the caller's state is left unchanged.
    #[error("no saved game found")]
    NothingToLoad,

    /// The save store failed.
    #[error("save store error: {0}")]
    Save(#[from] SaveError),
}

/// Save store errors.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("corrupted save data")]
    Corrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InsufficientDesigns {
            needed: 15,
            available: 10,
        };
        assert_eq!(
            err.to_string(),
            "not enough face designs for requested grid size: need 15, have 10"
        );

        assert_eq!(GameError::NothingToLoad.to_string(), "no saved game found");
    }

    #[test]
    fn test_save_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SaveError = io.into();
        assert!(matches!(err, SaveError::Io(_)));

        let game: GameError = err.into();
        assert!(matches!(game, GameError::Save(_)));
    }
}
