//! The card grid.
//!
//! A `rows × cols` vector of cards addressed by [`CellId`] in row-major
//! order. The cell count must be even (every face appears exactly twice);
//! odd requests are normalized rather than rejected.

use serde::{Deserialize, Serialize};

use super::{Card, CellId, FaceId};

/// Normalize requested grid dimensions to a valid even-cell layout.
///
/// Dimensions are clamped to at least 1. An odd cell count drops one column;
/// a single-column grid drops a row instead; 1×1 widens to 1×2. Corrections
/// are logged as warnings, never errors.
#[must_use]
pub fn normalize_dims(rows: usize, cols: usize) -> (usize, usize) {
    let mut rows = rows.max(1);
    let mut cols = cols.max(1);

    if (rows * cols) % 2 != 0 {
        if cols > 1 {
            log::warn!("total cells not even - making it even by reducing one column");
            cols -= 1;
        } else if rows > 1 {
            log::warn!("total cells not even - making it even by reducing one row");
            rows -= 1;
        } else {
            log::warn!("1x1 grid requested - widening to 1x2");
            cols = 2;
        }
    }

    (rows, cols)
}

/// A dealt grid of cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cards: Vec<Card>,
}

impl Grid {
    /// Deal a grid from an already-shuffled deck of faces.
    ///
    /// `faces.len()` must equal `rows * cols`; the deck generator guarantees
    /// this for normalized dimensions.
    #[must_use]
    pub fn deal(rows: usize, cols: usize, faces: Vec<FaceId>) -> Self {
        debug_assert_eq!(faces.len(), rows * cols);
        Self {
            rows,
            cols,
            cards: faces.into_iter().map(Card::new).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cell at `(row, col)`.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> CellId {
        CellId::new((row * self.cols + col) as u16)
    }

    /// Get a card by cell, `None` if out of range.
    #[must_use]
    pub fn card(&self, cell: CellId) -> Option<&Card> {
        self.cards.get(cell.index())
    }

    /// Get a card mutably, `None` if out of range.
    pub fn card_mut(&mut self, cell: CellId) -> Option<&mut Card> {
        self.cards.get_mut(cell.index())
    }

    /// Iterate over cells and cards in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CellId::new(i as u16), c))
    }

    /// Iterate mutably over cells and cards in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CellId, &mut Card)> {
        self.cards
            .iter_mut()
            .enumerate()
            .map(|(i, c)| (CellId::new(i as u16), c))
    }
}
