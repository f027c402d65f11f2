//! Card face designs.
//!
//! The `DesignRegistry` is the pool of faces the deck generator draws from.
//! Its size bounds the largest grid the game can deal: a grid of `p` pairs
//! needs at least `p` registered designs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Face design identifier. Two cards sharing a `FaceId` form a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// A single card face design.
///
/// Carries a display name and a one-character glyph so a text frontend can
/// render the face without any sprite assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceDesign {
    /// Unique identifier for this design.
    pub id: FaceId,

    /// Human-readable name.
    pub name: String,

    /// One-character glyph for text rendering.
    pub glyph: char,
}

impl FaceDesign {
    /// Create a new face design.
    pub fn new(id: FaceId, name: impl Into<String>, glyph: char) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
        }
    }
}

/// Registry of face designs.
///
/// ## Example
///
/// ```
/// use match_pairs::core::{DesignRegistry, FaceId};
///
/// let mut registry = DesignRegistry::new();
/// let id = registry.register_auto("Apple", 'A');
///
/// let found = registry.get(id).unwrap();
/// assert_eq!(found.name, "Apple");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DesignRegistry {
    designs: FxHashMap<FaceId, FaceDesign>,
    next_id: u32,
}

impl DesignRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 18-design pool used by the frontend.
    ///
    /// Large enough for every grid preset (5×6 needs 15 pairs).
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (name, glyph) in [
            ("Apple", 'A'),
            ("Banana", 'B'),
            ("Cherry", 'C'),
            ("Dragonfruit", 'D'),
            ("Elderberry", 'E'),
            ("Fig", 'F'),
            ("Grape", 'G'),
            ("Honeydew", 'H'),
            ("Jackfruit", 'J'),
            ("Kiwi", 'K'),
            ("Lemon", 'L'),
            ("Mango", 'M'),
            ("Nectarine", 'N'),
            ("Orange", 'O'),
            ("Papaya", 'P'),
            ("Quince", 'Q'),
            ("Raspberry", 'R'),
            ("Strawberry", 'S'),
        ] {
            registry.register_auto(name, glyph);
        }
        registry
    }

    /// Register a design.
    ///
    /// Panics if a design with the same ID already exists.
    pub fn register(&mut self, design: FaceDesign) {
        if self.designs.contains_key(&design.id) {
            panic!("Design with ID {:?} already registered", design.id);
        }
        self.designs.insert(design.id, design);
    }

    /// Register a design with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>, glyph: char) -> FaceId {
        let id = FaceId::new(self.next_id);
        self.next_id += 1;

        self.register(FaceDesign::new(id, name, glyph));
        id
    }

    /// Get a design by ID.
    #[must_use]
    pub fn get(&self, id: FaceId) -> Option<&FaceDesign> {
        self.designs.get(&id)
    }

    /// Get the glyph for a face, falling back to `?` for unknown IDs.
    #[must_use]
    pub fn glyph(&self, id: FaceId) -> char {
        self.designs.get(&id).map_or('?', |d| d.glyph)
    }

    /// Check if a face ID is registered.
    #[must_use]
    pub fn contains(&self, id: FaceId) -> bool {
        self.designs.contains_key(&id)
    }

    /// Get the number of registered designs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.designs.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Iterate over all designs.
    pub fn iter(&self) -> impl Iterator<Item = &FaceDesign> {
        self.designs.values()
    }

    /// Registered face IDs in ascending order.
    ///
    /// The deck generator takes the first `p` of these for a `p`-pair deck.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<FaceId> {
        let mut ids: Vec<_> = self.designs.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = DesignRegistry::new();

        registry.register(FaceDesign::new(FaceId::new(1), "Test Face", 'T'));

        let found = registry.get(FaceId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Face");

        assert!(registry.get(FaceId::new(99)).is_none());
    }

    #[test]
    fn test_register_auto() {
        let mut registry = DesignRegistry::new();

        let id1 = registry.register_auto("Face A", 'A');
        let id2 = registry.register_auto("Face B", 'B');

        assert_eq!(id1, FaceId::new(0));
        assert_eq!(id2, FaceId::new(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = DesignRegistry::new();

        registry.register(FaceDesign::new(FaceId::new(1), "Face A", 'A'));
        registry.register(FaceDesign::new(FaceId::new(1), "Face B", 'B')); // Should panic
    }

    #[test]
    fn test_standard_pool() {
        let registry = DesignRegistry::standard();

        // Must cover the largest grid preset (5x6 = 15 pairs)
        assert!(registry.len() >= 15);

        // Glyphs are unique so text rendering is unambiguous
        let mut glyphs: Vec<_> = registry.iter().map(|d| d.glyph).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), registry.len());
    }

    #[test]
    fn test_sorted_ids() {
        let mut registry = DesignRegistry::new();
        registry.register(FaceDesign::new(FaceId::new(2), "C", 'C'));
        registry.register(FaceDesign::new(FaceId::new(0), "A", 'A'));
        registry.register(FaceDesign::new(FaceId::new(1), "B", 'B'));

        assert_eq!(
            registry.sorted_ids(),
            vec![FaceId::new(0), FaceId::new(1), FaceId::new(2)]
        );
    }

    #[test]
    fn test_glyph_fallback() {
        let registry = DesignRegistry::new();
        assert_eq!(registry.glyph(FaceId::new(7)), '?');
    }
}
