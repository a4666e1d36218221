//! Species and habitat types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Habitat types an enclosure can provide and a species can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Habitat {
    /// Open grassland.
    Savanna,
    /// Dense tree cover.
    Forest,
    /// Fresh water.
    River,
    /// Composite enclosure offering both savanna and river.
    ///
    /// Treated as compatible with *any* species regardless of its declared
    /// habitats, and it is the only habitat where an occupied enclosure
    /// accepts hippopotamuses.
    SavannaAndRiver,
}

impl Habitat {
    /// Returns the habitat as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Savanna => "savanna",
            Self::Forest => "forest",
            Self::River => "river",
            Self::SavannaAndRiver => "savanna-and-river",
        }
    }

    /// Parses a habitat from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savanna" => Some(Self::Savanna),
            "forest" => Some(Self::Forest),
            "river" => Some(Self::River),
            "savanna-and-river" | "savanna and river" => Some(Self::SavannaAndRiver),
            _ => None,
        }
    }

    /// Returns true if this is the composite savanna-and-river habitat.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::SavannaAndRiver)
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An animal kind: per-individual space cost, habitat compatibility, and
/// diet classification.
///
/// Immutable reference data; loaded once into a
/// [`Catalog`](crate::Catalog) and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    /// Unique lowercase name, the catalog key.
    pub name: String,
    /// Space units consumed per individual.
    pub unit_size: u32,
    /// Habitats this species can live in. Non-empty.
    pub habitats: Vec<Habitat>,
    /// Whether the species is a carnivore.
    ///
    /// Carnivores may only cohabit with their own species, and never pay
    /// the shared-space surcharge.
    #[serde(default)]
    pub carnivore: bool,
}

impl Species {
    /// Creates a new species entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unit_size: u32,
        habitats: Vec<Habitat>,
        carnivore: bool,
    ) -> Self {
        Self {
            name: name.into(),
            unit_size,
            habitats,
            carnivore,
        }
    }

    /// Returns true if the species' declared habitats include `habitat`.
    ///
    /// This is the declared list only; the composite-enclosure escape
    /// hatch lives in the evaluator, not here.
    #[must_use]
    pub fn tolerates(&self, habitat: Habitat) -> bool {
        self.habitats.contains(&habitat)
    }
}
