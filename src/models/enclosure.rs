//! Enclosure types and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Habitat;

/// Unique numeric identifier for an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnclosureId(u32);

impl EnclosureId {
    /// Creates a new enclosure ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EnclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EnclosureId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A zoo habitat unit with fixed capacity and a habitat-type tag.
///
/// `occupied` and `residents` are two independently supplied views of the
/// current population. They are *not* reconciled against each other: the
/// source data tracks occupied space as a raw number while the resident
/// list may hold fewer entries than that number implies. The evaluator
/// only ever checks that *additional* space fits, so the mismatch is
/// deliberate and load-bearing; unifying the two would change outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosure {
    /// Unique identifier.
    pub id: EnclosureId,
    /// The habitat type this enclosure provides.
    pub habitat: Habitat,
    /// Total space units.
    pub capacity: u32,
    /// Space units already consumed by current residents.
    ///
    /// Assumed to be at most `capacity` in well-formed data, but never
    /// enforced here.
    #[serde(default)]
    pub occupied: u32,
    /// Species names currently housed. Order carries no meaning.
    #[serde(default)]
    pub residents: Vec<String>,
}

impl Enclosure {
    /// Creates a new enclosure.
    #[must_use]
    pub fn new(
        id: impl Into<EnclosureId>,
        habitat: Habitat,
        capacity: u32,
        occupied: u32,
        residents: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            habitat,
            capacity,
            occupied,
            residents,
        }
    }

    /// Returns true if no species currently lives here.
    ///
    /// Emptiness is judged by the resident list, not by `occupied`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Returns true if any resident belongs to a species other than `name`.
    #[must_use]
    pub fn has_other_species(&self, name: &str) -> bool {
        self.residents.iter().any(|r| r != name)
    }
}
