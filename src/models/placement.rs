//! Placement request and result types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{EnclosureId, Habitat};

/// A single placement request: which species, and how many individuals.
///
/// Ephemeral; one request is evaluated against every enclosure and then
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    /// Lowercase species name.
    pub species: String,
    /// Requested number of individuals.
    ///
    /// Signed so the input layer can hand over whatever the user typed;
    /// anything not strictly positive is rejected before any rule runs.
    pub quantity: i64,
}

impl PlacementRequest {
    /// Creates a new placement request.
    #[must_use]
    pub fn new(species: impl Into<String>, quantity: i64) -> Self {
        Self {
            species: species.into(),
            quantity,
        }
    }
}

/// A viable placement: the enclosure can take the requested animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSuccess {
    /// The enclosure that can take the animals.
    pub enclosure: EnclosureId,
    /// Space units left after the placement.
    pub free_space: u32,
    /// The enclosure's total capacity.
    pub total_capacity: u32,
}

/// A rejected enclosure together with the first rule it violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosureRejection {
    /// The enclosure that was rejected.
    pub enclosure: EnclosureId,
    /// The specific rule violation.
    pub violation: Violation,
}

/// A specific rule violation for one enclosure.
///
/// These are expected business outcomes, not operational failures. Checks
/// run in a fixed order and the first failing check determines the
/// variant; no enclosure ever reports more than one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The species name is not in the catalog.
    #[error("invalid species '{species}'")]
    InvalidSpecies {
        /// The unrecognized name as given.
        species: String,
    },

    /// The quantity is zero or negative.
    #[error("invalid quantity {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// The enclosure's habitat does not suit the species.
    #[error("the {species} cannot live in a {habitat} habitat")]
    IncompatibleHabitat {
        /// The candidate species.
        species: String,
        /// The enclosure's habitat.
        habitat: Habitat,
    },

    /// The animals would not fit in the remaining space.
    #[error("not enough space for {quantity} {species}(s) in enclosure {enclosure}")]
    InsufficientSpace {
        /// The candidate species.
        species: String,
        /// The requested quantity.
        quantity: i64,
        /// The rejecting enclosure.
        enclosure: EnclosureId,
    },

    /// A carnivore may only cohabit with its own species.
    #[error("carnivores may only share enclosure {enclosure} with their own species")]
    CarnivoreExclusivity {
        /// The rejecting enclosure.
        enclosure: EnclosureId,
    },

    /// The addition would leave a current resident uncomfortable.
    #[error(
        "adding {quantity} {species}(s) would leave the current residents of enclosure {enclosure} uncomfortable"
    )]
    ResidentDiscomfort {
        /// The candidate species.
        species: String,
        /// The requested quantity.
        quantity: i64,
        /// The rejecting enclosure.
        enclosure: EnclosureId,
    },

    /// Hippopotamuses only accept company in savanna-and-river enclosures.
    #[error("hippopotamuses only accept other species in savanna-and-river enclosures")]
    HippoHabitatRestriction,

    /// A lone monkey may not be placed into an empty enclosure.
    #[error("monkeys are not comfortable alone; place more than one animal")]
    SocialSpeciesSolitude,
}

impl Violation {
    /// Returns the machine-distinguishable reason tag.
    #[must_use]
    pub const fn reason(&self) -> ViolationReason {
        match self {
            Self::InvalidSpecies { .. } => ViolationReason::InvalidSpecies,
            Self::InvalidQuantity { .. } => ViolationReason::InvalidQuantity,
            Self::IncompatibleHabitat { .. } => ViolationReason::IncompatibleHabitat,
            Self::InsufficientSpace { .. } => ViolationReason::InsufficientSpace,
            Self::CarnivoreExclusivity { .. } => ViolationReason::CarnivoreExclusivity,
            Self::ResidentDiscomfort { .. } => ViolationReason::ResidentDiscomfort,
            Self::HippoHabitatRestriction => ViolationReason::HippoHabitatRestriction,
            Self::SocialSpeciesSolitude => ViolationReason::SocialSpeciesSolitude,
        }
    }
}

/// Machine-readable tags for the rule violations.
///
/// Callers branch on these; the human-readable message on
/// [`Violation`] is a default template and localization is left to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// Species name not in the catalog.
    InvalidSpecies,
    /// Quantity zero or negative.
    InvalidQuantity,
    /// Habitat does not suit the species.
    IncompatibleHabitat,
    /// Not enough remaining space.
    InsufficientSpace,
    /// Carnivore with a different resident species.
    CarnivoreExclusivity,
    /// A current resident would become uncomfortable.
    ResidentDiscomfort,
    /// Hippopotamus into an occupied non-composite enclosure.
    HippoHabitatRestriction,
    /// Lone monkey into an empty enclosure.
    SocialSpeciesSolitude,
}

impl ViolationReason {
    /// Returns the tag as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSpecies => "invalid_species",
            Self::InvalidQuantity => "invalid_quantity",
            Self::IncompatibleHabitat => "incompatible_habitat",
            Self::InsufficientSpace => "insufficient_space",
            Self::CarnivoreExclusivity => "carnivore_exclusivity",
            Self::ResidentDiscomfort => "resident_discomfort",
            Self::HippoHabitatRestriction => "hippo_habitat_restriction",
            Self::SocialSpeciesSolitude => "social_species_solitude",
        }
    }
}

/// The aggregate result of evaluating one request against every enclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    /// The request this report answers.
    pub request: PlacementRequest,
    /// Enclosures that can take the animals, in catalog order.
    pub successes: Vec<PlacementSuccess>,
    /// Rejected enclosures with their first violated rule, in catalog order.
    pub failures: Vec<EnclosureRejection>,
}

impl PlacementReport {
    /// Returns true if at least one enclosure can take the animals.
    ///
    /// When this is false the report represents the distinct
    /// "no viable enclosure" terminal outcome, not merely an empty list.
    #[must_use]
    pub fn any_viable(&self) -> bool {
        !self.successes.is_empty()
    }
}
