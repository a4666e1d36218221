//! Data models for paddock.
//!
//! This module contains all the core data structures used throughout the
//! system: the species and enclosure reference data, and the ephemeral
//! request/result types produced by an evaluation.

mod enclosure;
mod placement;
mod species;

pub use enclosure::{Enclosure, EnclosureId};
pub use placement::{
    EnclosureRejection, PlacementReport, PlacementRequest, PlacementSuccess, Violation,
    ViolationReason,
};
pub use species::{Habitat, Species};
