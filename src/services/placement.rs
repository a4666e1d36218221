//! Placement report aggregation.

use tracing::{debug, info, instrument};

use super::evaluator::evaluate;
use crate::catalog::Catalog;
use crate::models::{EnclosureRejection, PlacementReport, PlacementRequest};
use crate::{Error, Result};

/// Service that answers one placement request against a whole catalog.
///
/// Borrows the catalog read-only: evaluating one request never mutates
/// anything, and identical requests against the same catalog always yield
/// identical reports.
#[derive(Debug, Clone, Copy)]
pub struct PlacementService<'a> {
    catalog: &'a Catalog,
}

impl<'a> PlacementService<'a> {
    /// Creates a placement service over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Evaluates every enclosure for `quantity` animals of `species_name`.
    ///
    /// An unknown species or a non-positive quantity short-circuits the
    /// whole request before any enclosure is looked at. Otherwise every
    /// enclosure is evaluated independently in catalog order; rejections
    /// are collected alongside the successes and never halt iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSpecies`] or [`Error::InvalidQuantity`] for
    /// an invalid request. A report with zero successes is *not* an error;
    /// it is the distinct no-viable-enclosure outcome.
    #[instrument(skip(self))]
    pub fn find_placements(&self, species_name: &str, quantity: i64) -> Result<PlacementReport> {
        if self.catalog.species(species_name).is_none() {
            return Err(Error::UnknownSpecies(species_name.to_string()));
        }
        if quantity <= 0 {
            return Err(Error::InvalidQuantity(quantity));
        }

        let mut successes = Vec::new();
        let mut failures = Vec::new();

        for enclosure in self.catalog.enclosures() {
            match evaluate(self.catalog, enclosure, species_name, quantity) {
                Ok(success) => successes.push(success),
                Err(violation) => failures.push(EnclosureRejection {
                    enclosure: enclosure.id,
                    violation,
                }),
            }
        }

        if successes.is_empty() {
            debug!(species = species_name, quantity, "no viable enclosure");
        }
        info!(
            species = species_name,
            quantity,
            viable = successes.len(),
            rejected = failures.len(),
            "placement request evaluated"
        );

        Ok(PlacementReport {
            request: PlacementRequest::new(species_name, quantity),
            successes,
            failures,
        })
    }
}
