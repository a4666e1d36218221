//! # Paddock
//!
//! A zoo enclosure placement advisor.
//!
//! Paddock answers one question: given a species and a quantity, which
//! enclosures in the zoo can take the animals, and how much space would be
//! left over? A fixed set of habitat and social-compatibility rules is
//! evaluated against every enclosure in the catalog, and the results are
//! collected into a report. Placement is advisory only; the catalog is
//! never mutated.
//!
//! ## Example
//!
//! ```rust
//! use paddock::{Catalog, PlacementService};
//!
//! let catalog = Catalog::reference();
//! let service = PlacementService::new(&catalog);
//! let report = service.find_placements("monkey", 2)?;
//! assert!(report.any_viable());
//! # Ok::<(), paddock::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod catalog;
pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;

// Re-exports for convenience
pub use catalog::Catalog;
pub use config::{OutputFormat, PaddockConfig};
pub use models::{
    Enclosure, EnclosureId, EnclosureRejection, Habitat, PlacementReport, PlacementRequest,
    PlacementSuccess, Species, Violation, ViolationReason,
};
pub use services::{PlacementService, evaluate, is_comfortable};

/// Error type for paddock operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait
/// implementations. Rule violations are *not* errors: a rejected enclosure
/// is an expected business outcome, carried in [`models::Violation`] inside
/// the report. This type covers the conditions that abort a whole request
/// or operation.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed interactive input, catalog files that fail validation |
/// | `OperationFailed` | Config or catalog files cannot be read or parsed |
/// | `UnknownSpecies` | The requested species is not in the catalog |
/// | `InvalidQuantity` | The requested quantity is zero or negative |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The interactive input line is not `<species> <quantity>`
    /// - A catalog file references a resident species it does not define
    /// - A catalog file contains a zero capacity or zero unit size
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A config or catalog file cannot be read
    /// - TOML deserialization fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The requested species is not in the catalog.
    ///
    /// Short-circuits the whole request: no enclosure is evaluated.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// The requested quantity is not a positive whole number.
    ///
    /// Short-circuits the whole request: no enclosure is evaluated.
    #[error("quantity must be a positive whole number, got {0}")]
    InvalidQuantity(i64),
}

/// Result type alias for paddock operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("bad line".to_string());
        assert_eq!(err.to_string(), "invalid input: bad line");

        let err = Error::OperationFailed {
            operation: "load catalog".to_string(),
            cause: "missing file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'load catalog' failed: missing file"
        );

        let err = Error::UnknownSpecies("dodo".to_string());
        assert_eq!(err.to_string(), "unknown species: dodo");

        let err = Error::InvalidQuantity(-3);
        assert_eq!(
            err.to_string(),
            "quantity must be a positive whole number, got -3"
        );
    }
}
