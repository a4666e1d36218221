//! Rule evaluation services.
//!
//! All the decision logic lives here: the comfort rule for current
//! residents, the per-enclosure eligibility evaluator, and the aggregator
//! that runs the evaluator across the whole catalog.

mod comfort;
mod evaluator;
mod placement;

pub use comfort::{SOCIAL_SPECIES, is_comfortable};
pub use evaluator::{HIPPOPOTAMUS, evaluate};
pub use placement::PlacementService;
