//! The per-enclosure eligibility evaluator.
//!
//! One pure, stateless decision function. The rules are an ordered slice
//! of independent predicate checks; the first failing check determines the
//! reported violation, and no enclosure ever reports more than one.

use tracing::debug;

use super::comfort::{SOCIAL_SPECIES, is_comfortable};
use crate::catalog::Catalog;
use crate::models::{Enclosure, PlacementSuccess, Species, Violation};

/// The species that only accepts other species in savanna-and-river
/// enclosures.
pub const HIPPOPOTAMUS: &str = "hippopotamus";

/// Everything a single rule check may look at.
struct CheckContext<'a> {
    enclosure: &'a Enclosure,
    species: &'a Species,
    quantity: i64,
    /// Space already occupied plus what the placement would consume,
    /// surcharge included. Saturating, so an absurd quantity stays above
    /// any capacity instead of wrapping.
    consumed: u64,
}

type Check = fn(&CheckContext<'_>) -> Result<(), Violation>;

/// The rule sequence. Order is load-bearing: the first failure wins.
const CHECKS: &[Check] = &[
    habitat_compatibility,
    available_space,
    carnivore_exclusivity,
    resident_comfort,
    hippo_cohabitation,
    monkey_solitude,
];

/// Decides whether `quantity` animals of `species_name` can be placed into
/// `enclosure`.
///
/// Validates the species name and quantity before any enclosure-specific
/// rule runs, then applies the six rule checks in order. On success,
/// reports the space left over and the enclosure's total capacity. Never
/// mutates anything; the placement is advisory output only.
pub fn evaluate(
    catalog: &Catalog,
    enclosure: &Enclosure,
    species_name: &str,
    quantity: i64,
) -> Result<PlacementSuccess, Violation> {
    let Some(species) = catalog.species(species_name) else {
        return Err(Violation::InvalidSpecies {
            species: species_name.to_string(),
        });
    };
    if quantity <= 0 {
        return Err(Violation::InvalidQuantity { quantity });
    }

    let ctx = CheckContext {
        enclosure,
        species,
        quantity,
        consumed: u64::from(enclosure.occupied)
            .saturating_add(required_space(enclosure, species, quantity)),
    };

    for check in CHECKS {
        if let Err(violation) = check(&ctx) {
            debug!(
                enclosure = %enclosure.id,
                species = species_name,
                reason = violation.reason().as_str(),
                "placement rejected"
            );
            return Err(violation);
        }
    }

    // The space check passed, so the consumed total is within capacity
    // and the difference narrows back into u32 without truncation.
    debug_assert!(ctx.consumed <= u64::from(enclosure.capacity));
    let free = u64::from(enclosure.capacity).saturating_sub(ctx.consumed);
    debug!(enclosure = %enclosure.id, species = species_name, free, "placement viable");
    Ok(PlacementSuccess {
        enclosure: enclosure.id,
        free_space: u32::try_from(free).unwrap_or(u32::MAX),
        total_capacity: enclosure.capacity,
    })
}

/// Space the placement would consume: `unit_size * quantity`, plus one
/// extra unit when non-carnivores join an already-occupied enclosure (the
/// shared-space surcharge). Carnivores and empty enclosures never pay it.
///
/// Widened to u64 with saturating multiplication so an absurd quantity
/// degrades into an insufficient-space rejection instead of overflowing.
fn required_space(enclosure: &Enclosure, species: &Species, quantity: i64) -> u64 {
    let surcharge = u64::from(!enclosure.is_empty() && !species.carnivore);
    u64::from(species.unit_size)
        .saturating_mul(quantity.unsigned_abs())
        .saturating_add(surcharge)
}

/// Rule 1: the enclosure's habitat must appear in the species' declared
/// list, or be the composite savanna-and-river type, which fits everything.
fn habitat_compatibility(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx.species.tolerates(ctx.enclosure.habitat) || ctx.enclosure.habitat.is_composite() {
        Ok(())
    } else {
        Err(Violation::IncompatibleHabitat {
            species: ctx.species.name.clone(),
            habitat: ctx.enclosure.habitat,
        })
    }
}

/// Rule 2: the required space must fit next to what is already occupied.
fn available_space(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx.consumed > u64::from(ctx.enclosure.capacity) {
        Err(Violation::InsufficientSpace {
            species: ctx.species.name.clone(),
            quantity: ctx.quantity,
            enclosure: ctx.enclosure.id,
        })
    } else {
        Ok(())
    }
}

/// Rule 3: a carnivore candidate may not join residents of another species.
fn carnivore_exclusivity(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx.species.carnivore
        && !ctx.enclosure.is_empty()
        && ctx.enclosure.has_other_species(&ctx.species.name)
    {
        Err(Violation::CarnivoreExclusivity {
            enclosure: ctx.enclosure.id,
        })
    } else {
        Ok(())
    }
}

/// Rule 4: every current resident must remain comfortable. Evaluated
/// against the current population only, not the post-addition state.
fn resident_comfort(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx
        .enclosure
        .residents
        .iter()
        .any(|resident| !is_comfortable(ctx.enclosure, resident))
    {
        Err(Violation::ResidentDiscomfort {
            species: ctx.species.name.clone(),
            quantity: ctx.quantity,
            enclosure: ctx.enclosure.id,
        })
    } else {
        Ok(())
    }
}

/// Rule 5: a hippopotamus only accepts company in an enclosure whose
/// habitat is exactly savanna-and-river.
fn hippo_cohabitation(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx.species.name == HIPPOPOTAMUS
        && !ctx.enclosure.is_empty()
        && !ctx.enclosure.habitat.is_composite()
    {
        Err(Violation::HippoHabitatRestriction)
    } else {
        Ok(())
    }
}

/// Rule 6: a single monkey may not be placed alone into an empty
/// enclosure. Two or more, or a non-empty destination, are fine.
fn monkey_solitude(ctx: &CheckContext<'_>) -> Result<(), Violation> {
    if ctx.species.name == SOCIAL_SPECIES && ctx.enclosure.is_empty() && ctx.quantity == 1 {
        Err(Violation::SocialSpeciesSolitude)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{Habitat, ViolationReason};

    /// A minimal catalog with one species and one enclosure, so each test
    /// isolates exactly one rule.
    fn single(species: Species, enclosure: Enclosure) -> Catalog {
        Catalog::new(vec![species], vec![enclosure])
    }

    fn herbivore(name: &str, unit_size: u32, habitats: Vec<Habitat>) -> Species {
        Species::new(name, unit_size, habitats, false)
    }

    #[test]
    fn test_unknown_species_fails_first() {
        let catalog = Catalog::reference();
        let err = evaluate(&catalog, &catalog.enclosures()[0], "unicorn", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InvalidSpecies);
    }

    #[test]
    fn test_non_positive_quantity_fails_before_rules() {
        let catalog = Catalog::reference();
        for quantity in [0, -1, -42] {
            let err = evaluate(&catalog, &catalog.enclosures()[0], "lion", quantity).unwrap_err();
            assert_eq!(err.reason(), ViolationReason::InvalidQuantity);
        }
    }

    #[test]
    fn test_incompatible_habitat() {
        let catalog = single(
            herbivore("gazelle", 2, vec![Habitat::Savanna]),
            Enclosure::new(1, Habitat::River, 10, 0, vec![]),
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::IncompatibleHabitat);
    }

    #[test]
    fn test_composite_habitat_fits_anything() {
        // A forest-only species in a savanna-and-river enclosure: the
        // composite type is a universal fit.
        let catalog = single(
            herbivore("tapir", 2, vec![Habitat::Forest]),
            Enclosure::new(1, Habitat::SavannaAndRiver, 10, 0, vec![]),
        );
        let success = evaluate(&catalog, &catalog.enclosures()[0], "tapir", 2).unwrap();
        assert_eq!(success.free_space, 6);
    }

    #[test]
    fn test_space_boundary_exact_fit() {
        let catalog = single(
            herbivore("gazelle", 2, vec![Habitat::Savanna]),
            Enclosure::new(1, Habitat::Savanna, 6, 2, vec![]),
        );
        // 2 gazelles * 2 units into an empty-list enclosure: no surcharge.
        let success = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 2).unwrap();
        assert_eq!(success.free_space, 0);
        assert_eq!(success.total_capacity, 6);
    }

    #[test]
    fn test_space_boundary_one_over() {
        let catalog = single(
            herbivore("gazelle", 2, vec![Habitat::Savanna]),
            Enclosure::new(1, Habitat::Savanna, 6, 3, vec![]),
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 2).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InsufficientSpace);
    }

    #[test]
    fn test_surcharge_applies_to_herbivores_joining_residents() {
        // Capacity 5, occupied 2, gazelle resident. One more gazelle costs
        // 2 + 1 surcharge = 3, an exact fit.
        let enclosure = Enclosure::new(1, Habitat::Savanna, 5, 2, vec!["gazelle".to_string()]);
        let catalog = single(herbivore("gazelle", 2, vec![Habitat::Savanna]), enclosure);
        let success = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 1).unwrap();
        assert_eq!(success.free_space, 0);

        // Capacity 4 would be one unit short because of the surcharge.
        let enclosure = Enclosure::new(1, Habitat::Savanna, 4, 2, vec!["gazelle".to_string()]);
        let catalog = single(herbivore("gazelle", 2, vec![Habitat::Savanna]), enclosure);
        let err = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InsufficientSpace);
    }

    #[test]
    fn test_no_surcharge_for_carnivores() {
        let enclosure = Enclosure::new(1, Habitat::Savanna, 5, 2, vec!["lion".to_string()]);
        let catalog = single(
            Species::new("lion", 3, vec![Habitat::Savanna], true),
            enclosure,
        );
        // 3 units exactly fill the remaining 3; a surcharge would reject.
        let success = evaluate(&catalog, &catalog.enclosures()[0], "lion", 1).unwrap();
        assert_eq!(success.free_space, 0);
    }

    #[test]
    fn test_carnivore_exclusivity() {
        let catalog = Catalog::new(
            vec![
                Species::new("leopard", 2, vec![Habitat::Savanna], true),
                herbivore("gazelle", 2, vec![Habitat::Savanna]),
            ],
            vec![Enclosure::new(
                1,
                Habitat::Savanna,
                20,
                2,
                vec!["gazelle".to_string()],
            )],
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "leopard", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::CarnivoreExclusivity);
    }

    #[test]
    fn test_carnivore_with_own_species_passes() {
        let enclosure = Enclosure::new(1, Habitat::Savanna, 20, 3, vec!["lion".to_string()]);
        let catalog = single(
            Species::new("lion", 3, vec![Habitat::Savanna], true),
            enclosure,
        );
        assert!(evaluate(&catalog, &catalog.enclosures()[0], "lion", 1).is_ok());
    }

    #[test]
    fn test_resident_discomfort_for_lone_monkey() {
        // A lone monkey resident is uncomfortable no matter what arrives.
        let enclosure = Enclosure::new(1, Habitat::Savanna, 20, 1, vec!["monkey".to_string()]);
        let catalog = Catalog::new(
            vec![
                herbivore("monkey", 1, vec![Habitat::Savanna, Habitat::Forest]),
                herbivore("gazelle", 2, vec![Habitat::Savanna]),
            ],
            vec![enclosure],
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "gazelle", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::ResidentDiscomfort);
    }

    #[test]
    fn test_hippo_company_needs_composite_habitat() {
        let hippo = herbivore("hippopotamus", 4, vec![Habitat::Savanna, Habitat::River]);

        // Occupied savanna enclosure: rejected.
        let enclosure = Enclosure::new(1, Habitat::Savanna, 20, 2, vec!["gazelle".to_string()]);
        let catalog = Catalog::new(
            vec![hippo.clone(), herbivore("gazelle", 2, vec![Habitat::Savanna])],
            vec![enclosure],
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "hippopotamus", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::HippoHabitatRestriction);

        // Occupied savanna-and-river enclosure: accepted.
        let enclosure = Enclosure::new(
            1,
            Habitat::SavannaAndRiver,
            20,
            2,
            vec!["gazelle".to_string()],
        );
        let catalog = Catalog::new(
            vec![hippo.clone(), herbivore("gazelle", 2, vec![Habitat::Savanna])],
            vec![enclosure],
        );
        assert!(evaluate(&catalog, &catalog.enclosures()[0], "hippopotamus", 1).is_ok());

        // Empty enclosure: the rule does not apply at all.
        let enclosure = Enclosure::new(1, Habitat::River, 20, 0, vec![]);
        let catalog = Catalog::new(vec![hippo], vec![enclosure]);
        assert!(evaluate(&catalog, &catalog.enclosures()[0], "hippopotamus", 1).is_ok());
    }

    #[test]
    fn test_single_monkey_into_empty_enclosure_rejected() {
        let enclosure = Enclosure::new(1, Habitat::Forest, 5, 0, vec![]);
        let catalog = single(
            herbivore("monkey", 1, vec![Habitat::Savanna, Habitat::Forest]),
            enclosure,
        );
        let err = evaluate(&catalog, &catalog.enclosures()[0], "monkey", 1).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::SocialSpeciesSolitude);

        // Two monkeys are fine.
        let success = evaluate(&catalog, &catalog.enclosures()[0], "monkey", 2).unwrap();
        assert_eq!(success.free_space, 3);
    }

    #[test]
    fn test_absurd_quantity_degrades_to_insufficient_space() {
        let catalog = Catalog::reference();
        let err = evaluate(&catalog, &catalog.enclosures()[0], "monkey", i64::MAX).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InsufficientSpace);
    }

    #[test]
    fn test_saturated_space_plus_occupancy_stays_a_rejection() {
        // A unit size above 1 saturates the multiplication itself, and the
        // destination's occupied units then stack on top of the saturated
        // total. Both layers must stay a rejection, never wrap.
        let catalog = Catalog::reference();
        let lion_den = &catalog.enclosures()[4];
        let err = evaluate(&catalog, lion_den, "lion", i64::MAX).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InsufficientSpace);

        // Same layering for a herbivore, which also pays the surcharge.
        let err = evaluate(&catalog, &catalog.enclosures()[2], "gazelle", i64::MAX).unwrap_err();
        assert_eq!(err.reason(), ViolationReason::InsufficientSpace);
    }
}
