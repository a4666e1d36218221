//! The resident comfort rule.

use crate::models::Enclosure;

/// The social species: never comfortable as the lone resident of an
/// enclosure.
pub const SOCIAL_SPECIES: &str = "monkey";

/// Returns true if `resident` would remain comfortable when other animals
/// are added to `enclosure`.
///
/// One hard-coded behavioral rule: a monkey is not comfortable if it is
/// currently the only resident (resident list length exactly 1). Every
/// other species, and every other situation, is comfortable. The incoming
/// candidate and quantity play no part.
///
/// Known sharp edge, inherited from the reference behavior: only the
/// *length* of the resident list is inspected, never which species
/// actually occupies the single slot. A caller iterating over a resident
/// name of `"monkey"` against a list whose one entry is some other species
/// still reports discomfort. Preserved as-is; reconciling it would change
/// outcomes.
#[must_use]
pub fn is_comfortable(enclosure: &Enclosure, resident: &str) -> bool {
    !(resident == SOCIAL_SPECIES && enclosure.residents.len() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habitat;

    fn enclosure_with(residents: &[&str]) -> Enclosure {
        Enclosure::new(
            1,
            Habitat::Savanna,
            10,
            0,
            residents.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn test_lone_monkey_is_uncomfortable() {
        let enclosure = enclosure_with(&["monkey"]);
        assert!(!is_comfortable(&enclosure, "monkey"));
    }

    #[test]
    fn test_monkey_with_company_is_comfortable() {
        let enclosure = enclosure_with(&["monkey", "gazelle"]);
        assert!(is_comfortable(&enclosure, "monkey"));

        let enclosure = enclosure_with(&["monkey", "monkey"]);
        assert!(is_comfortable(&enclosure, "monkey"));
    }

    #[test]
    fn test_other_species_always_comfortable() {
        let enclosure = enclosure_with(&["gazelle"]);
        assert!(is_comfortable(&enclosure, "gazelle"));

        let enclosure = enclosure_with(&["lion"]);
        assert!(is_comfortable(&enclosure, "lion"));
    }

    #[test]
    fn test_length_only_sharp_edge() {
        // The single slot is a gazelle, yet asking about "monkey" still
        // reports discomfort. Inherited reference behavior.
        let enclosure = enclosure_with(&["gazelle"]);
        assert!(!is_comfortable(&enclosure, "monkey"));
    }
}
