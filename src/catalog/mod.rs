//! The zoo catalog: species and enclosure reference tables.
//!
//! A [`Catalog`] is an explicitly constructed, passed-in object. Nothing in
//! this crate keeps module-level catalog state, so tests can evaluate
//! against synthetic catalogs without touching the built-in dataset.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::models::{Enclosure, Habitat, Species};
use crate::{Error, Result};

/// Read-only reference data for one zoo: the species table and the
/// enclosure list.
///
/// Enclosures keep their declaration order; reports are produced in that
/// order. The evaluator never mutates a catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    enclosures: Vec<Enclosure>,
}

/// On-disk catalog file structure (for TOML parsing).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Species table.
    species: Vec<Species>,
    /// Enclosure list.
    enclosures: Vec<Enclosure>,
}

impl Catalog {
    /// Creates a catalog from already-validated parts.
    #[must_use]
    pub const fn new(species: Vec<Species>, enclosures: Vec<Enclosure>) -> Self {
        Self {
            species,
            enclosures,
        }
    }

    /// The built-in reference dataset: five enclosures, six species.
    ///
    /// Kept exactly as supplied, including the places where `occupied`
    /// and the resident list disagree (enclosures 1, 3 and 5). Those
    /// mismatches are part of the reference behavior.
    #[must_use]
    pub fn reference() -> Self {
        let species = vec![
            Species::new("lion", 3, vec![Habitat::Savanna], true),
            Species::new("leopard", 2, vec![Habitat::Savanna], true),
            Species::new("crocodile", 3, vec![Habitat::River], true),
            Species::new("monkey", 1, vec![Habitat::Savanna, Habitat::Forest], false),
            Species::new("gazelle", 2, vec![Habitat::Savanna], false),
            Species::new(
                "hippopotamus",
                4,
                vec![Habitat::Savanna, Habitat::River],
                false,
            ),
        ];

        let enclosures = vec![
            Enclosure::new(1, Habitat::Savanna, 10, 3, vec!["monkey".to_string()]),
            Enclosure::new(2, Habitat::Forest, 5, 0, vec![]),
            Enclosure::new(
                3,
                Habitat::SavannaAndRiver,
                7,
                1,
                vec!["gazelle".to_string()],
            ),
            Enclosure::new(4, Habitat::River, 8, 0, vec![]),
            Enclosure::new(5, Habitat::Savanna, 9, 1, vec!["lion".to_string()]),
        ];

        Self::new(species, enclosures)
    }

    /// Parses a catalog from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| Error::OperationFailed {
            operation: "parse catalog".to_string(),
            cause: e.to_string(),
        })?;

        let catalog = Self::new(file.species, file.enclosures);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads and validates a catalog from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: format!("read catalog file {}", path.display()),
            cause: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Looks up a species by its lowercase name.
    #[must_use]
    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    /// The species table in declaration order.
    #[must_use]
    pub fn species_table(&self) -> &[Species] {
        &self.species
    }

    /// The enclosures in declaration order.
    #[must_use]
    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    /// Checks structural consistency of a user-supplied catalog.
    ///
    /// `occupied > capacity` is deliberately *not* rejected: the core only
    /// ever checks that additional space fits, and the reference behavior
    /// never cross-validates the initial data.
    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for species in &self.species {
            if species.unit_size == 0 {
                return Err(Error::InvalidInput(format!(
                    "species '{}' has a zero unit size",
                    species.name
                )));
            }
            if species.habitats.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "species '{}' has no habitats",
                    species.name
                )));
            }
            if !names.insert(species.name.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate species '{}'",
                    species.name
                )));
            }
        }

        let mut ids = HashSet::new();
        for enclosure in &self.enclosures {
            if enclosure.capacity == 0 {
                return Err(Error::InvalidInput(format!(
                    "enclosure {} has a zero capacity",
                    enclosure.id
                )));
            }
            if !ids.insert(enclosure.id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate enclosure id {}",
                    enclosure.id
                )));
            }
            for resident in &enclosure.residents {
                if !names.contains(resident.as_str()) {
                    return Err(Error::InvalidInput(format!(
                        "enclosure {} houses unknown species '{resident}'",
                        enclosure.id
                    )));
                }
            }
        }

        Ok(())
    }
}
