//! Knowledge base over the loaded equipment and maintenance records
//!
//! The knowledge base owns both collections for the lifetime of the process.
//! It is built once (from the configured files, or from records supplied by
//! the caller) and is read-only afterwards, so it can be shared across threads
//! without locking.

use crate::app::models::{Equipment, MaintenanceLog};
use crate::{Error, Result};
use std::collections::HashMap;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{KnowledgeInfo, LoadStats};
pub use query::SearchResults;

/// Read-only store of equipment and maintenance records
///
/// Equipment is indexed by equipment_id for O(1) lookups; both collections
/// keep their source order for listing, search and export.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    /// Equipment in source order
    pub(crate) equipment: Vec<Equipment>,

    /// Maintenance logs in source order
    pub(crate) maintenance: Vec<MaintenanceLog>,

    /// equipment_id -> position in `equipment`
    pub(crate) equipment_index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Build a knowledge base from already-loaded records
    ///
    /// # Errors
    /// * Returns `Error::Validation` if a record fails validation or an
    ///   equipment_id appears more than once
    pub fn from_records(
        equipment: Vec<Equipment>,
        maintenance: Vec<MaintenanceLog>,
    ) -> Result<Self> {
        let mut equipment_index = HashMap::with_capacity(equipment.len());

        for (position, item) in equipment.iter().enumerate() {
            item.validate()?;

            if equipment_index
                .insert(item.equipment_id.clone(), position)
                .is_some()
            {
                return Err(Error::validation(
                    format!("equipment {}", position),
                    "equipment_id",
                    format!("duplicate identifier '{}'", item.equipment_id),
                ));
            }
        }

        for log in &maintenance {
            log.validate()?;
        }

        Ok(Self {
            equipment,
            maintenance,
            equipment_index,
        })
    }

    /// Number of equipment records
    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    /// Number of maintenance logs
    pub fn maintenance_count(&self) -> usize {
        self.maintenance.len()
    }

    /// Check if an equipment identifier is known
    pub fn contains_equipment(&self, equipment_id: &str) -> bool {
        self.equipment_index.contains_key(equipment_id)
    }
}
