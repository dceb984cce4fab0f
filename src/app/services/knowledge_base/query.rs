//! Listing, lookup and free-text search over the knowledge base

use super::KnowledgeBase;
use crate::app::models::{Equipment, MaintenanceLog};
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Records matching a free-text query
///
/// Matches borrow from the knowledge base and keep collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    /// Query as supplied by the caller
    pub query: String,

    pub equipment_matches: Vec<&'a Equipment>,

    pub maintenance_matches: Vec<&'a MaintenanceLog>,
}

impl SearchResults<'_> {
    /// Total number of matching records across both collections
    pub fn total_matches(&self) -> usize {
        self.equipment_matches.len() + self.maintenance_matches.len()
    }
}

impl KnowledgeBase {
    /// All equipment in source order
    ///
    /// # Errors
    /// * Returns `Error::NotFound` if no equipment was loaded
    pub fn all_equipment(&self) -> Result<&[Equipment]> {
        if self.equipment.is_empty() {
            return Err(Error::not_found("No equipment data found"));
        }
        Ok(&self.equipment)
    }

    /// All maintenance logs in source order
    ///
    /// # Errors
    /// * Returns `Error::NotFound` if no maintenance logs were loaded
    pub fn all_maintenance(&self) -> Result<&[MaintenanceLog]> {
        if self.maintenance.is_empty() {
            return Err(Error::not_found("No maintenance logs found"));
        }
        Ok(&self.maintenance)
    }

    /// Look up a single equipment record by identifier
    pub fn equipment(&self, equipment_id: &str) -> Result<&Equipment> {
        self.equipment_index
            .get(equipment_id)
            .map(|&position| &self.equipment[position])
            .ok_or_else(|| Error::not_found(format!("Equipment '{}'", equipment_id)))
    }

    /// Maintenance history of one piece of equipment, in source order
    ///
    /// Logs may reference identifiers missing from the inventory, so an unknown
    /// identifier can still have history; an empty result is not an error.
    pub fn maintenance_for(&self, equipment_id: &str) -> Vec<&MaintenanceLog> {
        self.maintenance
            .iter()
            .filter(|log| log.equipment_id == equipment_id)
            .collect()
    }

    /// Case-insensitive substring search across both collections
    ///
    /// Equipment is matched on id, model, type and location; maintenance logs
    /// on equipment id and maintenance type. The query is trimmed first, so a
    /// blank query matches every record.
    ///
    /// # Errors
    /// * Returns `Error::NotFound` if neither collection has a match
    pub fn search(&self, query: &str) -> Result<SearchResults<'_>> {
        let needle = query.trim().to_lowercase();

        let equipment_matches: Vec<&Equipment> = self
            .equipment
            .iter()
            .filter(|e| {
                [&e.equipment_id, &e.model, &e.equipment_type, &e.location]
                    .iter()
                    .any(|field| contains_folded(field, &needle))
            })
            .collect();

        let maintenance_matches: Vec<&MaintenanceLog> = self
            .maintenance
            .iter()
            .filter(|m| {
                contains_folded(&m.equipment_id, &needle)
                    || contains_folded(&m.maintenance_type, &needle)
            })
            .collect();

        debug!(
            "Search '{}' matched {} equipment and {} maintenance records",
            query,
            equipment_matches.len(),
            maintenance_matches.len()
        );

        if equipment_matches.is_empty() && maintenance_matches.is_empty() {
            return Err(Error::not_found(format!("No results for query '{}'", query)));
        }

        Ok(SearchResults {
            query: query.to_string(),
            equipment_matches,
            maintenance_matches,
        })
    }
}

/// Substring test against an already lower-cased needle
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
