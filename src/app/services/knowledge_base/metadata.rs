//! Knowledge base metadata and load statistics
//!
//! This module extracts the distinct-value summaries served by the info
//! operation and records what a load produced.

use super::KnowledgeBase;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Distinct values across the loaded records, each sorted ordinally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeInfo {
    /// Distinct (equipment_id, equipment_type) pairs, sorted by id then type
    pub unique_equipment_models: Vec<(String, String)>,

    /// Distinct equipment locations
    pub unique_locations: Vec<String>,

    /// Distinct maintenance types
    pub maintenance_types: Vec<String>,
}

impl KnowledgeBase {
    /// Summarise distinct equipment models, locations and maintenance types
    ///
    /// Never fails; empty collections give empty lists.
    pub fn info(&self) -> KnowledgeInfo {
        KnowledgeInfo {
            unique_equipment_models: self.equipment_models(),
            unique_locations: self.locations(),
            maintenance_types: self.maintenance_types(),
        }
    }

    /// Sorted distinct (equipment_id, equipment_type) pairs
    pub fn equipment_models(&self) -> Vec<(String, String)> {
        self.equipment
            .iter()
            .map(|e| (e.equipment_id.clone(), e.equipment_type.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct equipment locations
    pub fn locations(&self) -> Vec<String> {
        self.equipment
            .iter()
            .map(|e| e.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct maintenance types
    pub fn maintenance_types(&self) -> Vec<String> {
        self.maintenance
            .iter()
            .map(|m| m.maintenance_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Statistics about a knowledge base load
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Equipment source that was read
    pub equipment_path: PathBuf,

    /// Maintenance source that was read
    pub maintenance_path: PathBuf,

    pub equipment_loaded: usize,

    pub maintenance_loaded: usize,

    /// Time taken to read and validate both sources
    pub load_duration: Duration,
}

impl LoadStats {
    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} equipment records from {} and {} maintenance logs from {} in {:.2}s",
            self.equipment_loaded,
            self.equipment_path.display(),
            self.maintenance_loaded,
            self.maintenance_path.display(),
            self.load_duration.as_secs_f64()
        )
    }
}
