//! One-time knowledge base loading from the configured sources

use super::KnowledgeBase;
use super::metadata::LoadStats;
use crate::Result;
use crate::app::services::record_loader::{load_equipment, load_maintenance};
use crate::config::Config;
use std::time::Instant;
use tracing::info;

impl KnowledgeBase {
    /// Load both record sources named by the configuration
    ///
    /// Loading is fail-fast: the first invalid record in either source aborts
    /// the whole load, and the caller is expected to stop rather than serve
    /// partial data.
    ///
    /// # Returns
    /// * `Result<(KnowledgeBase, LoadStats)>` - Knowledge base and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::Io` if a source file is missing or unreadable
    /// * Returns `Error::Polars` / `Error::Json` for malformed sources
    /// * Returns `Error::Validation` for the first invalid record
    pub fn load(config: &Config) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();

        let equipment_path = config.data.equipment_path();
        let maintenance_path = config.data.maintenance_path();

        let equipment = load_equipment(&equipment_path, &config.loader)?;
        let maintenance = load_maintenance(&maintenance_path)?;

        let stats = LoadStats {
            equipment_path,
            maintenance_path,
            equipment_loaded: equipment.len(),
            maintenance_loaded: maintenance.len(),
            load_duration: start_time.elapsed(),
        };

        let knowledge_base = Self::from_records(equipment, maintenance)?;

        info!("{}", stats.summary());
        Ok((knowledge_base, stats))
    }
}
