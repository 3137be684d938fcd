use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Static reference data for a municipal department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub contact_email: String,
    pub average_resolution_time: String,
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Directory of departments keyed by normalized (trimmed, lowercased) name.
#[derive(Debug, Clone)]
pub struct DepartmentDirectory {
    records: HashMap<String, DepartmentRecord>,
}

impl DepartmentDirectory {
    pub fn new(records: Vec<DepartmentRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (normalize(&record.name), record))
            .collect();
        Self { records }
    }

    pub fn get(&self, normalized_name: &str) -> Option<&DepartmentRecord> {
        self.records.get(normalized_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DepartmentDirectory {
    /// Built-in municipal directory used when no external data source is
    /// wired up.
    fn default() -> Self {
        let record = |id: &str, name: &str, category: &str, email: &str, resolution: &str| {
            DepartmentRecord {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                contact_email: email.to_string(),
                average_resolution_time: resolution.to_string(),
            }
        };

        Self::new(vec![
            record(
                "dept-rta",
                "Roads & Transport Authority",
                "Infrastructure",
                "rta@dubai.gov.ae",
                "36h",
            ),
            record(
                "dept-waste",
                "Waste Management Department",
                "Sanitation",
                "waste@dubai.gov.ae",
                "16h",
            ),
            record(
                "dept-dewa",
                "Dubai Electricity & Water Authority",
                "Utilities",
                "dewa@dubai.gov.ae",
                "20h",
            ),
            record(
                "dept-cda",
                "Community Development Authority",
                "Community",
                "community@dubai.gov.ae",
                "24h",
            ),
            record(
                "dept-drainage",
                "Drainage & Irrigation",
                "Water",
                "drainage@dubai.gov.ae",
                "28h",
            ),
            record(
                "dept-traffic",
                "Traffic Management Center",
                "Mobility",
                "traffic@dubai.gov.ae",
                "18h",
            ),
            record(
                "dept-parks",
                "Parks & Recreation",
                "Environment",
                "parks@dubai.gov.ae",
                "30h",
            ),
        ])
    }
}

/// Process-lifetime cache of successful name resolutions.
///
/// Purely a performance optimization: inserts are idempotent (a name always
/// resolves to the same record), so a cache-miss race costs at most duplicate
/// work. A cold and a warm cache must produce identical routing results.
#[derive(Debug, Default)]
pub struct DirectoryCache {
    entries: Mutex<HashMap<String, DepartmentRecord>>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cached resolution. Intended for tests and reload hooks.
    pub fn reset(&self) {
        self.entries.lock().expect("cache mutex poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, normalized_name: &str) -> Option<DepartmentRecord> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .get(normalized_name)
            .cloned()
    }

    fn insert(&self, normalized_name: String, record: DepartmentRecord) {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(normalized_name, record);
    }
}

/// Resolve a department name against the directory, consulting the cache
/// first. Misses are logged and skipped, never raised.
pub(crate) fn resolve_department(
    directory: &DepartmentDirectory,
    cache: &DirectoryCache,
    name: &str,
) -> Option<DepartmentRecord> {
    let normalized = normalize(name);
    if let Some(record) = cache.get(&normalized) {
        return Some(record);
    }

    match directory.get(&normalized) {
        Some(record) => {
            cache.insert(normalized, record.clone());
            Some(record.clone())
        }
        None => {
            warn!(department = name, "department not found in directory; skipping");
            None
        }
    }
}
