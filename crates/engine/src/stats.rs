use crate::options::{MachineType, Rounding};
use hashbrown::HashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Machine counts for a single user, keyed by normalized machine type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineTally {
    counts: HashMap<MachineType, u64>,
}

impl MachineTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, kind: MachineType) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Occurrences of `kind`, zero when absent.
    pub fn count(&self, kind: &MachineType) -> u64 {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn desktops(&self) -> u64 {
        self.count(&MachineType::Desktop)
    }

    pub fn laptops(&self) -> u64 {
        self.count(&MachineType::Laptop)
    }

    /// Counts for every type outside the license policy, sorted by key.
    pub fn other(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .filter_map(|(kind, n)| match kind {
                MachineType::Other(key) => Some((key.clone(), *n)),
                _ => None,
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MachineType, u64)> {
        self.counts.iter().map(|(k, n)| (k, *n))
    }
}

impl<const N: usize> From<[(MachineType, u64); N]> for MachineTally {
    fn from(entries: [(MachineType, u64); N]) -> Self {
        Self {
            counts: entries.into_iter().collect(),
        }
    }
}

/// Per-user tally produced by a single parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    users: HashMap<String, MachineTally>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, user_id: &str, kind: MachineType) {
        self.users
            .entry_ref(user_id)
            .or_insert_with(MachineTally::new)
            .increment(kind);
    }

    pub fn insert(&mut self, user_id: impl Into<String>, machines: MachineTally) {
        self.users.insert(user_id.into(), machines);
    }

    pub fn get(&self, user_id: &str) -> Option<&MachineTally> {
        self.users.get(user_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MachineTally)> {
        self.users.iter().map(|(user, tally)| (user.as_str(), tally))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// License requirement for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLicenses {
    pub user_id: String,
    pub desktops: u64,
    pub laptops: u64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub other: BTreeMap<String, u64>,
    pub licenses: u64,
}

/// Outcome of a full run: per-user breakdown sorted by user ID plus the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseReport {
    pub app_id: String,
    pub rounding: Rounding,
    pub users: Vec<UserLicenses>,
    pub total_licenses: u64,
}
