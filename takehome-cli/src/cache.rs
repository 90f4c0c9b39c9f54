//! In-memory cache of take-home results, keyed by the full calculation
//! input.
//!
//! Entries expire after a fixed age and the oldest entry is evicted once
//! the cache is full. The caller supplies the current time, which keeps
//! expiry deterministic under test.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use takehome_core::{TakeHomeInput, TaxCalculationResult};
use tracing::debug;

use crate::config::CacheConfig;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: TaxCalculationResult,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ResultCache {
    entries: HashMap<TakeHomeInput, CacheEntry>,
    max_entries: usize,
    max_age: Duration,
}

impl ResultCache {
    pub fn new(
        max_entries: usize,
        max_age: Duration,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            max_age,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.max_age())
    }

    /// Returns the cached result for `input` if it is not older than the
    /// maximum age. An expired entry is removed.
    pub fn get(
        &mut self,
        input: &TakeHomeInput,
        now: DateTime<Utc>,
    ) -> Option<TaxCalculationResult> {
        let entry = self.entries.get(input)?;
        if now - entry.stored_at > self.max_age {
            debug!(salary = %input.salary, state_code = %input.state_code, "cache entry expired");
            self.entries.remove(input);
            return None;
        }
        Some(entry.result.clone())
    }

    /// Stores `result`, replacing any previous entry for the same input and
    /// evicting the oldest entries while over capacity.
    pub fn insert(
        &mut self,
        input: TakeHomeInput,
        result: TaxCalculationResult,
        now: DateTime<Utc>,
    ) {
        self.entries.insert(
            input,
            CacheEntry {
                result,
                stored_at: now,
            },
        );

        while self.entries.len() > self.max_entries {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            debug!(salary = %oldest.salary, "evicting oldest cache entry");
            self.entries.remove(&oldest);
        }
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn prune(
        &mut self,
        now: DateTime<Utc>,
    ) -> usize {
        let before = self.entries.len();
        let max_age = self.max_age;
        self.entries
            .retain(|_, entry| now - entry.stored_at <= max_age);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use takehome_core::{FilingStatus, calculate_take_home};

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn input(salary: Decimal) -> TakeHomeInput {
        TakeHomeInput::new(salary, FilingStatus::Single, "TX")
    }

    fn cached(
        cache: &mut ResultCache,
        salary: Decimal,
        at: DateTime<Utc>,
    ) {
        let input = input(salary);
        let result = calculate_take_home(&input).unwrap();
        cache.insert(input, result, at);
    }

    #[test]
    fn hit_returns_stored_result() {
        let mut cache = ResultCache::default();
        cached(&mut cache, dec!(100000), start());

        let hit = cache.get(&input(dec!(100000)), start() + Duration::hours(1));

        assert_eq!(hit.map(|r| r.monthly_net_income), Some(dec!(6286)));
    }

    #[test]
    fn key_includes_state_and_status() {
        let mut cache = ResultCache::default();
        cached(&mut cache, dec!(100000), start());

        let other_state = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "CA");
        let other_status = TakeHomeInput::new(dec!(100000), FilingStatus::MarriedJoint, "TX");

        assert!(cache.get(&other_state, start()).is_none());
        assert!(cache.get(&other_status, start()).is_none());
    }

    #[test]
    fn entry_expires_after_max_age() {
        let mut cache = ResultCache::new(10, Duration::hours(24));
        cached(&mut cache, dec!(100000), start());

        assert!(cache.get(&input(dec!(100000)), start() + Duration::hours(24)).is_some());
        assert!(
            cache
                .get(&input(dec!(100000)), start() + Duration::hours(24) + Duration::seconds(1))
                .is_none()
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn oldest_entry_is_evicted_when_full() {
        let mut cache = ResultCache::new(2, Duration::hours(24));
        cached(&mut cache, dec!(50000), start());
        cached(&mut cache, dec!(60000), start() + Duration::minutes(1));
        cached(&mut cache, dec!(70000), start() + Duration::minutes(2));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&input(dec!(50000)), start()).is_none());
        assert!(cache.get(&input(dec!(60000)), start()).is_some());
        assert!(cache.get(&input(dec!(70000)), start()).is_some());
    }

    #[test]
    fn reinserting_refreshes_timestamp() {
        let mut cache = ResultCache::new(2, Duration::hours(24));
        cached(&mut cache, dec!(50000), start());
        cached(&mut cache, dec!(60000), start() + Duration::minutes(1));
        cached(&mut cache, dec!(50000), start() + Duration::minutes(2));
        cached(&mut cache, dec!(70000), start() + Duration::minutes(3));

        assert!(cache.get(&input(dec!(50000)), start()).is_some());
        assert!(cache.get(&input(dec!(60000)), start()).is_none());
    }

    #[test]
    fn prune_removes_only_expired_entries() {
        let mut cache = ResultCache::new(10, Duration::hours(1));
        cached(&mut cache, dec!(50000), start());
        cached(&mut cache, dec!(60000), start() + Duration::minutes(90));

        let removed = cache.prune(start() + Duration::minutes(100));

        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = ResultCache::default();
        cached(&mut cache, dec!(50000), start());
        cache.clear();

        assert!(cache.is_empty());
    }
}
