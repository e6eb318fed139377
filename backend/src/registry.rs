//! Range-keyed generator registry
//!
//! Hands out one [`TunedRng`] per inclusive output range. Generators are
//! built from the persisted tuning record for their range when one exists,
//! otherwise from a synthesized default record, and then live as long as the
//! registry. Entries are never evicted.
//!
//! # Concurrency
//!
//! - The range map sits behind its own mutex, held only for lookup and
//!   insertion. Generators are built with the map unlocked, so a slow build
//!   (a shift-pair search) never stalls lookups of other ranges.
//! - Concurrent first requests for one range may each build a generator;
//!   the first insertion wins and every caller gets that instance.
//! - Each generator is wrapped in its own mutex ([`SharedRng`]); draws on one
//!   instance are serialized, draws on different instances are not.
//! - A poisoned lock is recovered rather than propagated, so
//!   [`InstanceRegistry::get_instance`] cannot fail.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::RegistryConfig;
use crate::events::{EventLog, RecordSource, RegistryEvent};
use crate::rng::{clock_seed, TunedRng};
use crate::store::{MemoryTuneStore, TuneStore};
use crate::tuning::{RangeKey, TuneResult};

/// Generator handle shared between callers of one range
pub type SharedRng = Arc<Mutex<TunedRng>>;

/// Process-wide generator registry
///
/// Construct once at startup and pass by reference to code that needs
/// range-scoped generators.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tuned_rng_core_rs::{BitSource, InstanceRegistry};
///
/// let registry = InstanceRegistry::empty();
/// let dice = registry.get_instance(1..=6);
/// let again = registry.get_instance(1..=6);
/// assert!(Arc::ptr_eq(&dice, &again));
///
/// let roll = dice.lock().unwrap().next_int_range(1, 7).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub struct InstanceRegistry {
    store: Box<dyn TuneStore>,
    config: RegistryConfig,
    seed_source: fn() -> i64,
    records: OnceLock<HashMap<RangeKey, TuneResult>>,
    instances: Mutex<HashMap<RangeKey, SharedRng>>,
    events: Mutex<EventLog>,
}

impl InstanceRegistry {
    /// Registry backed by `store`, read lazily on first use
    pub fn new(store: impl TuneStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            config: RegistryConfig::default(),
            seed_source: clock_seed,
            records: OnceLock::new(),
            instances: Mutex::new(HashMap::new()),
            events: Mutex::new(EventLog::new()),
        }
    }

    /// Registry with no persisted records
    pub fn empty() -> Self {
        Self::new(MemoryTuneStore::new())
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the clock as the seed source for synthesized records
    pub fn with_seed_source(mut self, seed_source: fn() -> i64) -> Self {
        self.seed_source = seed_source;
        self
    }

    /// Build a generator for every persisted record
    ///
    /// Ranges that already have a generator keep it. Returns the number of
    /// generators created.
    pub fn preload_instances(&self) -> usize {
        let records = self.records();

        let mut ranges: Vec<&RangeKey> = records.keys().collect();
        ranges.sort();

        let mut created = 0;
        for range in ranges {
            if lock(&self.instances).contains_key(range) {
                continue;
            }
            let record = records[range];
            let (_, inserted) = self.insert_built(*range, record.build());
            if !inserted {
                continue;
            }
            self.log(RegistryEvent::Preloaded {
                range: *range,
                seed: record.seed,
                increment: record.increment,
                score: record.score,
            });
            created += 1;
        }
        created
    }

    /// Generator for `range`, created on first request
    ///
    /// Repeated calls for the same range return the same generator, so its
    /// sequence continues rather than restarting.
    pub fn get_instance(&self, range: impl Into<RangeKey>) -> SharedRng {
        let range = range.into();
        if let Some(existing) = lock(&self.instances).get(&range) {
            return Arc::clone(existing);
        }

        let (record, source) = match self.records().get(&range) {
            Some(record) => (*record, RecordSource::Store),
            None => (self.default_record(), RecordSource::Default),
        };

        let rng = record.build();
        let shift_pair = rng.shift_pair();
        let (shared, inserted) = self.insert_built(range, rng);
        if inserted {
            self.log(RegistryEvent::Created {
                range,
                shift_pair,
                source,
            });
        }
        shared
    }

    pub fn contains(&self, range: impl Into<RangeKey>) -> bool {
        lock(&self.instances).contains_key(&range.into())
    }

    /// Number of live generators
    pub fn len(&self) -> usize {
        lock(&self.instances).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.instances).is_empty()
    }

    /// Snapshot of the event log
    pub fn events(&self) -> EventLog {
        lock(&self.events).clone()
    }

    /// Insert `rng` unless another caller got there first
    fn insert_built(&self, range: RangeKey, rng: TunedRng) -> (SharedRng, bool) {
        let mut instances = lock(&self.instances);
        let mut inserted = false;
        let shared = instances.entry(range).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(rng))
        });
        (Arc::clone(shared), inserted)
    }

    fn default_record(&self) -> TuneResult {
        TuneResult::unscored(
            (self.seed_source)(),
            self.config.default_increment,
            self.config.default_shift_pair,
        )
    }

    fn records(&self) -> &HashMap<RangeKey, TuneResult> {
        self.records.get_or_init(|| match self.store.load() {
            Ok(records) => {
                self.log(RegistryEvent::StoreLoaded {
                    entries: records.len(),
                });
                records
            }
            Err(e) => {
                self.log(RegistryEvent::StoreLoadFailed {
                    reason: e.to_string(),
                });
                HashMap::new()
            }
        })
    }

    fn log(&self, event: RegistryEvent) {
        lock(&self.events).log(event);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
