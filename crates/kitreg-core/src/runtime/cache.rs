//! Lazy, memoized component tables.
//!
//! Each kit owns one [`RegistryLoader`]. The first access starts a
//! population run on its own task; callers arriving while it runs share
//! that run's outcome. A successful run is kept for the life of the process.
//! A failed run leaves the loader unloaded so the next access retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tracing::{debug, info, warn};

use crate::error::{RegistryError, Result};
use crate::types::{ComponentData, ComponentMeta};

/// Immutable, ordered set of components keyed by name
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    entries: Vec<ComponentData>,
    index: HashMap<String, usize>,
}

impl ComponentTable {
    /// Build a table keeping the first record for each name
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ComponentData>,
    {
        let mut table = Self::default();
        for record in records {
            if table.index.contains_key(record.name()) {
                warn!("Ignoring duplicate component '{}'", record.name());
                continue;
            }
            table
                .index
                .insert(record.name().to_string(), table.entries.len());
            table.entries.push(record);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentData> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn metas(&self) -> Vec<ComponentMeta> {
        self.entries.iter().map(|c| c.metadata.clone()).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ComponentData::name)
    }
}

/// Something that can build a kit's component table from scratch
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn populate(&self) -> Result<ComponentTable>;
}

type PopulationRun = Shared<BoxFuture<'static, Result<Arc<ComponentTable>>>>;

enum Phase {
    Unloaded,
    Loading { generation: u64, run: PopulationRun },
    Loaded(Arc<ComponentTable>),
}

struct Slot {
    phase: Phase,
    runs: u64,
}

struct LoaderInner {
    kit: String,
    source: Arc<dyn TableSource>,
    slot: Mutex<Slot>,
}

impl LoaderInner {
    // The slot is never held across an await, so a poisoned lock still
    // holds a consistent phase.
    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, generation: u64, outcome: &Result<Arc<ComponentTable>>) {
        let mut slot = self.lock_slot();
        if !matches!(&slot.phase, Phase::Loading { generation: g, .. } if *g == generation) {
            return;
        }
        slot.phase = match outcome {
            Ok(table) => {
                info!(kit = %self.kit, components = table.len(), "Kit registry loaded");
                Phase::Loaded(Arc::clone(table))
            }
            Err(e) => {
                warn!(kit = %self.kit, error = %e, "Kit population failed, will retry on next access");
                Phase::Unloaded
            }
        };
    }
}

/// Per-kit lazy cache enforcing at most one in-flight population
#[derive(Clone)]
pub struct RegistryLoader {
    inner: Arc<LoaderInner>,
}

impl RegistryLoader {
    pub fn new(kit: impl Into<String>, source: Arc<dyn TableSource>) -> Self {
        Self {
            inner: Arc::new(LoaderInner {
                kit: kit.into(),
                source,
                slot: Mutex::new(Slot {
                    phase: Phase::Unloaded,
                    runs: 0,
                }),
            }),
        }
    }

    pub fn kit(&self) -> &str {
        &self.inner.kit
    }

    /// Return the kit's table, populating it first if needed.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn load(&self) -> Result<Arc<ComponentTable>> {
        let run = {
            let mut slot = self.inner.lock_slot();
            let joined = match &slot.phase {
                Phase::Loaded(table) => return Ok(Arc::clone(table)),
                Phase::Loading { run, .. } => Some(run.clone()),
                Phase::Unloaded => None,
            };
            match joined {
                Some(run) => {
                    debug!(kit = %self.inner.kit, "Joining in-flight population");
                    run
                }
                None => {
                    slot.runs += 1;
                    let generation = slot.runs;
                    let run = self.spawn_population(generation);
                    slot.phase = Phase::Loading {
                        generation,
                        run: run.clone(),
                    };
                    run
                }
            }
        };
        run.await
    }

    /// Whether a successful population has completed
    pub fn is_loaded(&self) -> bool {
        matches!(self.inner.lock_slot().phase, Phase::Loaded(_))
    }

    /// Number of population runs started so far
    pub fn population_runs(&self) -> u64 {
        self.inner.lock_slot().runs
    }

    // The run lives on its own task so it completes even when every caller
    // waiting on it has gone away.
    fn spawn_population(&self, generation: u64) -> PopulationRun {
        info!(kit = %self.inner.kit, run = generation, "Populating kit registry");

        let task_inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let outcome = task_inner.source.populate().await.map(Arc::new);
            task_inner.settle(generation, &outcome);
            outcome
        });

        let inner = Arc::clone(&self.inner);
        handle
            .map(move |joined| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    let outcome = Err(RegistryError::PopulationFailed {
                        kit: inner.kit.clone(),
                        reason: format!("population task aborted: {}", e),
                    });
                    inner.settle(generation, &outcome);
                    outcome
                }
            })
            .boxed()
            .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: usize,
        delay: Duration,
    }

    impl CountingSource {
        fn new(fail_first: usize, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_first,
                delay,
            })
        }
    }

    #[async_trait]
    impl TableSource for CountingSource {
        async fn populate(&self) -> Result<ComponentTable> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if call < self.fail_first {
                return Err(RegistryError::PopulationFailed {
                    kit: "test".into(),
                    reason: "source offline".into(),
                });
            }
            Ok(ComponentTable::from_records([
                ComponentData::from_source("button", "<button/>"),
                ComponentData::from_source("card", "<div/>"),
            ]))
        }
    }

    #[test]
    fn test_table_keeps_order_and_first_duplicate() {
        let table = ComponentTable::from_records([
            ComponentData::from_source("b", "first"),
            ComponentData::from_source("a", "a"),
            ComponentData::from_source("b", "second"),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(table.get("b").unwrap().code.tsx, "first");
        assert!(table.get("c").is_none());
    }

    #[tokio::test]
    async fn test_load_is_memoized() {
        let source = CountingSource::new(0, Duration::ZERO);
        let loader = RegistryLoader::new("test", source.clone());

        assert!(!loader.is_loaded());
        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(loader.is_loaded());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(loader.population_runs(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_run() {
        let source = CountingSource::new(0, Duration::from_millis(50));
        let loader = RegistryLoader::new("test", source.clone());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let loader = loader.clone();
                tokio::spawn(async move { loader.load().await })
            })
            .collect();

        let mut tables = Vec::new();
        for task in tasks {
            tables.push(task.await.unwrap().unwrap());
        }

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(tables.iter().all(|t| Arc::ptr_eq(t, &tables[0])));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_failure() {
        let source = CountingSource::new(1, Duration::from_millis(50));
        let loader = RegistryLoader::new("test", source.clone());

        let (a, b) = tokio::join!(loader.load(), loader.load());

        assert!(a.is_err());
        assert!(b.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!loader.is_loaded());
    }

    #[tokio::test]
    async fn test_failure_is_retried_on_next_access() {
        let source = CountingSource::new(1, Duration::ZERO);
        let loader = RegistryLoader::new("test", source.clone());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, RegistryError::PopulationFailed { .. }));
        assert!(!loader.is_loaded());

        let table = loader.load().await.unwrap();
        assert_eq!(table.len(), 2);
        assert!(loader.is_loaded());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(loader.population_runs(), 2);
    }

    #[tokio::test]
    async fn test_run_completes_when_caller_goes_away() {
        let source = CountingSource::new(0, Duration::from_millis(30));
        let loader = RegistryLoader::new("test", source.clone());

        let abandoned = tokio::time::timeout(Duration::from_millis(1), loader.load()).await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(loader.is_loaded());

        loader.load().await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
