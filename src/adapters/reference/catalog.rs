//! Reference Catalog - Holds the current reference data generation.
//!
//! Renders take an `Arc` snapshot and keep it for their whole duration.
//! A reload builds and validates the next snapshot before swapping it in,
//! so no render ever sees a partially updated table.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ReferenceDataSource, ReferenceSnapshot, SourceError};

/// Current reference data plus the source it reloads from
#[derive(Clone)]
pub struct ReferenceCatalog {
    source: Arc<dyn ReferenceDataSource>,
    current: Arc<RwLock<Arc<ReferenceSnapshot>>>,
}

impl ReferenceCatalog {
    /// Load and validate the first generation
    ///
    /// # Errors
    /// Returns `SourceError` if loading or validation fails.
    pub async fn open(source: Arc<dyn ReferenceDataSource>) -> Result<Self, SourceError> {
        let snapshot = Self::load_snapshot(source.as_ref()).await?;
        Ok(Self {
            source,
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        })
    }

    /// The current generation
    pub async fn snapshot(&self) -> Arc<ReferenceSnapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Reload from the source, replacing the current generation only if the
    /// new data is valid
    ///
    /// # Errors
    /// Returns `SourceError` if loading or validation fails; the previous
    /// generation stays current.
    pub async fn reload(&self) -> Result<Arc<ReferenceSnapshot>, SourceError> {
        let snapshot = match Self::load_snapshot(self.source.as_ref()).await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    "Reference data reload rejected, keeping current generation: {}",
                    e
                );
                return Err(e);
            }
        };

        let mut current = self.current.write().await;
        if current.fingerprint == snapshot.fingerprint {
            tracing::debug!(
                fingerprint = %snapshot.short_fingerprint(),
                "Reference data unchanged"
            );
            return Ok(Arc::clone(&*current));
        }

        *current = Arc::clone(&snapshot);
        tracing::info!(
            fingerprint = %snapshot.short_fingerprint(),
            "Reference data replaced"
        );
        Ok(snapshot)
    }

    /// Description of the backing source
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    async fn load_snapshot(
        source: &dyn ReferenceDataSource,
    ) -> Result<ReferenceSnapshot, SourceError> {
        let data = source.load().await?;
        let snapshot = ReferenceSnapshot::new(data)?;

        for (customer, archetype) in snapshot.data.dangling_hints() {
            tracing::warn!(
                customer,
                archetype,
                "Hint names an undefined archetype; default archetype will be used"
            );
        }
        tracing::info!(
            source = %source.describe(),
            fingerprint = %snapshot.short_fingerprint(),
            vendors = snapshot.data.vendors.names().len(),
            products = snapshot.data.products.names().len(),
            archetypes = snapshot.data.archetypes.names().len(),
            hints = snapshot.data.hints.len(),
            "Reference data loaded"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::adapters::reference::StaticReferenceSource;
    use crate::domain::reference::ReferenceData;

    /// Source whose next result can be swapped by the test
    struct ScriptedSource {
        next: Mutex<ReferenceData>,
    }

    impl ScriptedSource {
        fn new(data: ReferenceData) -> Self {
            Self {
                next: Mutex::new(data),
            }
        }

        fn set(&self, data: ReferenceData) {
            *self.next.lock().unwrap() = data;
        }
    }

    #[async_trait]
    impl ReferenceDataSource for ScriptedSource {
        async fn load(&self) -> Result<ReferenceData, SourceError> {
            Ok(self.next.lock().unwrap().clone())
        }

        fn describe(&self) -> String {
            "scripted".to_string()
        }
    }

    #[tokio::test]
    async fn open_loads_first_generation() {
        let catalog = ReferenceCatalog::open(Arc::new(StaticReferenceSource::demo()))
            .await
            .unwrap();
        let snapshot = catalog.snapshot().await;
        assert_eq!(*snapshot.data, ReferenceData::demo());
        assert_eq!(catalog.source_description(), "built-in demo");
    }

    #[tokio::test]
    async fn open_rejects_invalid_data() {
        let invalid = ReferenceData::builder().primary_vendor("Cisco").build();
        let result =
            ReferenceCatalog::open(Arc::new(StaticReferenceSource::new(invalid, "bad"))).await;
        assert!(matches!(result, Err(SourceError::Invalid(_))));
    }

    #[tokio::test]
    async fn reload_swaps_in_valid_data() {
        let source = Arc::new(ScriptedSource::new(ReferenceData::demo()));
        let catalog = ReferenceCatalog::open(source.clone()).await.unwrap();
        let before = catalog.snapshot().await;

        let mut updated = ReferenceData::demo();
        updated.hints.insert("Canara Bank", "PSU Large Bank");
        source.set(updated.clone());

        let after = catalog.reload().await.unwrap();
        assert_ne!(before.fingerprint, after.fingerprint);
        assert_eq!(*catalog.snapshot().await.data, updated);
        // A snapshot taken earlier is unaffected
        assert_eq!(*before.data, ReferenceData::demo());
    }

    #[tokio::test]
    async fn reload_keeps_previous_generation_on_invalid_data() {
        let source = Arc::new(ScriptedSource::new(ReferenceData::demo()));
        let catalog = ReferenceCatalog::open(source.clone()).await.unwrap();
        let before = catalog.snapshot().await;

        let mut broken = ReferenceData::demo();
        broken.primary_vendor = "Nobody".to_string();
        source.set(broken);

        assert!(catalog.reload().await.is_err());
        assert_eq!(catalog.snapshot().await.fingerprint, before.fingerprint);
    }

    #[tokio::test]
    async fn reload_of_unchanged_data_keeps_generation() {
        let source = Arc::new(ScriptedSource::new(ReferenceData::demo()));
        let catalog = ReferenceCatalog::open(source).await.unwrap();
        let before = catalog.snapshot().await;

        let after = catalog.reload().await.unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }
}
