//! Reference Data Store
//!
//! Five ID-to-name catalogs, bootstrapped concurrently at startup and
//! immutable afterwards. The handle is cheap to clone and legal to read
//! before bootstrap completes: a catalog that has not landed yet simply
//! misses, and formatters degrade to showing the raw ID.

pub mod aliases;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::domain::entities::{CatalogEntry, CatalogKind};
use crate::ports::CatalogService;

type Catalog = HashMap<u32, CatalogEntry>;

#[derive(Default)]
struct Catalogs {
    champions: OnceLock<Catalog>,
    items: OnceLock<Catalog>,
    masteries: OnceLock<Catalog>,
    runes: OnceLock<Catalog>,
    summoner_spells: OnceLock<Catalog>,
}

/// Shared, read-mostly handle over the reference catalogs.
///
/// Owned by the startup task and passed explicitly into every consumer.
#[derive(Clone, Default)]
pub struct StaticDataHandle {
    inner: Arc<Catalogs>,
}

impl StaticDataHandle {
    /// A handle with every catalog still unpopulated.
    pub fn empty() -> Self {
        Self::default()
    }

    fn slot(&self, kind: CatalogKind) -> &OnceLock<Catalog> {
        match kind {
            CatalogKind::Champions => &self.inner.champions,
            CatalogKind::Items => &self.inner.items,
            CatalogKind::Masteries => &self.inner.masteries,
            CatalogKind::Runes => &self.inner.runes,
            CatalogKind::SummonerSpells => &self.inner.summoner_spells,
        }
    }

    /// Populate every catalog from the bulk service, all five concurrently.
    ///
    /// The store counts as ready once all fetches have completed, but a
    /// failed fetch only logs: the affected catalog stays empty and lookups
    /// against it miss.
    pub async fn bootstrap(&self, service: &dyn CatalogService) {
        tokio::join!(
            self.populate(service, CatalogKind::Champions),
            self.populate(service, CatalogKind::Items),
            self.populate(service, CatalogKind::Masteries),
            self.populate(service, CatalogKind::Runes),
            self.populate(service, CatalogKind::SummonerSpells),
        );
        info!("reference data bootstrap finished");
    }

    async fn populate(&self, service: &dyn CatalogService, kind: CatalogKind) {
        match service.fetch(kind).await {
            Ok(catalog) => {
                let entries = catalog.len();
                if self.slot(kind).set(catalog).is_err() {
                    warn!(catalog = %kind, "catalog was already populated");
                } else {
                    info!(catalog = %kind, entries, "catalog loaded");
                }
            }
            Err(e) => {
                warn!(catalog = %kind, error = %e, "catalog fetch failed, lookups will miss");
            }
        }
    }

    /// Insert a prebuilt catalog. Intended for tests and fixtures.
    pub fn load(&self, kind: CatalogKind, catalog: Catalog) {
        let _ = self.slot(kind).set(catalog);
    }

    /// Look an entry up by ID. Misses when the ID is unknown or the catalog
    /// has not been populated yet.
    pub fn lookup(&self, kind: CatalogKind, id: u32) -> Option<&CatalogEntry> {
        self.slot(kind).get()?.get(&id)
    }

    /// Display name for an ID, if known.
    pub fn name_of(&self, kind: CatalogKind, id: u32) -> Option<&str> {
        self.lookup(kind, id).map(|e| e.name.as_str())
    }

    /// Reverse lookup by short code, case-insensitive, first match wins.
    pub fn find_by_key(&self, kind: CatalogKind, key: &str) -> Option<&CatalogEntry> {
        self.slot(kind)
            .get()?
            .values()
            .find(|e| e.key.eq_ignore_ascii_case(key))
    }
}
