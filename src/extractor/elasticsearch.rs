//! Search-index extractor
//!
//! Extracts index metadata from an Elasticsearch catalog and emits one
//! [`TableMetadata`] unit per index, plus optional synthetic units carrying
//! pretty-printed settings and aliases when technical-detail extraction is
//! enabled.
//!
//! The catalog is fetched exactly once, lazily, on the first pull; reserved
//! indexes (names starting with `.`) are filtered out.

use std::vec::IntoIter;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::{CatalogClient, IndexCatalog};
use crate::config::{ConfigError, ElasticsearchConfig, FetchErrorPolicy};
use crate::extractor::{ExtractError, Extractor};
use crate::models::{ColumnMetadata, TableMetadata};

/// Database label carried by every unit this extractor produces
pub const DATABASE: &str = "elasticsearch";
/// Configuration namespace of this extractor
pub const SCOPE: &str = "extractor.es_indexes";

/// Index names starting with this prefix are reserved by the search system
/// and never extracted.
const RESERVED_PREFIX: &str = ".";

const ALIASES_SOURCE: &str = "aliases";
const SETTINGS_SOURCE: &str = "settings";

/// Extractor for index metadata from a search-system catalog
pub struct EsIndexExtractor<C: CatalogClient> {
    config: ElasticsearchConfig,
    client: C,
    units: Option<IntoIter<TableMetadata>>,
}

impl<C: CatalogClient> EsIndexExtractor<C> {
    /// Create an extractor over a connected catalog client.
    ///
    /// Configuration is validated here; the catalog itself is not touched
    /// until the first [`extract`](Extractor::extract) call.
    pub fn new(config: ElasticsearchConfig, client: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            client,
            units: None,
        })
    }

    fn fetch_catalog(&self) -> Result<IndexCatalog, ExtractError> {
        match self.client.indices() {
            Ok(catalog) => {
                let filtered: IndexCatalog = catalog
                    .into_iter()
                    .filter(|(name, _)| !name.starts_with(RESERVED_PREFIX))
                    .collect();
                info!(
                    "Fetched {} indexes from cluster {}",
                    filtered.len(),
                    self.config.cluster
                );
                Ok(filtered)
            }
            Err(e) => match self.config.on_fetch_error {
                FetchErrorPolicy::Propagate => Err(ExtractError::Fetch(e)),
                FetchErrorPolicy::DegradeToEmpty => {
                    warn!("Catalog fetch failed, continuing with empty catalog: {e}");
                    Ok(IndexCatalog::new())
                }
            },
        }
    }

    fn build_units(&self, catalog: IndexCatalog) -> Vec<TableMetadata> {
        let mut units = Vec::new();

        for (name, metadata) in catalog {
            // Single document type per index; maps are ordered by arrival,
            // so the first key wins deterministically.
            let Some(mapping) = metadata.mappings.values().next() else {
                debug!("Index {name} has no mappings section, skipping");
                continue;
            };

            let columns: Vec<ColumnMetadata> = mapping
                .properties
                .iter()
                .map(|(column_name, property)| {
                    ColumnMetadata::new(
                        column_name.clone(),
                        "",
                        property.field_type.clone().unwrap_or_default(),
                        0,
                    )
                })
                .collect();

            units.push(self.unit(&name, columns.clone(), None, None));

            if self.config.extract_technical_details {
                if let Some(text) = render_details(metadata.aliases.as_ref()) {
                    units.push(self.unit(&name, columns.clone(), Some(text), Some(ALIASES_SOURCE)));
                }
                if let Some(text) = render_details(metadata.settings.as_ref()) {
                    units.push(self.unit(&name, columns, Some(text), Some(SETTINGS_SOURCE)));
                }
            }
        }

        units
    }

    fn unit(
        &self,
        name: &str,
        columns: Vec<ColumnMetadata>,
        description: Option<String>,
        description_source: Option<&str>,
    ) -> TableMetadata {
        TableMetadata {
            database: DATABASE.to_string(),
            cluster: self.config.cluster.clone(),
            schema: self.config.schema.clone(),
            name: name.to_string(),
            description,
            columns,
            is_view: false,
            tags: None,
            description_source: description_source.map(str::to_string),
        }
    }
}

impl<C: CatalogClient> Extractor for EsIndexExtractor<C> {
    type Output = TableMetadata;

    fn extract(&mut self) -> Result<Option<TableMetadata>, ExtractError> {
        if self.units.is_none() {
            let catalog = match self.fetch_catalog() {
                Ok(catalog) => catalog,
                Err(e) => {
                    // A propagated fetch failure is terminal: later pulls
                    // report exhaustion rather than retrying the source.
                    self.units = Some(Vec::new().into_iter());
                    return Err(e);
                }
            };
            self.units = Some(self.build_units(catalog).into_iter());
        }

        Ok(self.units.as_mut().and_then(Iterator::next))
    }

    fn scope(&self) -> &'static str {
        SCOPE
    }
}

/// Render a settings/aliases substructure to pretty-printed text.
///
/// Missing, null, or empty-object values produce no rendering, and therefore
/// no synthetic unit.
fn render_details(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        value => serde_json::to_string_pretty(value).ok(),
    }
}
