use std::path::Path;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::seating::{Recommender, TableRegistry, default_catalog, load_catalog};
use crate::services::{MealSuggester, StaticMealSuggester, TheMealDbSuggester};

/// Shared server state
///
/// Cloned into every handler; all fields are cheap `Arc` clones.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | registry | floor plan with live layout overrides |
/// | recommender | ranking engine over `registry` |
/// | meal_suggester | dish suggestion source |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub registry: Arc<TableRegistry>,
    pub recommender: Arc<Recommender>,
    pub meal_suggester: Arc<dyn MealSuggester>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("tables", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl ServerState {
    pub fn new(
        config: Config,
        registry: Arc<TableRegistry>,
        meal_suggester: Arc<dyn MealSuggester>,
    ) -> Self {
        let recommender = Arc::new(Recommender::new(Arc::clone(&registry)));
        Self {
            config,
            registry,
            recommender,
            meal_suggester,
        }
    }

    /// Build state from configuration
    ///
    /// Loads the catalog (file or built-in) and picks the meal suggester.
    pub fn initialize(config: &Config) -> Result<Self> {
        let tables = match &config.catalog_path {
            Some(path) => load_catalog(Path::new(path))?,
            None => default_catalog(),
        };
        let registry = Arc::new(TableRegistry::new(tables));

        let meal_suggester: Arc<dyn MealSuggester> = if config.meal_api_enabled {
            Arc::new(TheMealDbSuggester::new(
                config.meal_api_url.clone(),
                config.meal_api_timeout(),
            )?)
        } else {
            tracing::info!("Meal service disabled, serving the house suggestion");
            Arc::new(StaticMealSuggester::default())
        };

        tracing::info!(
            tables = registry.len(),
            catalog = config.catalog_path.as_deref().unwrap_or("built-in"),
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), registry, meal_suggester))
    }
}
