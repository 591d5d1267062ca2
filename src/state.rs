use crate::config::AppConfig;
use crate::foods::{FoodCandidate, FoodLookup, UsdaClient};
use crate::meals::{MealStore, MemoryMealStore, PgMealStore};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub foods: Arc<dyn FoodLookup>,
    pub meals: Arc<dyn MealStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let foods = Arc::new(UsdaClient::new(&config.usda)) as Arc<dyn FoodLookup>;
        let meals = Arc::new(PgMealStore::new(db)) as Arc<dyn MealStore>;

        Ok(Self { foods, meals })
    }

    pub fn from_parts(foods: Arc<dyn FoodLookup>, meals: Arc<dyn MealStore>) -> Self {
        Self { foods, meals }
    }

    /// In-memory ledger and a lookup that finds nothing.
    pub fn fake() -> Self {
        #[derive(Clone)]
        struct EmptyLookup;
        #[async_trait]
        impl FoodLookup for EmptyLookup {
            async fn search(&self, _query: &str) -> anyhow::Result<Vec<FoodCandidate>> {
                Ok(Vec::new())
            }
        }

        Self {
            foods: Arc::new(EmptyLookup) as Arc<dyn FoodLookup>,
            meals: Arc::new(MemoryMealStore::new()) as Arc<dyn MealStore>,
        }
    }
}
