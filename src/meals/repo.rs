use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::meals::dto::{MealEntry, NewMeal};

/// Append-and-read meal log.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Persists `meal`, assigning its id and creation timestamp.
    async fn append(&self, meal: NewMeal) -> anyhow::Result<MealEntry>;
    /// Every stored meal, newest first.
    async fn list_all(&self) -> anyhow::Result<Vec<MealEntry>>;
}

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn append(&self, meal: NewMeal) -> anyhow::Result<MealEntry> {
        let row = sqlx::query_as::<_, MealEntry>(
            r#"
            INSERT INTO meals (id, name, calories, protein, carbs, fats)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, calories, protein, carbs, fats, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&meal.name)
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbs)
        .bind(meal.fats)
        .fetch_one(&self.db)
        .await
        .context("insert meal")?;
        Ok(row)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<MealEntry>> {
        let rows = sqlx::query_as::<_, MealEntry>(
            r#"
            SELECT id, name, calories, protein, carbs, fats, created_at
              FROM meals
             ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list meals")?;
        Ok(rows)
    }
}

/// Process-local store. Entries live as long as the value.
#[derive(Default)]
pub struct MemoryMealStore {
    entries: RwLock<Vec<MealEntry>>,
}

impl MemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for MemoryMealStore {
    async fn append(&self, meal: NewMeal) -> anyhow::Result<MealEntry> {
        let entry = MealEntry {
            id: Uuid::new_v4(),
            name: meal.name,
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fats: meal.fats,
            created_at: OffsetDateTime::now_utc(),
        };
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<MealEntry>> {
        let entries = self.entries.read().await;
        let mut out: Vec<MealEntry> = entries.iter().rev().cloned().collect();
        // stable: equal timestamps keep newest-appended first
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}
