use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info, Instrument};

use crate::classifier::ParsedIngredient;
use crate::config::DatabaseConfig;
use crate::observability::{db_span, metrics};
use crate::recipe_parser::RecipeDocument;

/// Represents a recipe in the database
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Serving count, -1 for volume yields
    pub rations: i64,
    pub category: String,
    pub price: f64,
}

/// Represents an ingredient line in the database
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub text: String,
    pub amount: Option<f64>,
    pub measure: String,
    pub food: String,
    pub verified: bool,
    pub section: String,
    pub recipe_id: String,
    pub verified_at: Option<DateTime<Utc>>,
}

/// An unverified ingredient text with the id of its first row
#[derive(Debug, Clone, PartialEq)]
pub struct PendingIngredient {
    pub id: i64,
    pub text: String,
}

/// The part of an ingredient row that takes part in cost computation
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    pub amount: Option<f64>,
    pub measure: String,
    pub food: String,
}

/// Open a connection pool for the configured SQLite database
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid database URL: {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    info!(database_url = %config.url, "Database connection established");
    Ok(pool)
}

/// Initialize the database schema
pub async fn init_database_schema(pool: &SqlitePool) -> Result<()> {
    info!("Initializing database schema");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS recipe (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            rations INTEGER NOT NULL,
            category TEXT NOT NULL,
            price REAL NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create recipe table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS ingredient (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            amount REAL,
            measure TEXT NOT NULL DEFAULT '',
            food TEXT NOT NULL DEFAULT '',
            verified INTEGER NOT NULL DEFAULT 0,
            section TEXT NOT NULL DEFAULT '',
            recipe_id TEXT NOT NULL REFERENCES recipe(id),
            verified_at TEXT
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create ingredient table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ingredient_recipe_id_idx ON ingredient(recipe_id)")
        .execute(pool)
        .await
        .context("Failed to create ingredient recipe_id index")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ingredient_text_idx ON ingredient(text)")
        .execute(pool)
        .await
        .context("Failed to create ingredient text index")?;

    info!("Database schema initialized successfully");
    Ok(())
}

/// Save a parsed recipe.
///
/// The recipe row is upserted. Ingredient rows are only inserted when the
/// recipe is new, so rows confirmed by an operator are never replaced.
/// Returns `true` when the recipe was created.
pub async fn save_recipe(pool: &SqlitePool, document: &RecipeDocument) -> Result<bool> {
    let start = Instant::now();
    let span = db_span("save_recipe", "recipe");

    let created = async {
        let mut tx = pool.begin().await.context("Failed to begin transaction")?;

        let existing: Option<String> = sqlx::query_scalar("SELECT id FROM recipe WHERE id = ?")
            .bind(&document.key)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to look up recipe")?;

        sqlx::query(
            "INSERT INTO recipe (id, name, rations, category, price)
             VALUES (?, ?, ?, ?, 0)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                rations = excluded.rations,
                category = excluded.category",
        )
        .bind(&document.key)
        .bind(&document.name)
        .bind(document.servings.as_i64())
        .bind(&document.category)
        .execute(&mut *tx)
        .await
        .context("Failed to upsert recipe")?;

        let created = existing.is_none();
        if created {
            for line in &document.ingredients {
                sqlx::query(
                    "INSERT INTO ingredient (text, amount, measure, food, verified, section, recipe_id)
                     VALUES (?, NULL, '', '', 0, ?, ?)",
                )
                .bind(&line.text)
                .bind(line.section.as_deref().unwrap_or(""))
                .bind(&document.key)
                .execute(&mut *tx)
                .await
                .context("Failed to insert ingredient")?;
            }
        }

        tx.commit().await.context("Failed to commit recipe")?;
        Ok::<bool, anyhow::Error>(created)
    }
    .instrument(span)
    .await?;

    metrics::record_db_metrics("save_recipe", start.elapsed());
    debug!(
        recipe_id = %document.key,
        created = created,
        ingredient_count = document.ingredients.len(),
        "Recipe saved"
    );
    Ok(created)
}

/// Read a recipe by id
pub async fn read_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<Option<Recipe>> {
    debug!(recipe_id = %recipe_id, "Reading recipe");

    let row = sqlx::query("SELECT id, name, rations, category, price FROM recipe WHERE id = ?")
        .bind(recipe_id)
        .fetch_optional(pool)
        .await
        .context("Failed to read recipe")?;

    Ok(row.map(|row| Recipe {
        id: row.get(0),
        name: row.get(1),
        rations: row.get(2),
        category: row.get(3),
        price: row.get(4),
    }))
}

/// List the ingredient rows of a recipe in insertion order
pub async fn list_ingredients(pool: &SqlitePool, recipe_id: &str) -> Result<Vec<Ingredient>> {
    let rows = sqlx::query(
        "SELECT id, text, amount, measure, food, verified, section, recipe_id, verified_at
         FROM ingredient WHERE recipe_id = ? ORDER BY id",
    )
    .bind(recipe_id)
    .fetch_all(pool)
    .await
    .context("Failed to list ingredients")?;

    Ok(rows
        .into_iter()
        .map(|row| Ingredient {
            id: row.get(0),
            text: row.get(1),
            amount: row.get(2),
            measure: row.get(3),
            food: row.get(4),
            verified: row.get(5),
            section: row.get(6),
            recipe_id: row.get(7),
            verified_at: row.get(8),
        })
        .collect())
}

/// Unverified ingredients, one entry per distinct text
pub async fn unverified_ingredients(pool: &SqlitePool) -> Result<Vec<PendingIngredient>> {
    let rows = sqlx::query(
        "SELECT MIN(id), text FROM ingredient WHERE verified = 0 GROUP BY text ORDER BY MIN(id)",
    )
    .fetch_all(pool)
    .await
    .context("Failed to list unverified ingredients")?;

    Ok(rows
        .into_iter()
        .map(|row| PendingIngredient {
            id: row.get(0),
            text: row.get(1),
        })
        .collect())
}

/// Store a machine-inferred triple on every unverified row with this text
pub async fn infer_ingredient(pool: &SqlitePool, text: &str, parsed: &ParsedIngredient) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE ingredient SET amount = ?, measure = ?, food = ?
         WHERE text = ? AND verified = 0",
    )
    .bind(parsed.amount)
    .bind(&parsed.measure)
    .bind(parsed.primary_food().unwrap_or(""))
    .bind(text)
    .execute(pool)
    .await
    .context("Failed to store inferred ingredient")?;

    Ok(result.rows_affected())
}

/// Confirm the triple for every row with this text
pub async fn verify_ingredient(
    pool: &SqlitePool,
    text: &str,
    amount: f64,
    measure: &str,
    food: &str,
) -> Result<u64> {
    let start = Instant::now();

    let result = sqlx::query(
        "UPDATE ingredient
         SET amount = ?, measure = ?, food = ?, verified = 1, verified_at = ?
         WHERE text = ?",
    )
    .bind(amount)
    .bind(measure)
    .bind(food)
    .bind(Utc::now())
    .bind(text)
    .execute(pool)
    .instrument(db_span("verify_ingredient", "ingredient"))
    .await
    .context("Failed to verify ingredient")?;

    metrics::record_db_metrics("verify_ingredient", start.elapsed());
    let rows_affected = result.rows_affected();
    if rows_affected > 0 {
        debug!(text = %text, rows = rows_affected, "Ingredient verified");
    } else {
        info!("No ingredient found with text: {text}");
    }
    Ok(rows_affected)
}

/// All recipe ids in order
pub async fn recipe_ids(pool: &SqlitePool) -> Result<Vec<String>> {
    sqlx::query_scalar("SELECT id FROM recipe ORDER BY id")
        .fetch_all(pool)
        .await
        .context("Failed to list recipe ids")
}

/// The `(amount, measure, food)` triples of a recipe
pub async fn recipe_cost_lines(pool: &SqlitePool, recipe_id: &str) -> Result<Vec<CostLine>> {
    let rows = sqlx::query("SELECT amount, measure, food FROM ingredient WHERE recipe_id = ? ORDER BY id")
        .bind(recipe_id)
        .fetch_all(pool)
        .await
        .context("Failed to read recipe ingredients")?;

    Ok(rows
        .into_iter()
        .map(|row| CostLine {
            amount: row.get(0),
            measure: row.get(1),
            food: row.get(2),
        })
        .collect())
}

/// Write recipe prices in a single transaction
pub async fn update_recipe_prices(pool: &SqlitePool, prices: &[(String, f64)]) -> Result<()> {
    let start = Instant::now();
    let mut tx = pool.begin().await.context("Failed to begin transaction")?;

    for (recipe_id, price) in prices {
        sqlx::query("UPDATE recipe SET price = ? WHERE id = ?")
            .bind(price)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to update price of recipe {recipe_id}"))?;
    }

    tx.commit().await.context("Failed to commit prices")?;
    metrics::record_db_metrics("update_recipe_prices", start.elapsed());
    info!(recipes = prices.len(), "Recipe prices updated");
    Ok(())
}

/// Total and verified ingredient row counts
pub async fn count_ingredients(pool: &SqlitePool) -> Result<(i64, i64)> {
    let row = sqlx::query("SELECT COUNT(*), COALESCE(SUM(verified), 0) FROM ingredient")
        .fetch_one(pool)
        .await
        .context("Failed to count ingredients")?;
    Ok((row.get(0), row.get(1)))
}
