use anyhow::Result;
use recipe_ner::annotator::FileAnnotator;
use recipe_ner::classifier::{EntityClassifier, ParsedIngredient};
use recipe_ner::config::DatabaseConfig;
use recipe_ner::db::*;
use recipe_ner::pricing::{self, PriceEntry, PriceTable};
use recipe_ner::recipe_parser::{self, RecipeDocument};
use recipe_ner::review::{self, ReviewDecision, ReviewItem, Reviewer};
use recipe_ner::units::UnitTable;
use sqlx::SqlitePool;
use std::collections::VecDeque;

async fn setup_test_db() -> Result<SqlitePool> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connect_timeout_secs: 5,
    };
    let pool = connect(&config).await?;
    init_database_schema(&pool).await?;
    Ok(pool)
}

fn torta() -> RecipeDocument {
    recipe_parser::parse(
        "torta",
        "Torta\n- Masa\n2 huevos\n1 taza harina\nDa 8 raciones",
        "postres",
    )
    .unwrap()
}

fn flan() -> RecipeDocument {
    recipe_parser::parse("flan", "Flan\n2 huevos\n1 taza leche\nDa 3 tazas", "postres").unwrap()
}

fn price(food: &str, measure: &str, iprice: f64, fprice: f64) -> PriceEntry {
    PriceEntry {
        food: food.to_string(),
        measure: measure.to_string(),
        iprice,
        fprice,
    }
}

/// Reviewer that replays a fixed list of decisions, then stops
struct ScriptedReviewer {
    decisions: VecDeque<ReviewDecision>,
    seen: Vec<String>,
}

impl Reviewer for ScriptedReviewer {
    fn review(
        &mut self,
        item: &ReviewItem<'_>,
        _units: &UnitTable,
    ) -> recipe_ner::errors::AppResult<ReviewDecision> {
        self.seen.push(item.text.to_string());
        Ok(self.decisions.pop_front().unwrap_or(ReviewDecision::Stop))
    }
}

#[tokio::test]
async fn test_save_recipe() -> Result<()> {
    let pool = setup_test_db().await?;

    assert!(save_recipe(&pool, &torta()).await?);

    let recipe = read_recipe(&pool, "torta").await?.expect("recipe saved");
    assert_eq!(recipe.name, "Torta");
    assert_eq!(recipe.rations, 8);
    assert_eq!(recipe.category, "postres");
    assert_eq!(recipe.price, 0.0);

    let ingredients = list_ingredients(&pool, "torta").await?;
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0].text, "2 huevos");
    assert_eq!(ingredients[0].section, "Masa");
    assert_eq!(ingredients[0].amount, None);
    assert!(!ingredients[0].verified);
    assert!(ingredients[0].verified_at.is_none());

    Ok(())
}

#[tokio::test]
async fn test_volume_yield_is_stored_as_sentinel() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &flan()).await?;

    let recipe = read_recipe(&pool, "flan").await?.expect("recipe saved");
    assert_eq!(recipe.rations, -1);
    Ok(())
}

#[tokio::test]
async fn test_save_recipe_keeps_existing_ingredients() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &torta()).await?;
    verify_ingredient(&pool, "2 huevos", 2.0, "", "huevos").await?;

    let mut updated = torta();
    updated.name = "Torta de la abuela".to_string();
    assert!(!save_recipe(&pool, &updated).await?);

    let recipe = read_recipe(&pool, "torta").await?.expect("recipe saved");
    assert_eq!(recipe.name, "Torta de la abuela");

    let ingredients = list_ingredients(&pool, "torta").await?;
    assert_eq!(ingredients.len(), 2);
    assert!(ingredients[0].verified);
    assert_eq!(ingredients[0].food, "huevos");
    Ok(())
}

#[tokio::test]
async fn test_unverified_ingredients_grouped_by_text() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &torta()).await?;
    save_recipe(&pool, &flan()).await?;

    let pending = unverified_ingredients(&pool).await?;
    let texts: Vec<&str> = pending.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["2 huevos", "1 taza harina", "1 taza leche"]);
    assert_eq!(count_ingredients(&pool).await?, (4, 0));

    let rows = verify_ingredient(&pool, "2 huevos", 2.0, "", "huevos").await?;
    assert_eq!(rows, 2);
    assert_eq!(count_ingredients(&pool).await?, (4, 2));
    assert_eq!(unverified_ingredients(&pool).await?.len(), 2);

    let ingredients = list_ingredients(&pool, "flan").await?;
    assert!(ingredients[0].verified_at.is_some());

    assert_eq!(verify_ingredient(&pool, "no such line", 1.0, "", "x").await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_infer_ingredient_leaves_verified_rows() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &torta()).await?;
    verify_ingredient(&pool, "1 taza harina", 1.0, "cup", "harina integral").await?;

    let parsed = ParsedIngredient {
        amount: 1.0,
        measure: "cup".to_string(),
        foods: vec!["harina".to_string()],
    };
    assert_eq!(infer_ingredient(&pool, "1 taza harina", &parsed).await?, 0);

    let ingredients = list_ingredients(&pool, "torta").await?;
    assert_eq!(ingredients[1].food, "harina integral");
    Ok(())
}

#[tokio::test]
async fn test_update_prices() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &torta()).await?;
    verify_ingredient(&pool, "2 huevos", 2.0, "", "huevo").await?;
    verify_ingredient(&pool, "1 taza harina", 1.0, "cup", "harina").await?;

    let table = PriceTable::from_entries(&[price("huevo", "", 0.0, 120.0), price("harina", "cup", 95.4, 80.0)]);
    let prices = pricing::update_prices(&pool, &table).await?;
    assert_eq!(prices, vec![("torta".to_string(), 335.0)]);

    let recipe = read_recipe(&pool, "torta").await?.expect("recipe saved");
    assert_eq!(recipe.price, 335.0);
    Ok(())
}

#[tokio::test]
async fn test_update_prices_is_atomic() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &flan()).await?;
    save_recipe(&pool, &torta()).await?;
    verify_ingredient(&pool, "2 huevos", 2.0, "", "huevo").await?;
    verify_ingredient(&pool, "1 taza harina", 1.0, "cup", "harina").await?;
    verify_ingredient(&pool, "1 taza leche", 1.0, "cup", "leche").await?;

    // leche has no price, so flan fails and torta must keep its old price
    let table = PriceTable::from_entries(&[price("huevo", "", 0.0, 120.0), price("harina", "cup", 95.0, 0.0)]);
    assert!(pricing::update_prices(&pool, &table).await.is_err());

    let recipe = read_recipe(&pool, "torta").await?.expect("recipe saved");
    assert_eq!(recipe.price, 0.0);
    Ok(())
}

#[tokio::test]
async fn test_review_unverified() -> Result<()> {
    let pool = setup_test_db().await?;
    save_recipe(&pool, &torta()).await?;
    save_recipe(&pool, &flan()).await?;

    let annotator = FileAnnotator::from_json_str(
        r#"[{"text": "2 huevos", "label": [
                {"start": 0, "end": 1, "labels": ["AMOUNT"]},
                {"start": 2, "end": 8, "labels": ["FOOD"]}
            ]}]"#,
    )?;
    let units = UnitTable::from_pairs([("cup", "^taza")])?;
    let classifier = EntityClassifier::new(&units);

    let mut reviewer = ScriptedReviewer {
        decisions: VecDeque::from(vec![
            ReviewDecision::Accept(ParsedIngredient {
                amount: 2.0,
                measure: String::new(),
                foods: vec!["huevos".to_string()],
            }),
            ReviewDecision::Skip,
        ]),
        seen: Vec::new(),
    };

    let summary = review::review_unverified(&pool, &annotator, classifier, &mut reviewer).await?;
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.stopped);
    assert_eq!(reviewer.seen, vec!["2 huevos", "1 taza harina", "1 taza leche"]);

    assert_eq!(count_ingredients(&pool).await?, (4, 2));
    let pending: Vec<String> = unverified_ingredients(&pool)
        .await?
        .into_iter()
        .map(|p| p.text)
        .collect();
    assert_eq!(pending, vec!["1 taza harina", "1 taza leche"]);
    Ok(())
}
