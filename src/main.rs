use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use recipe_ner::annotator::{Annotator, FileAnnotator, HttpAnnotator};
use recipe_ner::classifier::{markup, Classification, EntityClassifier, LabeledSpan};
use recipe_ner::cli::{Cli, Commands};
use recipe_ner::collection::{LoadOptions, RecipeCollection};
use recipe_ner::config::AppConfig;
use recipe_ner::errors::{error_logging, AppError};
use recipe_ner::review::{self, TerminalReviewer};
use recipe_ner::units::UnitTable;
use recipe_ner::{db, observability, pricing, report};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Build the annotator from configuration: the HTTP service when set,
/// otherwise the annotation export.
fn build_annotator(config: &AppConfig) -> Result<Box<dyn Annotator>> {
    let annotator = &config.annotator;
    if let Some(url) = &annotator.url {
        return Ok(Box::new(HttpAnnotator::new(url, annotator.timeout())?));
    }
    if let Some(path) = &annotator.annotations_path {
        let file = FileAnnotator::load(path, config.encodings.annotations)
            .with_context(|| format!("Failed to load annotations from {}", path.display()))?;
        return Ok(Box::new(file));
    }
    let err = AppError::Config("Set ANNOTATOR_URL or ANNOTATIONS_PATH to annotate lines".to_string());
    error_logging::log_config_error(&err, "ANNOTATOR_URL", "build_annotator");
    Err(err.into())
}

fn load_units(config: &AppConfig) -> Result<UnitTable> {
    let path = &config.paths.measures_path;
    UnitTable::load(path, config.encodings.measures)
        .with_context(|| format!("Failed to load unit patterns from {}", path.display()))
}

fn load_collection(config: &AppConfig, root: Option<PathBuf>, verbose: bool) -> Result<RecipeCollection> {
    let root = root.unwrap_or_else(|| config.paths.recipes_dir.clone());
    let options = LoadOptions {
        encoding: config.encodings.recipes,
        verbose,
    };
    RecipeCollection::load(&root, options)
        .with_context(|| format!("Failed to load recipes from {}", root.display()))
}

async fn open_database(config: &AppConfig) -> Result<SqlitePool> {
    info!(database_url = %config.database.url, "Initializing database connection");
    let pool = db::connect(&config.database).await?;
    db::init_database_schema(&pool).await?;
    Ok(pool)
}

fn span_summary(spans: &[LabeledSpan]) -> Vec<String> {
    spans
        .iter()
        .map(|span| format!("{}: {}", span.text, span.label))
        .collect()
}

fn prompt(text: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

async fn run_load(config: &AppConfig, recipes_dir: Option<PathBuf>, infer: bool, verbose: bool) -> Result<()> {
    let collection = load_collection(config, recipes_dir, verbose)?;
    let annotator = if infer { Some(build_annotator(config)?) } else { None };
    let units = load_units(config)?;
    let classifier = EntityClassifier::new(&units);
    let pool = open_database(config).await?;

    let mut created = 0usize;
    let mut inferred = 0u64;
    for recipe in collection.recipes() {
        if db::save_recipe(&pool, recipe).await.inspect_err(|e| {
            error_logging::log_database_error(e, "save_recipe", Some(recipe.key.as_str()));
        })? {
            created += 1;
        }

        if let Some(annotator) = &annotator {
            for line in &recipe.ingredients {
                let spans = annotator.annotate(&line.text).await?;
                if let Classification::Valid(parsed) = classifier.classify(&spans, &line.text) {
                    inferred += db::infer_ingredient(&pool, &line.text, &parsed).await?;
                }
            }
        }
    }

    let (total, verified) = db::count_ingredients(&pool).await?;
    println!("{collection}");
    println!("New recipes: {created}");
    if infer {
        println!("Inferred ingredient rows: {inferred}");
    }
    println!("Ingredients: {total} ({verified} verified)");
    if verbose {
        for key in collection.empty_keys() {
            println!("Empty: {key}");
        }
    }
    Ok(())
}

async fn run_check(config: &AppConfig, recipes_dir: Option<PathBuf>, show_invalid: bool, verbose: bool) -> Result<()> {
    let collection = load_collection(config, recipes_dir, verbose)?;
    let annotator = build_annotator(config)?;
    let units = load_units(config)?;
    let classifier = EntityClassifier::new(&units);

    let report = report::check_collection(&collection, annotator.as_ref(), classifier).await?;
    if show_invalid {
        for line in &report.invalid {
            println!("{line}");
        }
    }
    println!("{report}");
    Ok(())
}

async fn run_annotate(config: &AppConfig, walk_collection: bool, verbose: bool) -> Result<()> {
    let annotator = build_annotator(config)?;

    if !walk_collection {
        loop {
            let text = prompt(">")?;
            if text.trim().is_empty() {
                return Ok(());
            }
            let spans = annotator.annotate(&text).await?;
            println!("{}", markup(&text, &spans));
            println!("{:?}", span_summary(&spans));
        }
    }

    let collection = load_collection(config, None, verbose)?;
    for recipe in collection.recipes() {
        println!("Recipe: {}", recipe.name);
        for line in &recipe.ingredients {
            let spans = annotator.annotate(&line.text).await?;
            println!("{}", markup(&line.text, &spans));
            match prompt("\t")?.trim() {
                "i" => println!("{:?}", span_summary(&spans)),
                "q" => return Ok(()),
                _ => {}
            }
        }
    }
    Ok(())
}

async fn run_verify(config: &AppConfig) -> Result<()> {
    let annotator = build_annotator(config)?;
    let units = load_units(config)?;
    let classifier = EntityClassifier::new(&units);
    let pool = open_database(config).await?;

    let mut reviewer = TerminalReviewer;
    let summary = review::review_unverified(&pool, annotator.as_ref(), classifier, &mut reviewer).await?;
    println!(
        "Accepted: {}, skipped: {}{}",
        summary.accepted,
        summary.skipped,
        if summary.stopped { " (stopped)" } else { "" }
    );
    Ok(())
}

fn run_prices(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.paths.prices_path.clone());
    let entries = read_prices(&path, config.encodings.prices_report)?;
    let unpriced = pricing::unpriced_foods(&entries);
    for food in &unpriced {
        println!("{food}");
    }
    println!("Total: {}", unpriced.len());
    Ok(())
}

async fn run_update_prices(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.paths.prices_path.clone());
    let entries = read_prices(&path, config.encodings.prices_update)?;
    let table = pricing::PriceTable::from_entries(&entries);
    let pool = open_database(config).await?;

    let prices = pricing::update_prices(&pool, &table).await.inspect_err(|e| {
        warn!(error = %e, "Price update aborted, no recipe was changed");
    })?;
    println!("Updated prices: {}", prices.len());
    Ok(())
}

fn read_prices(path: &Path, encoding: recipe_ner::encoding::TextEncoding) -> Result<Vec<pricing::PriceEntry>> {
    pricing::load_price_entries(path, encoding)
        .with_context(|| format!("Failed to load prices from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    if cli.metrics {
        config.observability.enable_metrics = true;
    }
    config.validate()?;

    let metrics_handle = observability::init_observability_with_config(&config.observability)?;
    info!("{}", config.summary());

    let result = match cli.command {
        Commands::Load { recipes_dir, infer } => run_load(&config, recipes_dir, infer, cli.verbose).await,
        Commands::Check {
            recipes_dir,
            show_invalid,
        } => run_check(&config, recipes_dir, show_invalid, cli.verbose).await,
        Commands::Annotate { collection } => run_annotate(&config, collection, cli.verbose).await,
        Commands::Verify => run_verify(&config).await,
        Commands::Prices { file } => run_prices(&config, file),
        Commands::UpdatePrices { file } => run_update_prices(&config, file).await,
    };

    if let Some(handle) = metrics_handle {
        println!("{}", handle.render());
    }
    result
}
