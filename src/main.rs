use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pantry_recipes::config::AppConfig;
use pantry_recipes::ingredient_normalizer::parse_ingredient_input;
use pantry_recipes::recipe_catalog::RecipeCatalog;
use pantry_recipes::recipe_generator::RecipeGenerator;
use pantry_recipes::recipe_model::{Difficulty, Recipe};
use pantry_recipes::recipe_search::{RecipeFilters, RecipeSearch};
use std::path::PathBuf;
use std::time::Duration;

/// Find recipes you can cook with what is already in your kitchen
#[derive(Parser, Debug)]
#[command(name = "pantry-recipes", version, about)]
struct Cli {
    /// Recipe catalog JSON file (overrides PANTRY_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank catalog recipes against your ingredients
    Search {
        /// Comma-separated ingredients, e.g. "chicken, rice, broccoli"
        #[arg(short, long)]
        ingredients: String,

        /// Diet tags; recipes sharing any of them are kept
        #[arg(long = "diet", value_delimiter = ',')]
        diet_type: Vec<String>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Maximum cooking time in minutes
        #[arg(long)]
        max_time: Option<u32>,
    },
    /// Generate three recipes from your ingredients
    Generate {
        #[arg(short, long)]
        ingredients: String,

        /// Delay before generating, in milliseconds (overrides PANTRY_GENERATION_DELAY_MS)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Show one catalog recipe
    Show { id: String },
    /// List every catalog recipe by name
    List,
}

fn print_recipe(recipe: &Recipe) {
    println!("{recipe}");
    if !recipe.description.is_empty() {
        println!("  {}", recipe.description);
    }
    println!("  Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("    - {ingredient}");
    }
    println!("  Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
}

fn load_catalog(config: &AppConfig) -> Result<RecipeCatalog> {
    RecipeCatalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load recipe catalog from {}",
            config.catalog_path.display()
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting pantry-recipes");

    match cli.command {
        Command::Search {
            ingredients,
            diet_type,
            difficulty,
            max_time,
        } => {
            let ingredients = parse_ingredient_input(&ingredients);
            if ingredients.is_empty() {
                anyhow::bail!("Please provide at least one ingredient");
            }

            let filters = RecipeFilters {
                diet_type,
                difficulty,
                max_cooking_time: max_time,
            };

            let catalog = load_catalog(&config)?;
            let candidates = catalog.query(&filters);
            let results = RecipeSearch::default().search(&candidates, &ingredients);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No recipes match more than half of your ingredients.");
            } else {
                for result in &results {
                    println!("{result}");
                    if !result.missing_ingredients.is_empty() {
                        println!("  Missing: {}", result.missing_ingredients.join(", "));
                    }
                    for substitution in &result.substitutions {
                        println!("  Substitute: {substitution}");
                    }
                }
            }
        }
        Command::Generate {
            ingredients,
            delay_ms,
        } => {
            let ingredients = parse_ingredient_input(&ingredients);
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.generation_delay_ms));

            let recipes = RecipeGenerator::new()
                .generate_after(delay, &ingredients)
                .await
                .context("Recipe generation failed")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                for generated in &recipes {
                    print_recipe(&generated.recipe);
                    println!();
                }
            }
        }
        Command::Show { id } => {
            let catalog = load_catalog(&config)?;
            let recipe = catalog.require(&id)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(recipe)?);
            } else {
                print_recipe(recipe);
            }
        }
        Command::List => {
            let catalog = load_catalog(&config)?;
            let recipes = catalog.all();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                for recipe in &recipes {
                    println!("{}  {}", recipe.id, recipe);
                }
            }
        }
    }

    Ok(())
}
