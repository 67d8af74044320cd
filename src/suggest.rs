use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linkshelf::libs::{
    category::CategoryMatcher,
    config::{Config, ConfigError},
    defaults::default_categories,
    redis::get_redis_service,
    store::{load_categories, StoreError},
    version::print_version,
};
use linkshelf::structs::{
    category::Category,
    link::LinkDescriptor,
    suggestion::{RankResponse, SuggestResponse},
};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// Suggest categories for a link from the command line.
#[derive(Parser, Debug)]
#[command(name = "linkshelf-suggest")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the category to pre-select for a link.
    Suggest(LinkArgs),
    /// Print every matching category, best match first.
    Rank(LinkArgs),
    /// Write the default categories to redis for a user.
    Seed {
        #[arg(long)]
        user: String,
    },
}

#[derive(Args, Debug)]
struct LinkArgs {
    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    url: String,

    /// JSON file with the categories to match against.
    #[arg(long, conflicts_with = "user")]
    categories: Option<PathBuf>,

    /// Read this user's categories from redis.
    #[arg(long)]
    user: Option<String>,
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    print_version("suggest cli");

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let matcher = CategoryMatcher::new(config.reserved.clone(), default_categories());

    match cli.command {
        Command::Suggest(args) => {
            let categories = args.categories(&config)?;
            let suggestion = matcher.suggest(&args.link(), &categories);

            let response = SuggestResponse {
                category_id: suggestion.map(str::to_string),
                resolved_category_id: matcher.resolve(suggestion).to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Rank(args) => {
            let categories = args.categories(&config)?;
            let category_ids = matcher
                .rank(&args.link(), &categories)
                .into_iter()
                .map(str::to_string)
                .collect();

            println!("{}", serde_json::to_string_pretty(&RankResponse { category_ids })?);
        }
        Command::Seed { user } => {
            let redis_service = get_redis_service(config.redis_url.as_deref())?;
            redis_service.store_categories(&user, &default_categories())?;
        }
    }

    Ok(())
}

impl LinkArgs {
    fn link(&self) -> LinkDescriptor {
        LinkDescriptor::new(&self.title, &self.url)
    }

    fn categories(&self, config: &Config) -> Result<Vec<Category>, StoreError> {
        load_categories(
            self.categories.as_deref(),
            self.user.as_deref(),
            config.redis_url.as_deref(),
        )
    }
}
