//! listcascade console demo
//!
//! Stands in for a UI toolkit: prints the three columns, then walks every
//! category and every item, printing what the detail panel renders.
//!
//! Run with: cargo run -p listcascade --example cascade_demo -- [--config FILE] [--catalog FILE]
//!
//! Logging follows `RUST_LOG` when set, otherwise the configured `log_filter`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use listcascade::fixtures::fruit_catalog;
use listcascade::{CascadeConfig, CascadingView, CatalogData};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cascade_demo",
    about = "Walk a category/item/detail cascade on the console"
)]
struct Options {
    /// Cascade configuration (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (TOML, or JSON by extension). Defaults to the fruit catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn print_columns(view: &CascadingView) {
    let categories = view.categories();
    let items = view.items();
    let category_selection = categories.selection();
    let item_selection = items.selection();

    println!("Categories:");
    for key in categories.keys() {
        let marker = if category_selection.contains(key) { '>' } else { ' ' };
        let label = categories.item_args(key).map(|a| a.text).unwrap_or_else(|| key.clone());
        println!("  {marker} {label}");
    }

    println!("Items:");
    for key in items.keys() {
        let marker = if item_selection.contains(&key) { '>' } else { ' ' };
        let label = items.item_args(&key).map(|a| a.text).unwrap_or_else(|| key.clone());
        println!("  {marker} {label}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    let config = match &options.config {
        Some(path) => CascadeConfig::load(path)?,
        None => CascadeConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &options.catalog {
        Some(path) => CatalogData::load(path)?,
        None => fruit_catalog()?,
    };

    let view = CascadingView::new(Arc::new(catalog), &config);

    view.detail().rendered.connect(|detail| {
        println!("Detail:\n{detail}");
    });
    view.detail().refresh_failed.connect(|error| {
        println!("Detail unchanged: {error}");
    });
    view.items().refresh_failed.connect(|error| {
        println!("Items unchanged: {error}");
    });

    println!("== Initial state ==");
    print_columns(&view);
    println!("Detail:\n{}", view.detail().view());

    for category in view.categories().keys().to_vec() {
        println!("\n== Select category '{category}' ==");
        view.select_category(&category)?;
        print_columns(&view);

        for item in view.items().keys().into_iter().skip(1) {
            println!("\n-- Select item '{item}' --");
            view.select_item(&item)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_paths() {
        let options =
            Options::try_parse_from(["cascade_demo", "--catalog", "fruit.json", "--config", "c.toml"])
                .unwrap();
        assert_eq!(options.catalog, Some(PathBuf::from("fruit.json")));
        assert_eq!(options.config, Some(PathBuf::from("c.toml")));

        let options = Options::try_parse_from(["cascade_demo"]).unwrap();
        assert!(options.catalog.is_none() && options.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_flag_and_missing_value() {
        assert!(Options::try_parse_from(["cascade_demo", "--verbose"]).is_err());
        assert!(Options::try_parse_from(["cascade_demo", "--catalog"]).is_err());
    }
}
