use crate::output::print_json_line;
use crate::prelude::{println, *};
use galaxystore::client::{GalaxyStore, DEFAULT_END, DEFAULT_START};
use galaxystore::models::{AppSummary, Category};

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Category id for which to lookup apps
    #[arg(value_name = "CATEGORY_ID")]
    pub category_id: String,

    /// Position of the first app to return (1-indexed)
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: u32,

    /// Position of the last app to return
    #[arg(long = "max-apps", default_value_t = DEFAULT_END)]
    pub max_apps: u32,

    /// Render a table instead of JSON lines
    #[arg(long)]
    pub table: bool,
}

pub fn run(options: Options, store: &GalaxyStore) -> Result<()> {
    let category = Category::with_id(&options.category_id);
    let apps = store
        .category_apps(&category, options.start, options.max_apps)
        .with_context(|| format!("Failed to list apps of category {}", options.category_id))?;

    if options.table {
        let apps = apps.collect::<galaxystore::Result<Vec<AppSummary>>>()?;
        println!("{}", format_table(&apps));
        return Ok(());
    }

    for app in apps {
        print_json_line(&app?)?;
    }

    Ok(())
}

fn format_table(apps: &[AppSummary]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["Product ID", "GUID", "Name", "Price", "Rating", "Developer"]);
    for app in apps {
        let price = match (&app.currency_symbol, app.price) {
            (Some(symbol), Some(price)) => format!("{symbol}{price:.2}"),
            (None, Some(price)) => format!("{price:.2}"),
            _ => String::new(),
        };
        table.add_row(prettytable::row![
            &app.id,
            &app.guid,
            &app.name,
            price,
            format!("{:.1}", app.average_rating),
            &app.developer.name
        ]);
    }
    table.to_string()
}
