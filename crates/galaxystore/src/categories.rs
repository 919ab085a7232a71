use crate::output::print_json_line;
use crate::prelude::{println, *};
use galaxystore::client::GalaxyStore;
use galaxystore::models::Category;
use galaxystore::protocol::CategoryScope;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Only list game categories
    #[arg(long)]
    pub games: bool,

    /// Render a table instead of JSON lines
    #[arg(long)]
    pub table: bool,
}

impl Options {
    fn scope(&self) -> CategoryScope {
        if self.games {
            CategoryScope::Games
        } else {
            CategoryScope::All
        }
    }
}

pub fn run(options: Options, store: &GalaxyStore) -> Result<()> {
    let categories = store
        .categories(options.scope())
        .context("Failed to list categories")?;

    if options.table {
        let categories: Vec<Category> = categories.collect();
        println!("{}", format_table(&categories));
        return Ok(());
    }

    for category in categories {
        print_json_line(&category)?;
    }

    Ok(())
}

fn format_table(categories: &[Category]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Content ID", "Watch face"]);
    for category in categories {
        table.add_row(prettytable::row![
            &category.id,
            &category.name,
            &category.content_id,
            if category.watch_face { "yes" } else { "" }
        ]);
    }
    table.to_string()
}
