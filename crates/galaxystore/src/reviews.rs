use crate::output::{cell, print_json_line};
use crate::prelude::{println, *};
use galaxystore::client::GalaxyStore;
use galaxystore::models::Review;
use galaxystore_core::utils::format_datetime;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Product id (i.e. number), e.g. "000005467316"
    #[arg(value_name = "PRODUCT_ID")]
    pub product_id: String,

    /// Number of reviews to return, most recent first. Zero or less returns all reviews
    #[arg(long = "max-reviews", allow_negative_numbers = true)]
    pub max_reviews: Option<i64>,

    /// Render a table instead of JSON lines
    #[arg(long)]
    pub table: bool,
}

pub fn run(options: Options, store: &GalaxyStore) -> Result<()> {
    let reviews = store.app_reviews(&options.product_id, options.max_reviews);

    if options.table {
        let reviews = reviews
            .collect::<galaxystore::Result<Vec<Review>>>()
            .with_context(|| format!("Failed to fetch reviews of {}", options.product_id))?;
        println!("{}", format_table(&reviews));
        return Ok(());
    }

    for review in reviews {
        let review =
            review.with_context(|| format!("Failed to fetch reviews of {}", options.product_id))?;
        print_json_line(&review)?;
    }

    Ok(())
}

fn format_table(reviews: &[Review]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["Date", "User", "Stars", "Replied", "Review"]);
    for review in reviews {
        table.add_row(prettytable::row![
            cell(&review.created_date.as_ref().map(format_datetime)),
            &review.user,
            format!("{:.1}", review.stars),
            if review.developer_responded { "yes" } else { "" },
            &review.text
        ]);
    }
    table.to_string()
}
