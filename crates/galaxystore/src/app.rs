use crate::output::print_json_line;
use crate::prelude::*;
use galaxystore::client::GalaxyStore;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// App guid (i.e. sku), e.g. "com.example.game"
    #[arg(value_name = "GUID")]
    pub guid: String,
}

pub fn run(options: Options, store: &GalaxyStore) -> Result<()> {
    let app = store
        .app_details(&options.guid)
        .with_context(|| format!("Failed to fetch details of {}", options.guid))?;

    print_json_line(&app)
}
