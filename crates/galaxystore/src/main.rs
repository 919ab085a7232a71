use crate::prelude::{eprintln, *};
use clap::Parser;
use galaxystore::client::GalaxyStore;
use galaxystore::config::StoreConfig;

mod app;
mod apps;
mod categories;
mod output;
mod prelude;
mod reviews;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Lookup Samsung Galaxy Store information"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Store web front end (defaults to GALAXYSTORE_BASE_URL or the public store)
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Backend the XML requests are routed to (defaults to GALAXYSTORE_ODC_URL)
    #[clap(long, global = true)]
    odc_url: Option<String>,

    /// User-Agent sent with every request (defaults to GALAXYSTORE_USER_AGENT)
    #[clap(long, global = true)]
    user_agent: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "GALAXYSTORE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    fn store(&self) -> Result<GalaxyStore> {
        let config = StoreConfig::from_env().with_overrides(
            self.base_url.clone(),
            self.odc_url.clone(),
            self.user_agent.clone(),
        );

        if self.verbose {
            eprintln!("Store base URL: {}", config.base());
            eprintln!("Routed to: {}", config.odc_url);
            eprintln!();
        }

        GalaxyStore::with_config(config).context("Failed to build store client")
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Get store category information
    Categories(crate::categories::Options),

    /// Get bestselling apps in a specific category
    Apps(crate::apps::Options),

    /// Get a specific app details using the guid (i.e. sku)
    App(crate::app::Options),

    /// Get reviews for a specific app using the product id (i.e. number)
    Reviews(crate::reviews::Options),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let store = app.global.store()?;

    match app.command {
        SubCommands::Categories(options) => crate::categories::run(options, &store),
        SubCommands::Apps(options) => crate::apps::run(options, &store),
        SubCommands::App(options) => crate::app::run(options, &store),
        SubCommands::Reviews(options) => crate::reviews::run(options, &store),
    }
}
