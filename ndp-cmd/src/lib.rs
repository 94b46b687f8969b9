//! Command implementations for the disaster prediction CLI.
//!
//! Provides subcommands for querying the remote prediction service from a
//! terminal -- the same endpoint the web app fetches, without a browser.

use clap::Subcommand;

pub mod predict;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch disaster predictions for a year
    Predict {
        /// Year to request predictions for (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Only print one category's series (e.g. "Severe Storm")
        #[arg(short, long)]
        category: Option<String>,

        /// Print the raw JSON payload instead of a summary
        #[arg(long)]
        json: bool,

        /// Override the prediction service origin
        #[arg(long, default_value = ndp_api::DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// List the supported disaster categories
    Categories,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Predict {
            year,
            category,
            json,
            base_url,
        } => predict::run_predict(year, category.as_deref(), json, &base_url).await,
        Command::Categories => {
            predict::run_categories();
            Ok(())
        }
    }
}
