//! Count the transit stops within half a mile of each school.
//!
//! Prints the schools file back as JSON with `stops`, `wheelchairs` and
//! `ratio` added to every school that has coordinates.

use std::path::PathBuf;
use std::process::ExitCode;

use access_server::feed::{FeedClient, FeedConfig};
use access_server::join::process_schools;
use access_server::logging;
use clap::Parser;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "school-stops",
    about = "Score each school by the wheelchair status of the transit stops around it"
)]
struct Args {
    /// URL of the stop feed (e.g. https://api-v3.mbta.com/stops)
    stops_url: String,

    /// Path to the JSON file of school records
    schools_data: PathBuf,

    /// Feed request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init("warn");

    match run(args).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let feed = FeedClient::new(FeedConfig::new(args.stops_url).with_timeout(args.timeout_secs))?;
    let schools = process_schools(&args.schools_data, &feed).await?;
    Ok(serde_json::to_string(&schools)?)
}
