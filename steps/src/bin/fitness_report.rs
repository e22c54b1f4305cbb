#[macro_use]
extern crate log;

use calorie_burnt::UserAttributes;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Weight of person in kilograms
    #[arg(long, env = "FITNESS_WEIGHT")]
    pub weight: f64,
    /// Height of person
    #[arg(long, env = "FITNESS_HEIGHT")]
    pub height: f64,
    /// Print summary as json
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    ///
    /// Daily package from the step counter, e.g. `678,0h50m`
    ///
    Day {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
    ///
    /// Training session, e.g. `3456,Walking,3h00m`
    ///
    Training {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args {
        weight,
        height,
        json,
        command,
    } = <Args as clap::Parser>::parse();

    let user = UserAttributes::new(weight, height);

    let output = match command {
        Command::Day { record } => {
            let summary = steps::day_summary(&record, user)
                .inspect_err(|e| error!("Failed to parse package {record:?}. Reason: {e}"))?;

            match (summary, json) {
                (Some(summary), true) => serde_json::to_string_pretty(&summary)?,
                (Some(summary), false) => summary.to_string(),
                (None, _) => String::new(),
            }
        }
        Command::Training { record } => {
            let outcome = calorie_burnt::training_summary(&record, user)
                .inspect_err(|e| error!("Failed to parse training {record:?}. Reason: {e}"))?;

            match json {
                true => serde_json::to_string_pretty(&outcome)?,
                false => outcome.to_string(),
            }
        }
    };

    match json && !output.is_empty() {
        true => println!("{output}"),
        false => print!("{output}"),
    }

    Ok(())
}
