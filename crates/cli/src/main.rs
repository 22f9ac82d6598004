use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dataset::Dataset;
use pipeline::{ExperienceChoice, FilterCriteria, FilterEngine, GenderChoice};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

mod render;
mod session;

use render::OutputFormat;
use session::Session;

/// Role Finder - narrow a candidate table to matching roles
#[derive(Parser)]
#[command(name = "role-finder")]
#[command(about = "Summarise candidate records by department and role", long_about = None)]
struct Cli {
    /// Path to the candidate table
    #[arg(short, long, default_value = "data.csv", env = "ROLE_FINDER_DATA")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary table for one set of filters
    Show {
        /// Gender filter: any, male or female
        #[arg(long)]
        gender: Option<GenderChoice>,

        /// Minimum candidate age (defaults to the youngest candidate)
        #[arg(long)]
        min_age: Option<u32>,

        /// Expected salary; roles whose top salary is below it are hidden
        #[arg(long)]
        max_salary: Option<f64>,

        /// Prior experience filter: any, yes or no
        #[arg(long)]
        experience: Option<ExperienceChoice>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show each department's description
        #[arg(long)]
        descriptions: bool,
    },

    /// Print the salary and age bounds of the table
    Ranges,

    /// Adjust filters line by line and watch the table update
    Interactive {
        /// Show each department's description
        #[arg(long)]
        descriptions: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the table
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("Failed to load candidate table from {}", cli.data.display()))?;
    info!("Candidate table ready ({} records)", dataset.len());

    match cli.command {
        Commands::Show {
            gender,
            min_age,
            max_salary,
            experience,
            format,
            descriptions,
        } => handle_show(
            &dataset,
            ShowArgs {
                gender,
                min_age,
                max_salary,
                experience,
            },
            format,
            descriptions,
        )?,
        Commands::Ranges => handle_ranges(&dataset)?,
        Commands::Interactive { descriptions } => handle_interactive(&dataset, descriptions)?,
    }

    Ok(())
}

/// Filter values given on the command line; unset values keep the defaults
struct ShowArgs {
    gender: Option<GenderChoice>,
    min_age: Option<u32>,
    max_salary: Option<f64>,
    experience: Option<ExperienceChoice>,
}

/// Handle the 'show' command
fn handle_show(
    dataset: &Dataset,
    args: ShowArgs,
    format: OutputFormat,
    descriptions: bool,
) -> Result<()> {
    let bounds = dataset.bounds().context("Cannot filter an empty candidate table")?;

    let mut criteria = FilterCriteria::from_bounds(&bounds);
    if let Some(gender) = args.gender {
        criteria = criteria.with_gender(gender);
    }
    if let Some(min_age) = args.min_age {
        criteria = criteria.with_min_age(min_age);
    }
    if let Some(max_salary) = args.max_salary {
        criteria = criteria.with_max_salary(max_salary);
    }
    if let Some(experience) = args.experience {
        criteria = criteria.with_experience(experience);
    }
    let criteria = criteria.clamped(&bounds);

    let rows = FilterEngine::new()
        .compute(dataset, &criteria)
        .context("Failed to compute the summary table")?;

    let output = match format {
        OutputFormat::Table => format!(
            "{}{}",
            render::render_criteria(&criteria),
            render::render_table(&rows, descriptions)
        ),
        OutputFormat::Json => format!("{}\n", render::render_json(&rows)?),
    };
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

/// Handle the 'ranges' command
fn handle_ranges(dataset: &Dataset) -> Result<()> {
    let bounds = dataset.bounds().context("Cannot report ranges of an empty candidate table")?;
    print!("{}", render::render_bounds(&bounds));
    Ok(())
}

/// Handle the 'interactive' command
fn handle_interactive(dataset: &Dataset, descriptions: bool) -> Result<()> {
    let mut session =
        Session::new(dataset, descriptions).context("Cannot filter an empty candidate table")?;
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
