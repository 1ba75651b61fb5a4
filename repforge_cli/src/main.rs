use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use repforge_core::*;
use std::io::Read as _;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "repforge")]
#[command(about = "Workout generation and summary tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the exercise catalog JSON file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the day types available in the catalog
    Days,

    /// Generate a workout proposal for a day type
    Generate {
        /// Day type (e.g. push, pull, legs, push_pull)
        day: String,

        /// Seed the RNG for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the raw generated workout as JSON instead of plan rows
        #[arg(long)]
        json: bool,
    },

    /// Encode a session JSON file as a summary post
    Encode {
        /// Path to a session JSON file
        session: PathBuf,

        /// Print only the post title
        #[arg(long)]
        title_only: bool,
    },

    /// Decode a summary post body into structured JSON
    Decode {
        /// Path to the post text, or "-" for stdin
        input: PathBuf,
    },

    /// Total volume from a sessions JSON file, grouped by range
    Volume {
        /// Path to a JSON array of sessions
        sessions: PathBuf,

        /// Reporting range: weekly, monthly, ytd, all
        #[arg(long, default_value = "monthly")]
        range: String,
    },
}

fn main() -> Result<()> {
    repforge_core::logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let catalog = match &cli.catalog {
        Some(path) => ExerciseCatalog::load_from(path)?,
        None => config.load_catalog()?,
    };
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    tracing::debug!("Catalog ready with {} day types", catalog.day_types().len());

    match cli.command {
        Commands::Days => cmd_days(&catalog),
        Commands::Generate { day, seed, json } => cmd_generate(&catalog, &day, seed, json),
        Commands::Encode {
            session,
            title_only,
        } => cmd_encode(&session, title_only),
        Commands::Decode { input } => cmd_decode(&input),
        Commands::Volume { sessions, range } => cmd_volume(&sessions, &range, &config),
    }
}

fn cmd_days(catalog: &ExerciseCatalog) -> Result<()> {
    for day in catalog.day_types() {
        println!("{}", day);
    }
    Ok(())
}

fn cmd_generate(
    catalog: &ExerciseCatalog,
    day: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let generated = match seed {
        Some(seed) => generate(catalog, day, &mut StdRng::seed_from_u64(seed))?,
        None => generate_default(catalog, day)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    println!("{}", generated.display_name());
    for row in normalize_generated(&generated, day) {
        println!(
            "  [{}] {} ({}x{})",
            row.muscle_group, row.exercise, row.sets, row.reps
        );
    }
    Ok(())
}

fn cmd_encode(session_path: &Path, title_only: bool) -> Result<()> {
    let contents = std::fs::read_to_string(session_path)?;
    let session: WorkoutSessionResult = serde_json::from_str(&contents)?;
    let encoded = encode(&session);

    if title_only {
        println!("{}", encoded.title);
    } else {
        println!("{}", encoded.title);
        println!();
        println!("{}", encoded.content);
    }
    Ok(())
}

fn cmd_decode(input: &Path) -> Result<()> {
    let text = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };

    let parsed = decode(&text);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn cmd_volume(sessions_path: &Path, range: &str, config: &Config) -> Result<()> {
    let contents = std::fs::read_to_string(sessions_path)?;
    let sessions: Vec<WorkoutSessionResult> = serde_json::from_str(&contents)?;
    let range: Range = range.parse()?;

    let points = session_points(&sessions);
    let today = chrono::Local::now().date_naive();
    for (key, volume) in group_volume(&points, range, today) {
        println!("{}: {:.1} {}", key, volume, config.display.units);
    }
    Ok(())
}
