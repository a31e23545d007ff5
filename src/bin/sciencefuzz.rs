//! ScienceFuzz CLI — discipline and domain contributions of scientists.
//!
//! Usage:
//!   sciencefuzz score --catalog FILE --scientist NAME [--config FILE] [--json]
//!   sciencefuzz scientists --catalog FILE
//!   sciencefuzz import --catalog FILE [--db path]
//!   sciencefuzz contributions NAME [--db path] [--json]

use clap::{Args, Parser, Subcommand};
use sciencefuzz::{
    discipline_contributions, import_catalog, Catalog, CategoryScore, OpenStore, ProfileScorer,
    ScientistProfile, ScoringConfig, SqliteStore,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "sciencefuzz",
    version,
    about = "Fuzzy discipline and domain contributions of scientists"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a scientist's disciplines and domains from a catalog
    Score {
        /// Path to a YAML or JSON catalog
        #[arg(long)]
        catalog: PathBuf,
        /// Scientist (publication author) name
        #[arg(long)]
        scientist: String,
        /// Path to a YAML scoring config
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        weights: WeightOverrides,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the scientists of a catalog
    Scientists {
        /// Path to a YAML or JSON catalog
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Import a catalog into the contribution store
    Import {
        /// Path to a YAML or JSON catalog
        #[arg(long)]
        catalog: PathBuf,
        /// Path to SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Count stored discipline contributions of a scientist
    Contributions {
        /// Scientist name
        scientist: String,
        /// Path to SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
        /// Print the contributions as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Per-weight overrides applied on top of the config file
#[derive(Args)]
struct WeightOverrides {
    /// Weight of a journal's primary discipline
    #[arg(long)]
    discipline_a: Option<f64>,
    /// Weight of a journal's secondary discipline
    #[arg(long)]
    discipline_b: Option<f64>,
    /// Weight of each overflow discipline
    #[arg(long)]
    discipline_c: Option<f64>,
    /// Weight of a discipline's A domains
    #[arg(long)]
    domain_a: Option<f64>,
    /// Weight of a discipline's B domains
    #[arg(long)]
    domain_b: Option<f64>,
}

impl WeightOverrides {
    fn apply(&self, config: &mut ScoringConfig) {
        let overrides = [
            (self.discipline_a, &mut config.disciplines.a),
            (self.discipline_b, &mut config.disciplines.b),
            (self.discipline_c, &mut config.disciplines.c),
            (self.domain_a, &mut config.domains.a),
            (self.domain_b, &mut config.domains.b),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Get the default database path (~/.local/share/sciencefuzz/sciencefuzz.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("sciencefuzz").join("sciencefuzz.db")
}

fn open_store(db: Option<PathBuf>) -> Result<SqliteStore, String> {
    let db_path = db.unwrap_or_else(default_db_path);
    SqliteStore::open(&db_path)
        .map_err(|e| format!("Failed to open database {}: {}", db_path.display(), e))
}

fn load_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::load(path).map_err(|e| format!("Failed to load catalog {}: {}", path.display(), e))
}

fn print_scores(title: &str, scores: &CategoryScore) {
    println!("{:<40}  {:>10}", title, "SCORE");
    println!("{}", "-".repeat(52));
    for row in scores.iter() {
        println!("{:<40}  {:>10.6}", row.name, row.value);
    }
}

fn print_profile(profile: &ScientistProfile) {
    println!("Scientist: {}", profile.scientist);
    println!();
    println!("{:<40}  {:>10}", "JOURNAL", "COUNT");
    println!("{}", "-".repeat(52));
    for tally in &profile.journals {
        println!("{:<40}  {:>10}", tally.title, tally.count);
    }
    println!();
    print_scores("DISCIPLINE", &profile.disciplines);
    println!();
    print_scores("DOMAIN", &profile.domains);
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_score(
    catalog: &Path,
    scientist: &str,
    config: Option<&Path>,
    weights: &WeightOverrides,
    json: bool,
) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let mut config = match ScoringConfig::resolve(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    weights.apply(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return 1;
    }

    let profile = ProfileScorer::new(&catalog, config).profile(scientist);
    if profile.journals.is_empty() {
        eprintln!("Warning: no catalogued publications for '{}'", scientist);
    }
    if json {
        return print_json(&profile);
    }
    print_profile(&profile);
    0
}

fn cmd_scientists(catalog: &Path) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let scientists = catalog.scientists();
    if scientists.is_empty() {
        println!("No scientists in catalog.");
        return 0;
    }
    for name in scientists {
        println!("{}", name);
    }
    0
}

fn cmd_import(catalog: &Path, db: Option<PathBuf>) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let store = match open_store(db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match import_catalog(&store, &catalog) {
        Ok(summary) => {
            println!(
                "Imported {} publication records for {} scientists \
                 ({} tagged journals, {} disciplines)",
                summary.publications,
                summary.scientists,
                summary.tagged_journals,
                summary.disciplines
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_contributions(scientist: &str, db: Option<PathBuf>, json: bool) -> i32 {
    let store = match open_store(db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match discipline_contributions(&store, scientist) {
        Ok(scores) if json => print_json(&scores),
        Ok(scores) => {
            print_scores("DISCIPLINE", &scores);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Score {
            catalog,
            scientist,
            config,
            weights,
            json,
        } => cmd_score(&catalog, &scientist, config.as_deref(), &weights, json),
        Commands::Scientists { catalog } => cmd_scientists(&catalog),
        Commands::Import { catalog, db } => cmd_import(&catalog, db),
        Commands::Contributions { scientist, db, json } => {
            cmd_contributions(&scientist, db, json)
        }
    };
    std::process::exit(code);
}
