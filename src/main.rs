use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use songlab::{CohortPresets, Config, Outcome, assets, build_history, clusterer::norm};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const EMPTY_HISTORY_MESSAGE: &str =
    "Select at least one song (either via cohort or manually) to get a recommendation.";

const NO_CANDIDATES_MESSAGE: &str = "No new songs left in your favorite cluster. \
     Try selecting a different cohort or adding new songs.";

const HOW_IT_WORKS: &str = "\
How it works:
  1. You optionally pick a preset cohort (--cohort) to autofill a set of songs.
  2. You can also add any extra songs from the full list (--song).
  3. We infer each selected song's cluster and find your most-listened cluster.
  4. We recommend a song you haven't heard yet, drawn from the ones closest to
     that cluster's centroid.";

#[derive(Parser)]
#[command(name = "songlab", version, about = "Cluster-based song recommendations")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend a song from your listening history
    Recommend {
        /// Preset cohort to seed the history with (repeatable, kept in order)
        #[arg(long = "cohort", value_name = "NAME")]
        cohorts: Vec<String>,

        /// Song you have listened to (repeatable, appended after cohort songs)
        #[arg(long = "song", value_name = "NAME")]
        songs: Vec<String>,

        /// Seed for the random pick among the closest candidates
        #[arg(long)]
        seed: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Skip the explanatory text
        #[arg(long, short)]
        quiet: bool,
    },

    /// List every song in the table
    Songs,

    /// List the preset cohorts
    Cohorts {
        /// Also list the songs of each cohort
        #[arg(long)]
        expand: bool,
    },

    /// Show cluster sizes and centroids
    Clusters,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Recommend {
            cohorts,
            songs,
            seed,
            json,
            quiet,
        } => recommend(&cli.config, &cohorts, &songs, seed, json, quiet),
        Command::Songs => list_songs(&cli.config),
        Command::Cohorts { expand } => {
            list_cohorts(expand);
            Ok(())
        }
        Command::Clusters => list_clusters(&cli.config),
    }
}

fn recommend(
    config: &Config,
    cohort_names: &[String],
    songs: &[String],
    seed: Option<u64>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let assets = assets::cached(config).context("Failed to load assets")?;

    let presets = CohortPresets::builtin();
    let cohorts = presets.resolve(cohort_names)?;

    for song in songs {
        if !assets.table.contains(song) {
            warn!(song = %song, "song not in table, it will be ignored");
        }
    }

    let history = build_history(&cohorts, songs);

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let outcome = assets
        .recommender(config)
        .recommend(&history, &mut rng)
        .context("Recommendation failed")?;

    if json {
        let out = serde_json::to_string_pretty(&outcome)
            .context("Failed to serialize recommendation")?;
        println!("{}", out);
        return Ok(());
    }

    match outcome {
        Outcome::EmptyHistory => {
            println!("ℹ {}", EMPTY_HISTORY_MESSAGE);
            return Ok(());
        }
        Outcome::NoCandidates { cluster } => {
            println!("⚠ {} (cluster {})", NO_CANDIDATES_MESSAGE, cluster);
            return Ok(());
        }
        Outcome::Recommended(rec) => {
            println!("History: {} songs", history.len());
            println!("\n🎯 Your next recommendation:");
            println!("✓ {} (from cluster {})", rec.song, rec.cluster);
        }
    }

    if !quiet {
        println!("\n{}", "-".repeat(50));
        println!("{}", HOW_IT_WORKS);
    }

    Ok(())
}

fn list_songs(config: &Config) -> Result<()> {
    let assets = assets::cached(config).context("Failed to load assets")?;
    for name in assets.table.names() {
        println!("{}", name);
    }
    Ok(())
}

fn list_cohorts(expand: bool) {
    let presets = CohortPresets::builtin();
    for cohort in presets.iter() {
        println!("{} ({} songs)", cohort.name, cohort.songs.len());
        if expand {
            for song in &cohort.songs {
                println!("  - {}", song);
            }
        }
    }
}

fn list_clusters(config: &Config) -> Result<()> {
    let assets = assets::cached(config).context("Failed to load assets")?;

    let mut clusters = assets.model.clusters();
    clusters.sort_by_key(|c| std::cmp::Reverse(c.size()));

    println!("=== Clusters ({}) ===", clusters.len());
    for cluster in &clusters {
        let drift = cluster
            .drift(&assets.table)
            .map(|d| format!("{:.3}", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  Cluster {:3}: {:4} songs, |centroid| {:.3}, drift {}",
            cluster.id,
            cluster.size(),
            norm(&cluster.centroid),
            drift
        );
    }
    Ok(())
}
