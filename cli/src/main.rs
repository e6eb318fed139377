//! Command-line front end for offline tuning and registry-backed draws

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use tuned_rng_core_rs::tuning::static_tuning_candidates;
use tuned_rng_core_rs::{
    shuffle, BitSource, InstanceRegistry, JsonFileStore, OfflineTuner, RangeKey, TunerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "tuned-rng", version, about = "Shift-pair tuning and draws")]
struct Cli {
    /// Print registry events to stderr
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tune one (seed, increment) pair and print the record as JSON
    Tune(TuneArgs),
    /// Tune a grid of seeds and increments and keep the best record
    Sweep(SweepArgs),
    /// Draw integers for a range through the registry
    Draw(DrawArgs),
    /// Shuffle the given items with the generator for their count
    Shuffle(ShuffleArgs),
}

#[derive(Args, Debug)]
struct TunerArgs {
    /// Tuner config JSON file (fields default when omitted)
    #[arg(long)]
    tuner_config: Option<PathBuf>,

    /// One-bit samples per candidate (overrides the config file)
    #[arg(long)]
    sample_size: Option<usize>,

    /// Score only the first N candidates (overrides the config file)
    #[arg(long)]
    max_candidates: Option<usize>,
}

impl TunerArgs {
    fn build(&self) -> Result<OfflineTuner> {
        let mut config = match &self.tuner_config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                TunerConfig::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => TunerConfig::default(),
        };
        if let Some(sample_size) = self.sample_size {
            config.sample_size = sample_size;
        }
        if self.max_candidates.is_some() {
            config.max_candidates = self.max_candidates;
        }
        Ok(OfflineTuner::new(config)?)
    }
}

#[derive(Args, Debug)]
struct TuneArgs {
    #[arg(long, allow_hyphen_values = true)]
    seed: i64,

    #[arg(long, allow_hyphen_values = true)]
    increment: i64,

    #[command(flatten)]
    tuner: TunerArgs,
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Comma-separated seeds; defaults to the static candidate set
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    seeds: Vec<i64>,

    /// Comma-separated increments; defaults to the static candidate set
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    increments: Vec<i64>,

    /// Use only the first N seeds and increments
    #[arg(long)]
    limit: Option<usize>,

    /// Store the best record under this range (START..=END)
    #[arg(long, requires = "table", allow_hyphen_values = true)]
    range: Option<RangeKey>,

    /// Tuning table to update with the best record
    #[arg(long)]
    table: Option<PathBuf>,

    #[command(flatten)]
    tuner: TunerArgs,
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Output range (START..=END)
    #[arg(long, allow_hyphen_values = true)]
    range: RangeKey,

    /// Tuning table to restore generators from
    #[arg(long)]
    table: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    count: usize,
}

#[derive(Args, Debug)]
struct ShuffleArgs {
    /// Tuning table to restore generators from
    #[arg(long)]
    table: Option<PathBuf>,

    items: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Tune(args) => run_tune(args),
        Command::Sweep(args) => run_sweep(args),
        Command::Draw(args) => run_draw(args, cli.verbose),
        Command::Shuffle(args) => run_shuffle(args, cli.verbose),
    }
}

fn run_tune(args: TuneArgs) -> Result<()> {
    let tuner = args.tuner.build()?;
    let record = tuner.tune(args.seed, args.increment);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn run_sweep(args: SweepArgs) -> Result<()> {
    let tuner = args.tuner.build()?;
    let (static_seeds, static_increments) = static_tuning_candidates();

    let mut seeds = if args.seeds.is_empty() { static_seeds } else { args.seeds };
    let mut increments = if args.increments.is_empty() {
        static_increments
    } else {
        args.increments
    };
    if let Some(limit) = args.limit {
        seeds.truncate(limit);
        increments.truncate(limit);
    }

    let Some(best) = tuner.sweep(&seeds, &increments) else {
        bail!("nothing to sweep: empty seed or increment list");
    };
    println!("{}", serde_json::to_string_pretty(&best)?);

    if let (Some(range), Some(path)) = (args.range, args.table) {
        let table = JsonFileStore::new(&path).read_table()?.upsert(range, best)?;
        fs::write(&path, table.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("stored {} in {}", range, path.display());
    }
    Ok(())
}

fn registry(table: Option<PathBuf>) -> InstanceRegistry {
    match table {
        Some(path) => {
            let registry = InstanceRegistry::new(JsonFileStore::new(path));
            registry.preload_instances();
            registry
        }
        None => InstanceRegistry::empty(),
    }
}

fn print_events(registry: &InstanceRegistry) {
    for event in registry.events().events() {
        eprintln!("[{}] {:?}", event.event_type(), event);
    }
}

fn run_draw(args: DrawArgs, verbose: bool) -> Result<()> {
    let RangeKey { start, end } = args.range;
    if start > end {
        bail!("empty range {}", args.range);
    }
    // Inclusive end; i32::MAX cannot be reached through an exclusive bound
    let until = end.checked_add(1).context("range end must be below i32::MAX")?;

    let registry = registry(args.table);
    let rng = registry.get_instance(args.range);
    {
        let mut rng = rng
            .lock()
            .map_err(|_| anyhow::anyhow!("generator lock poisoned"))?;
        for _ in 0..args.count {
            println!("{}", rng.next_int_range(start, until)?);
        }
    }

    if verbose {
        print_events(&registry);
    }
    Ok(())
}

fn run_shuffle(args: ShuffleArgs, verbose: bool) -> Result<()> {
    let registry = registry(args.table);
    let len = i32::try_from(args.items.len()).context("too many items")?;
    let rng = registry.get_instance(RangeKey::new(0, (len - 1).max(0)));

    let shuffled = {
        let mut rng = rng
            .lock()
            .map_err(|_| anyhow::anyhow!("generator lock poisoned"))?;
        shuffle(&args.items, &mut *rng)?
    };
    println!("{}", shuffled.join(" "));

    if verbose {
        print_events(&registry);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_accepts_negative_range() {
        let cli = Cli::try_parse_from([
            "tuned-rng", "sweep", "--range", "-3..=3", "--table", "t.json",
        ])
        .unwrap();
        match cli.command {
            Command::Sweep(args) => assert_eq!(args.range, Some(RangeKey::new(-3, 3))),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_draw_accepts_negative_range() {
        let cli = Cli::try_parse_from(["tuned-rng", "draw", "--range", "-10..=-1"]).unwrap();
        match cli.command {
            Command::Draw(args) => assert_eq!(args.range, RangeKey::new(-10, -1)),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
