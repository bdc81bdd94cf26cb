use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use infinite_list::{CacheStats, InfiniteList, Item, ListConfig, Recurrence};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

type Rule = Box<dyn Fn(&f64, Option<&f64>) -> f64>;

#[derive(Parser, Debug)]
#[command(name = "infinity", about = "Explore lazily generated infinite lists")]
struct Cli {
    /// Built-in sequence to generate.
    #[arg(long, value_enum, default_value_t = Kind::Arithmetic)]
    sequence: Kind,
    /// First element of the sequence.
    #[arg(long, default_value_t = 0.0)]
    start: f64,
    /// Step (arithmetic) or ratio (geometric); ignored for fibonacci.
    #[arg(long, default_value_t = 2.0)]
    step: f64,
    /// Keep at most this many values memoized.
    #[arg(long)]
    cache_limit: Option<usize>,
    /// Print cache statistics as JSON after the command.
    #[arg(long)]
    stats: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    /// start, start + step, start + 2 * step, ...
    Arithmetic,
    /// start, start * step, start * step^2, ...
    Geometric,
    /// start, start + 1, then the sum of the previous two
    Fibonacci,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a short preview of the list.
    Show,
    /// Print the element at an index (`inf` for the end of the list).
    Get {
        /// Position to read; negative or fractional input is reported as missing.
        #[arg(allow_hyphen_values = true)]
        index: f64,
    },
    /// Print the first N elements.
    Take {
        /// Number of elements, starting at index 0.
        count: usize,
    },
    /// Print the elements from FROM to TO inclusive.
    Range {
        /// First index to print.
        from: usize,
        /// Last index to print.
        to: usize,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a ListConfig,
    cached: usize,
    window_start: usize,
    stats: CacheStats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ListConfig::unbounded();
    if let Some(limit) = cli.cache_limit {
        config = config.with_cache_limit(limit);
    }
    let list = InfiniteList::with_config(cli.start, rule(cli.sequence, cli.step), config)
        .context("invalid list configuration")?;

    match cli.command {
        Commands::Show => println!("{}", list),
        Commands::Get { index } => match list.get(index) {
            Some(item) => print_item(&item),
            None => println!("no element at index {}", index),
        },
        Commands::Take { count } => list.take(count).iter().for_each(|item| print_item(item)),
        Commands::Range { from, to } => list
            .take_range(from, to)
            .iter()
            .for_each(|item| print_item(item)),
    }

    if cli.stats {
        let report = Report {
            config: list.config(),
            cached: list.cached_len(),
            window_start: list.window_start(),
            stats: list.stats(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize statistics")?
        );
    }

    Ok(())
}

fn rule(kind: Kind, step: f64) -> Rule {
    match kind {
        Kind::Arithmetic => Box::new(move |x: &f64, _: Option<&f64>| x + step),
        Kind::Geometric => Box::new(move |x: &f64, _: Option<&f64>| x * step),
        Kind::Fibonacci => {
            Box::new(|x: &f64, before: Option<&f64>| before.map_or(x + 1.0, |b| x + b))
        }
    }
}

fn print_item<R: Recurrence<f64>>(item: &Item<'_, f64, R>) {
    println!("{}\t{}", item.index(), item);
}
