use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cartree::{CartesianTree, QueryMode, TreeConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SAMPLE: [i64; 11] = [9, 3, 7, 1, 8, 12, 10, 20, 15, 18, 5];

#[derive(Parser, Debug)]
#[command(name = "cartree", about = "Cartesian tree construction and range minimum queries")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the sample sequence, print its traversal and the minimum over [2, 8].
    Demo,
    /// Print the in-order traversal of a sequence.
    Traverse {
        #[command(flatten)]
        input: InputArgs,
        /// Also print the tree shape, one node per line.
        #[arg(long)]
        shape: bool,
    },
    /// Print the minimum over an inclusive index range.
    Query {
        #[command(flatten)]
        input: InputArgs,
        /// First index of the range.
        #[arg(long)]
        lo: usize,
        /// Last index of the range (inclusive).
        #[arg(long)]
        hi: usize,
    },
}

/// Query strategy as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeArg {
    /// Stop at the first in-range node.
    Pruned,
    /// Visit every in-range node.
    Exhaustive,
}

impl From<ModeArg> for QueryMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pruned => QueryMode::Pruned,
            ModeArg::Exhaustive => QueryMode::Exhaustive,
        }
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Values, comma or whitespace separated.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
    /// Read values from a file instead.
    #[arg(long, conflicts_with = "values")]
    input: Option<PathBuf>,
    /// Query strategy.
    #[arg(long, value_enum, default_value_t = ModeArg::Pruned)]
    mode: ModeArg,
    /// Verify heap and index order after building.
    #[arg(long)]
    verify: bool,
}

impl InputArgs {
    fn load(&self) -> Result<CartesianTree<i64>> {
        let values = match &self.input {
            Some(path) => read_values_file(path)?,
            None => parse_values(&self.values.join(" "))?,
        };
        let config = TreeConfig::default()
            .with_query_mode(self.mode.into())
            .with_verification(self.verify);

        let tree = CartesianTree::with_config(values, config).context("failed to build tree")?;
        debug!(stats = ?tree.build_stats(), height = tree.height(), "tree ready");
        Ok(tree)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Traverse { input, shape } => run_traverse(&input.load()?, shape),
        Commands::Query { input, lo, hi } => run_query(&input.load()?, lo, hi),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() {
    let tree = CartesianTree::build(SAMPLE);
    info!(len = tree.len(), "demo tree built");

    let original: Vec<String> = SAMPLE.iter().map(|v| v.to_string()).collect();
    println!("Original array: {}", original.join(" "));
    println!("Cartesian Tree (in-order traversal):");
    println!("{}", tree);

    let (lo, hi) = (2, 8);
    print_min(&tree, lo, hi);
}

fn run_traverse(tree: &CartesianTree<i64>, shape: bool) {
    println!("{}", tree);

    if shape {
        for (id, depth) in tree.depth_first() {
            if let Some(node) = tree.node(id) {
                println!("{}{}", "  ".repeat(depth), node);
            }
        }
    }
}

fn run_query(tree: &CartesianTree<i64>, lo: usize, hi: usize) {
    print_min(tree, lo, hi);
}

fn print_min(tree: &CartesianTree<i64>, lo: usize, hi: usize) {
    println!("{}", describe_min(tree, lo, hi));
}

fn describe_min(tree: &CartesianTree<i64>, lo: usize, hi: usize) -> String {
    match tree
        .range_min_index(lo, hi)
        .and_then(|index| tree.get(index).map(|value| (value, index)))
    {
        Some((value, index)) => format!(
            "Minimum value in range [{}, {}]: {} (index {})",
            lo, hi, value, index
        ),
        None => format!("Minimum value in range [{}, {}]: no minimum", lo, hi),
    }
}

fn read_values_file(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read values from {}", path.display()))?;
    parse_values(&contents).with_context(|| format!("invalid values in {}", path.display()))
}

fn parse_values(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(pos, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid value '{}' at position {}", token, pos))
        })
        .collect()
}
