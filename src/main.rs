use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rayon::prelude::*;
use sfx::output::{self, ColorMode};
use sfx::utils::AppConfig;
use sfx::{SuffixTree, TreeConfig};
use termcolor::ColorChoice;
use std::io::{IsTerminal, Write};

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Build suffix trees with Ukkonen's algorithm")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Fold uppercase letters to lowercase before building
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Log progress (info level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log construction details (debug level)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every configured sample and list its suffixes (default)
    Demo,
    /// List the suffixes of TEXT in lexicographic order
    Suffixes {
        text: String,

        /// One JSON object per suffix
        #[arg(long)]
        json: bool,
    },
    /// Show construction statistics for TEXT
    Stats {
        text: String,

        #[arg(long)]
        json: bool,
    },
    /// Find every occurrence of PATTERN in TEXT
    Find { text: String, pattern: String },
    /// Verify the structural invariants of the tree for TEXT
    Check { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli);

    let mut config = AppConfig::load()?;
    if cli.ignore_case {
        config.case_insensitive = true;
    }
    let color = cli.color.choice(config.color, std::io::stdout().is_terminal());
    let tree_config = config.tree_config();
    debug!("configuration: {:?}", config);

    match cli.command {
        None | Some(Commands::Demo) => {
            run_demo(&config.samples, &tree_config, color)?;
        }
        Some(Commands::Suffixes { text, json }) => {
            let tree = build(&text, &tree_config)?;
            let mut stdout = output::stdout(color);
            if json {
                output::write_suffixes_json(&mut stdout, &tree)?;
            } else {
                output::write_suffixes(&mut stdout, &tree)?;
            }
        }
        Some(Commands::Stats { text, json }) => {
            let tree = build(&text, &tree_config)?;
            let mut stdout = output::stdout(color);
            if json {
                output::write_stats_json(&mut stdout, &tree)?;
            } else {
                output::write_stats(&mut stdout, &tree)?;
            }
        }
        Some(Commands::Find { text, pattern }) => {
            let tree = build(&text, &tree_config)?;
            let pattern = if tree_config.case_insensitive {
                pattern.to_ascii_lowercase()
            } else {
                pattern
            };
            let positions = tree.find_all(&pattern);
            info!("{} occurrence(s) of {:?}", positions.len(), pattern);

            let mut stdout = output::stdout(color);
            output::write_matches(&mut stdout, &tree, &pattern, &positions)?;
            if positions.is_empty() {
                std::process::exit(1);
            }
        }
        Some(Commands::Check { text }) => {
            let tree = build(&text, &tree_config)?;
            tree.check_invariants()
                .with_context(|| format!("suffix tree for {:?} is invalid", text))?;
            println!(
                "ok: {} nodes, {} leaves, {} suffix links checked",
                tree.node_count(),
                tree.leaf_count(),
                tree.node_count() - tree.leaf_count() - 1
            );
        }
    }

    Ok(())
}

/// Log level from flags; `RUST_LOG` wins when set
fn init_logger(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build(text: &str, config: &TreeConfig) -> Result<SuffixTree> {
    SuffixTree::build_with(text, config)
        .with_context(|| format!("failed to build suffix tree for {:?}", text))
}

/// Build all samples in parallel, then print them in input order
fn run_demo(samples: &[String], config: &TreeConfig, color: ColorChoice) -> Result<()> {
    let trees = samples
        .par_iter()
        .map(|sample| build(sample, config))
        .collect::<Result<Vec<_>>>()?;
    info!("built {} sample trees", trees.len());

    let mut stdout = output::stdout(color);
    for tree in &trees {
        output::write_suffixes(&mut stdout, tree)?;
        writeln!(stdout)?;
    }

    Ok(())
}
