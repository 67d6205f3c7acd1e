use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use clique_percolation::data::load_graph_definition;
use clique_percolation::{percolate, storage, viz, Config, SymmetryPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "clique-percolation",
    about = "Find k-clique communities with the clique percolation method"
)]
struct Cli {
    /// Size of the cliques to percolate
    #[arg(short, default_value = "3")]
    k: usize,

    /// Graph definition file (`label: neighbor neighbor ...` per line)
    graph: PathBuf,

    /// Directory to save JSON results and visualization files to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Minimum number of nodes for a community to be reported
    #[arg(long, default_value = "0")]
    min_community_size: usize,

    /// Fail on edges declared in one direction only instead of adding the reverse
    #[arg(long)]
    strict_symmetry: bool,

    /// Search for cliques on a single thread
    #[arg(long)]
    sequential: bool,

    /// Skip visualization files when saving results
    #[arg(long)]
    skip_viz: bool,

    /// Number of worker threads (0 = use all available cores)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let symmetry = if args.strict_symmetry {
        SymmetryPolicy::Reject
    } else {
        SymmetryPolicy::Repair
    };
    let config = Config::new(args.k, args.min_community_size, !args.sequential, symmetry);
    config.validate()?;

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // 1. Load graph
    let graph = load_graph_definition(&args.graph, config.symmetry)?;

    // 2. Cliques, community graph, communities
    let result = percolate(&graph, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "k= {}", config.k)?;
    writeln!(out, "The original graph")?;
    writeln!(out, "------------------")?;
    viz::write_graph(&mut out, &graph)?;
    writeln!(out)?;
    writeln!(out, "Community graph:")?;
    writeln!(out, "----------------")?;
    viz::write_graph(&mut out, &result.community_graph)?;
    writeln!(out)?;
    writeln!(out, "Communities:")?;
    writeln!(out, "------------")?;
    if result.communities.is_empty() {
        writeln!(out, "none")?;
    }
    for community in &result.communities {
        let members: Vec<&str> = community.members.iter().map(|&id| graph.label(id)).collect();
        writeln!(
            out,
            "{}: {} (cliques: {}, density: {:.3})",
            community.id,
            members.join(" "),
            community.cliques.len(),
            community.density
        )?;
    }
    out.flush()?;

    // 3. Save results
    if let Some(output_dir) = &args.output_dir {
        storage::save_results(&graph, &result, output_dir)?;

        if !args.skip_viz {
            viz::generate_visualizations(&graph, &result, output_dir)?;
        }

        log::info!("Results saved to {}", output_dir.display());
    }

    Ok(())
}
