use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::time::Duration;
use tracing::info;
use u_balance::instance::Instance;
use u_balance::search::{BalanceRunner, RefineBudget, SearchConfig};
use u_balance::simulate::simulate;

#[derive(Parser)]
#[command(name = "u-balance")]
#[command(about = "Assigns two successors per node so routed demand matches twice each node's own")]
struct Cli {
    /// Random seed; a fresh one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 80)]
    restarts: usize,

    #[arg(long, default_value_t = 1000)]
    restart_iterations: usize,

    #[arg(long, default_value_t = 2000)]
    refine_iterations: usize,

    /// Run refinement until this many milliseconds have passed instead
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Log the replayed walk score of the result
    #[arg(long)]
    simulate: bool,

    /// Print a generated instance for this seed and exit
    #[arg(long, value_name = "SEED")]
    generate: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(seed) = cli.generate {
        print!("{}", Instance::generate(seed));
        return Ok(());
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    let instance = Instance::parse(&input).context("Failed to parse instance")?;

    let refine = match cli.time_limit_ms {
        Some(ms) => RefineBudget::Deadline(Duration::from_millis(ms)),
        None => RefineBudget::Iterations(cli.refine_iterations),
    };
    let mut config = SearchConfig::default()
        .with_restarts(cli.restarts)
        .with_restart_iterations(cli.restart_iterations)
        .with_refine(refine);
    config.seed = cli.seed;

    let result = BalanceRunner::run(&instance, &config).context("Search failed")?;
    info!(
        seed = result.seed,
        best_score = result.best_score,
        baseline_score = result.baseline_score,
        evaluations = result.evaluations,
        "search finished"
    );

    if cli.simulate {
        let sim = simulate(&instance, &result.best);
        info!(score = sim.score, error = sim.error, "walk replay");
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", result.best).context("Failed to write output")?;
    stdout.flush()?;
    Ok(())
}
