use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_cpu_schedule::models::{ProcessSpec, Ticks};
use u_cpu_schedule::validation::{parse_times, validate_input};
use u_cpu_schedule::workload::WorkloadGenerator;
use u_cpu_schedule::{report, Discipline, SimulationRequest, SimulationResult};

/// Round Robin and SRTF CPU scheduling simulator
#[derive(Parser)]
#[command(name = "u-cpu-schedule", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate Round Robin
    Rr {
        /// Time quantum in ticks
        #[arg(short, long)]
        quantum: Ticks,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Simulate Shortest Remaining Time First
    Srtf {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Run both disciplines on the same workload
    Compare {
        /// Round Robin time quantum in ticks
        #[arg(short, long)]
        quantum: Ticks,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Run a JSON request file
    Run {
        /// Path to the request
        config: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Space-separated arrival times, e.g. "0 1 2"
    #[arg(short, long, required_unless_present = "random")]
    arrivals: Option<String>,

    /// Space-separated burst times, e.g. "5 3 1"
    #[arg(short, long, required_unless_present = "random")]
    bursts: Option<String>,

    /// Declared number of processes (defaults to the number of arrivals)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Generate this many random processes instead
    #[arg(long, conflicts_with_all = ["arrivals", "bursts", "count"])]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl InputArgs {
    fn resolve(&self, quantum: Option<Ticks>) -> Result<Vec<ProcessSpec>> {
        if let Some(count) = self.random {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            let specs = WorkloadGenerator::new()
                .with_process_count(count)
                .generate(&mut rng);
            info!(count = specs.len(), seed = self.seed, "generated random workload");
            return Ok(specs);
        }

        let arrivals = parse_times("arrival times", self.arrivals.as_deref().unwrap_or(""))
            .map_err(|e| anyhow::anyhow!(e.message))?;
        let bursts = parse_times("burst times", self.bursts.as_deref().unwrap_or(""))
            .map_err(|e| anyhow::anyhow!(e.message))?;
        let count = self.count.unwrap_or(arrivals.len());

        if let Err(errors) = validate_input(count, &arrivals, &bursts, quantum) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            bail!("invalid input: {}", messages.join("; "));
        }

        Ok(ProcessSpec::from_lists(&arrivals, &bursts))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let results = match cli.command {
        Commands::Rr { quantum, input } => {
            let specs = input.resolve(Some(quantum))?;
            vec![SimulationRequest::new(Discipline::round_robin(quantum), specs).run()?]
        }
        Commands::Srtf { input } => {
            let specs = input.resolve(None)?;
            vec![SimulationRequest::new(Discipline::Srtf, specs).run()?]
        }
        Commands::Compare { quantum, input } => {
            let specs = input.resolve(Some(quantum))?;
            [Discipline::round_robin(quantum), Discipline::Srtf]
                .into_iter()
                .map(|d| SimulationRequest::new(d, specs.clone()).run())
                .collect::<Result<Vec<_>, _>>()?
        }
        Commands::Run { config } => {
            let request = SimulationRequest::from_path(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            vec![request.run()?]
        }
    };

    print_results(&results, cli.json)
}

fn print_results(results: &[SimulationResult], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    for result in results {
        println!("{}", report::render(result));
    }
    if results.len() > 1 {
        println!("{}", report::comparison_table(results));
    }
    Ok(())
}
