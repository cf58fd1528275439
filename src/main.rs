use clap::{Parser, ValueEnum};
use dispatch_sim::core::orders::{load_orders, synthesize};
use dispatch_sim::{run_batch, ConcurrencyMode, Simulation, SimulationConfig, StrategyKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Matched,
    Fifo,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Matched => StrategyKind::Matched,
            StrategyArg::Fifo => StrategyKind::Fifo,
        }
    }
}

/// Simple order-dispatch real-time simulation
#[derive(Debug, Parser)]
#[command(name = "dispatch_sim", version)]
struct Cli {
    /// Fixed seconds between courier dispatch and arrival (random 3-15s when unset)
    #[arg(long)]
    eta: Option<f64>,

    /// Discrete-time run: ignore all inter-event waiting
    #[arg(long)]
    discrete: bool,

    /// Courier dispatch strategy
    #[arg(long, value_enum, default_value = "matched")]
    strategy: StrategyArg,

    /// Shorthand for --strategy fifo
    #[arg(long)]
    fifo: bool,

    /// JSON file with the orders to simulate
    #[arg(long, default_value = "data/dispatch_orders.json")]
    fpath: PathBuf,

    /// Prefix event lines with wall-clock seconds since simulation start
    #[arg(long)]
    timestamp: bool,

    /// Seed for random courier etas and synthetic orders
    #[arg(long)]
    seed: Option<u64>,

    /// Submission time of the first order
    #[arg(long, default_value_t = 0.0)]
    start_time: f64,

    /// Seconds between consecutive order submissions
    #[arg(long, default_value_t = 0.5)]
    interval: f64,

    /// Simulate this many random orders instead of reading --fpath
    #[arg(long)]
    synthetic: Option<usize>,

    /// Run every strategy over the same orders in discrete mode and compare summaries
    #[arg(long)]
    compare: bool,

    /// Worker threads for --compare (parallel when set)
    #[arg(long, requires = "compare")]
    threads: Option<usize>,

    /// Print --compare summaries as JSON
    #[arg(long, requires = "compare")]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let strategy = if self.fifo {
            StrategyKind::Fifo
        } else {
            self.strategy.into()
        };

        let mut config = SimulationConfig::new()
            .with_strategy(strategy)
            .with_timestamps(self.timestamp)
            .with_order_schedule(self.start_time, self.interval);
        config.eta = self.eta;
        config.seed = self.seed;
        config.realtime = !self.discrete;
        if let Some(threads) = self.threads {
            config = config
                .with_concurrency(ConcurrencyMode::Rayon)
                .with_thread_pool_size(threads);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let orders = match cli.synthetic {
        Some(count) => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            synthesize(count, &mut rng)
        }
        None => load_orders(&cli.fpath)?,
    };

    if cli.compare {
        // both runs must see the same courier etas
        let seed = config.seed.unwrap_or_else(rand::random);
        let configs: Vec<_> = [StrategyKind::Matched, StrategyKind::Fifo]
            .into_iter()
            .map(|strategy| {
                config
                    .clone()
                    .with_strategy(strategy)
                    .with_seed(seed)
                    .with_event_reporting(false)
            })
            .collect();

        let summaries = run_batch(&orders, &configs)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            for summary in &summaries {
                println!("[{}] {} pickups", summary.strategy, summary.pickups);
                println!("{}\n", summary);
            }
        }
        return Ok(());
    }

    let mut sim = Simulation::from_config(&config)?;
    sim.add_orders(orders, config.start_time, config.order_interval)?;
    let summary = sim.run();

    println!("\n{}\n", summary);
    Ok(())
}
