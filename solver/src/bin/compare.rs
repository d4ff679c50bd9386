use clap::Parser;
use gauntlet_solver::driver::{DriverConfig, RunDriver, RunSummary};
use gauntlet_solver::scenario;
use gauntlet_solver::search::{SearchArgs, StrategyKind};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Runs per strategy
    #[arg(short, long, default_value_t = 100)]
    runs: usize,

    /// Number of enemies per run
    #[arg(short, long, default_value_t = 5)]
    enemies: usize,

    /// Base scenario seed; run i uses seed + i
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Loot options rolled per victory
    #[arg(long, default_value_t = 3)]
    loot: usize,

    #[command(flatten)]
    search: SearchArgs,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!(
        "comparing strategies over {} runs x {} enemies (seed {})",
        args.runs, args.enemies, args.seed
    );

    for kind in StrategyKind::ALL {
        // independent seeded runs, one fresh strategy instance each
        let summaries: Vec<RunSummary> = (0..args.runs)
            .into_par_iter()
            .map(|index| {
                let run_seed = args.seed + index as u64;
                let scenario = scenario::generate(run_seed, args.enemies);
                let mut strategy = args.search.build(kind);
                let config = DriverConfig {
                    loot_count: args.loot,
                    ..Default::default()
                };
                let mut driver = RunDriver::new(scenario.into_run(), config, run_seed)
                    .expect("generated scenario is always valid");
                driver.play(strategy.as_mut())
            })
            .collect();

        let total_defeated: usize = summaries.iter().map(|s| s.enemies_defeated).sum();
        let survived = summaries.iter().filter(|s| s.survived).count();

        println!(
            "{:<8} avg enemies defeated: {:.2} | survival rate: {:.1}%",
            kind.name(),
            total_defeated as f64 / args.runs as f64,
            100.0 * survived as f64 / args.runs as f64
        );
    }
}
