use clap::Parser;
use gauntlet_solver::driver::{DriverConfig, RunDriver};
use gauntlet_solver::replay;
use gauntlet_solver::scenario;
use gauntlet_solver::search::{SearchArgs, StrategyKind};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Strategy to run
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Mcts)]
    strategy: StrategyKind,

    /// Scenario seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of enemies in the run
    #[arg(short, long, default_value_t = 5)]
    enemies: usize,

    /// Loot options rolled per victory
    #[arg(long, default_value_t = 3)]
    loot: usize,

    #[command(flatten)]
    search: SearchArgs,

    /// Output file for the run record (JSON)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let scenario = scenario::generate(args.seed, args.enemies);
    let mut strategy = args.search.build(args.strategy);

    let config = DriverConfig {
        loot_count: args.loot,
        ..Default::default()
    };
    let mut driver = match RunDriver::new(scenario.into_run(), config, args.seed) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("bad scenario: {}", err);
            std::process::exit(1);
        }
    };

    let summary = driver.play(strategy.as_mut());
    let record = driver.into_record();

    for line in replay::format_trajectory(&record) {
        println!("{}", line);
    }
    println!(
        "\n{}: defeated {}/{} enemies, survived={}, {} actions",
        strategy.name(),
        summary.enemies_defeated,
        args.enemies,
        summary.survived,
        summary.actions_taken
    );

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&record).expect("serialize run record");
        std::fs::write(&path, json).expect("write output file");
        println!("record written to {}", path);
    }
}
