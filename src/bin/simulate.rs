use clap::Parser;
use holdem_sim::config::SimConfig;
use holdem_sim::history;
use holdem_sim::knowledge::Knowledge;
use holdem_sim::simulation::{history_of, simulate, Summary};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

/// Deal many Hold'em hands to showdown and record how each seat's hand
/// category evolved, for training the betting bot.
#[derive(Parser, Debug)]
#[command(name = "holdem-sim", version)]
struct Args {
    /// Seats at the table (2-10)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Number of deals to play
    #[arg(short, long, default_value = "1000")]
    deals: u64,

    /// Base seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play deals one after another instead of across threads
    #[arg(long)]
    serial: bool,

    /// History records output (one line per seat per deal)
    #[arg(short, long, default_value = "records.csv")]
    records: PathBuf,

    /// Also aggregate the records into a knowledge table here
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut config = SimConfig::default()
        .with_players(args.players)
        .with_deals(args.deals)
        .with_seed(seed)
        .with_parallel(!args.serial);
    config.records_path = Some(args.records);
    config.knowledge_path = args.knowledge;

    let started = Instant::now();
    let deals = simulate(&config)?;
    let records = history_of(&deals);
    log::info!("{:<32}{:<32?}", "simulation time", started.elapsed());

    if let Some(path) = config.records_path.as_ref() {
        history::save(path, &records)?;
        log::info!("{:<32}{:<32}", "records written", path.display());
    }
    if let Some(path) = config.knowledge_path.as_ref() {
        let knowledge = Knowledge::from_records(&records);
        knowledge.save(path)?;
        log::info!("{:<32}{:<32}", "knowledge entries", knowledge.len());
    }

    println!("seed: {seed}");
    print!("{}", Summary::from_deals(config.players, &deals));
    Ok(())
}
