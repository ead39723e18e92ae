//! Social chess CLI
//!
//! Pair a roster into a schedule, or play out a whole evening with simulated
//! results and resolve the playoff.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use tournament::{
    load_roster, Schedule, ScheduleRecord, Tournament, TournamentConfig, TournamentReport,
};
use tracing::{info, Level};

fn print_usage() {
    println!("Social Chess Tournament");
    println!();
    println!("Usage:");
    println!("  tournament schedule <roster.json> [--config F] [--seed N] [--out F]");
    println!("  tournament simulate <roster.json> [--config F] [--seed N] [--out F]");
    println!();
    println!("Options:");
    println!("  --config, -c F   tournament settings (TOML)");
    println!("  --seed, -s N     seed for shuffling and simulated results");
    println!("  --out, -o F      write the schedule (or the final report) as JSON");
    println!("  --verbose, -v    log pairing and scoring detail to stderr");
    println!();
    println!("Roster format:");
    println!("  [{{\"id\": 1, \"name\": \"Ann\", \"level\": 4, \"vip\": false, \"late\": false}}, ...]");
    println!();
    println!("Examples:");
    println!("  tournament schedule players.json --seed 7 --out schedule.json");
    println!("  tournament simulate players.json --config night.toml");
}

struct Options {
    roster: PathBuf,
    config: Option<PathBuf>,
    seed: Option<u64>,
    out: Option<PathBuf>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let Some(roster) = args.first() else {
        bail!("a roster file is required");
    };

    let mut options = Options {
        roster: PathBuf::from(roster),
        config: None,
        seed: None,
        out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    options.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    let seed = args[i + 1]
                        .parse()
                        .with_context(|| format!("invalid seed: {}", args[i + 1]))?;
                    options.seed = Some(seed);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    options.out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<TournamentConfig> {
    match &options.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(TournamentConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn build_schedule(options: &Options, config: &TournamentConfig, rng: &mut StdRng) -> Result<Schedule> {
    let roster = load_roster(&options.roster)
        .with_context(|| format!("loading roster {}", options.roster.display()))?;
    info!("Loaded {} players", roster.len());
    Ok(Schedule::generate(roster, config, rng)?)
}

fn run_schedule(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let config = load_config(&options)?;
    let mut rng = make_rng(options.seed);

    let schedule = build_schedule(&options, &config, &mut rng)?;
    let layout = schedule.layout();

    println!("=== {} ===", config.title);
    println!(
        "Players: {}, Boards: {}, Lopsided: {}, Bye: {}",
        layout.players, layout.boards, layout.lopsided, layout.bye
    );
    println!();
    print!("{}", schedule.describe_rounds(&config.round_times)?);
    println!();
    print!("{}", schedule.describe_draws()?);

    if let Some(path) = &options.out {
        ScheduleRecord::from_schedule(&config.title, &schedule, &config.round_times)?
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nSchedule written to {}", path.display());
    }
    Ok(())
}

fn run_simulate(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let config = load_config(&options)?;
    let mut rng = make_rng(options.seed);

    let schedule = build_schedule(&options, &config, &mut rng)?;
    let mut tournament = Tournament::new(schedule, &config);
    tournament.simulate_results(&mut rng);

    println!("=== {} ===", tournament.name());
    for set in tournament.schedule().rounds() {
        for &id in set {
            let game = tournament.schedule().game(id)?;
            if !game.is_bye() {
                println!("{}", game.result_summary()?);
            }
        }
    }
    println!();

    let outcome = tournament.playoff_candidates()?;
    if outcome.is_resolved() {
        let playoff = tournament.schedule_playoff()?;
        println!("Playoff: {}", playoff);
        tournament.simulate_playoff(&mut rng)?;
    } else {
        eprintln!(
            "Warning: {} players could not be separated for the playoff",
            outcome.finalists.len()
        );
    }

    let report = TournamentReport::from_tournament(&tournament)?;
    report.print_report();

    if let Some(path) = &options.out {
        report
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "schedule" => run_schedule(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
