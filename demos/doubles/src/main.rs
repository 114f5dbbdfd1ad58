//! Doubles Schedule Demo
//!
//! Generates a doubles volleyball schedule for a small roster: every
//! player should play about equally often and partners should rotate
//! evenly. Prints the fairest schedules found.
//!
//! ```text
//! cargo run -p doubles -- --players 6 --games 12 --trials 100000 --top 3
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use courtside::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Find fair doubles volleyball schedules")]
struct Args {
    /// TOML file with search settings; flags override it.
    #[arg(long, default_value = "search.toml")]
    config: PathBuf,

    /// Number of players on the roster.
    #[arg(long)]
    players: Option<usize>,

    /// Games per schedule.
    #[arg(long)]
    games: Option<usize>,

    /// Schedules to sample.
    #[arg(long)]
    trials: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// How many ranked schedules to print.
    #[arg(long, default_value_t = 3)]
    top: usize,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::load(&self.config).unwrap_or_default();
        if let Some(players) = self.players {
            config = config.with_roster_size(players);
        }
        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.search_config();
    let Ok(roster_size) = u16::try_from(config.roster_size) else {
        eprintln!("error: roster of {} players is too large", config.roster_size);
        return ExitCode::FAILURE;
    };

    match courtside::plan(&config) {
        Ok(result) => {
            for (rank, candidate) in result.top(args.top).iter().enumerate() {
                print_candidate(rank, candidate, roster_size);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_candidate(rank: usize, candidate: &Candidate, roster_size: u16) {
    let scored = &candidate.scored;
    println!(
        "\n#{} (trial {}) score {}",
        rank + 1,
        candidate.trial,
        scored.score()
    );
    for (game, matchup) in scored.schedule().iter().enumerate() {
        println!("  game {:>2}: {}", game + 1, matchup);
    }

    let plays: Vec<String> = scored
        .player_counts()
        .iter()
        .map(|(player, count)| format!("{player}:{count}"))
        .collect();
    println!("  games per player: {}", plays.join(" "));

    let partners: Vec<String> = scored
        .team_counts()
        .iter()
        .map(|(team, count)| format!("{team}x{count}"))
        .collect();
    println!("  teams: {}", partners.join(" "));

    let missing = scored.missing_players(roster_size);
    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(|p| p.to_string()).collect();
        println!("  sitting out: {}", ids.join(" "));
    }
}
