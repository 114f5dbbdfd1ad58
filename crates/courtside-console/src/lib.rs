//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats schedule search events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end
//! - **DEBUG**: Each new best score
//! - **TRACE**: Every trial

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "courtside_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, e.g. `RUST_LOG=courtside_solver=debug` to see every
/// improvement.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("courtside") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    threads: Option<String>,
    roster_size: Option<u64>,
    games: Option<u64>,
    universe_size: Option<u64>,
    trials: Option<u64>,
    trial: Option<u64>,
    perfect_count: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "threads" => self.threads = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "roster_size" => self.roster_size = Some(value),
            "games" => self.games = Some(value),
            "universe_size" => self.universe_size = Some(value),
            "trials" => self.trials = Some(value),
            "trial" => self.trial = Some(value),
            "perfect_count" => self.perfect_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "threads" => self.threads = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "new_best" => format_new_best(v),
        "trial" => format_trial(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let roster = v.roster_size.unwrap_or(0);
    let games = v.games.unwrap_or(0);
    let universe = v.universe_size.unwrap_or(0);
    let trials = v.trials.unwrap_or(0);
    let space = calculate_search_space(universe, games);

    let mut output = format!(
        "{} {} Searching │ {} players │ {} games │ {} matchups │ space {} │ {} trials",
        format_elapsed(),
        "▶".bright_green().bold(),
        roster.to_formatted_string(&Locale::en).bright_yellow(),
        games.to_formatted_string(&Locale::en).bright_yellow(),
        universe.to_formatted_string(&Locale::en).bright_yellow(),
        space.bright_magenta(),
        trials.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let Some(threads) = v.threads.as_deref() {
        output.push_str(&format!(" │ threads {}", threads.white()));
    }

    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let trials = v.trials.unwrap_or(0);
    let perfect = v.perfect_count.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);

    format!(
        "{} {} Search complete │ {} │ {} trials │ {} trials/s │ {} perfect │ best {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        trials.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        perfect.to_formatted_string(&Locale::en).bright_green(),
        format_score(score),
    )
}

// Improvements arrive after the batch, so the clock column shows when the
// trial finished rather than when the event was logged.
fn format_new_best(v: &EventVisitor) -> String {
    let trial = v.trial.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");
    let at = match v.elapsed_ms {
        Some(ms) => format!("{:>7.3}s", ms as f64 / 1000.0)
            .bright_black()
            .to_string(),
        None => format_elapsed(),
    };

    format!(
        "{} {} Trial {:>10} │ new best {}",
        at,
        "★".bright_yellow(),
        trial.to_formatted_string(&Locale::en).white(),
        format_score(score)
    )
}

fn format_trial(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let trial = v.trial.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} Trial {:>10} │ {}",
        format_elapsed(),
        "·".bright_black(),
        trial.to_formatted_string(&Locale::en).bright_black(),
        score.bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Zero totals are green, anything else yellow.
fn format_score(score: &str) -> String {
    let total = score
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<f64>().ok());

    match total {
        Some(t) if t == 0.0 => score.bright_green().bold().to_string(),
        Some(_) => score.yellow().to_string(),
        None => score.white().to_string(),
    }
}

/// Number of possible schedules, `C(universe, games)`, in scientific notation.
fn calculate_search_space(universe: u64, games: u64) -> String {
    if games == 0 || games > universe {
        return "0".to_string();
    }

    let k = games.min(universe - games);
    let log_scale: f64 = (0..k)
        .map(|i| ((universe - i) as f64).log10() - ((i + 1) as f64).log10())
        .sum();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
