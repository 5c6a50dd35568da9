//! The `greed` binary: parses the command line and runs one game.

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use greed::cast::Cast;
use greed::config::Difficulty;
use greed::config::Settings;
use greed::director::Director;
use greed::gfx::texel::Rgb;
use greed::gfx::Curses;
use greed::input::CloseSignal;
use greed::input::Keyboard;
use greed::timing::SystemClock;

/// Collect the gems, dodge the rocks.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// How fast artifacts fall: 1 (slow), 2, or 3 (fast).
  #[arg(
    short,
    long,
    default_value_t = 1,
    value_parser = clap::value_parser!(i64).range(1..=3)
  )]
  difficulty: i64,

  /// Board width, in cells.
  #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(i64).range(2..=1000))]
  cols: i64,

  /// Board height, in cells.
  #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(2..=1000))]
  rows: i64,

  /// Number of falling artifacts.
  #[arg(long, default_value_t = 40)]
  artifacts: usize,

  /// Target frames per second.
  #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..=240))]
  frame_rate: u32,

  /// Seed for the random number generator.
  #[arg(long)]
  seed: Option<u64>,

  /// Print the measured frame rate on the bottom row.
  #[arg(long)]
  show_fps: bool,

  /// Write logs to this file (filtered by `RUST_LOG`). May also be set with
  /// `GREED_LOG`.
  #[arg(long, value_name = "PATH")]
  log_file: Option<PathBuf>,
}

impl Args {
  fn into_settings(self) -> Settings {
    Settings {
      cols: self.cols,
      rows: self.rows,
      artifacts: self.artifacts,
      frame_rate: self.frame_rate,
      difficulty: Difficulty::from_level(self.difficulty),
      seed: self.seed,
      show_fps: self.show_fps,
      log_file: self
        .log_file
        .or_else(|| std::env::var_os("GREED_LOG").map(PathBuf::from)),
      ..Settings::default()
    }
  }
}

/// Sends logs to `path`, since the terminal itself is taken by the game.
fn init_tracing(path: &Path) -> std::io::Result<()> {
  let file = File::create(path)?;
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_target(false)
    .compact()
    .init();

  std::panic::set_hook(Box::new(|info| {
    let backtrace = std::backtrace::Backtrace::capture();
    tracing::error!(%info, ?backtrace, "panic");
  }));
  Ok(())
}

fn main() {
  let settings = Args::parse().into_settings();

  if let Some(path) = &settings.log_file {
    if let Err(e) = init_tracing(path) {
      eprintln!("greed: cannot open log file {}: {}", path.display(), e);
      process::exit(1);
    }
  }

  let seed = settings.seed.unwrap_or_else(rand::random);
  tracing::info!(seed, "seeded");
  let mut rng = Pcg32::seed_from_u64(seed);
  let mut cast = Cast::new_game(&settings, &mut rng);

  let close = CloseSignal::new();
  let keyboard = Keyboard::new(close.clone());
  let window = Curses::new(&settings, close);
  let mut director = Director::new(keyboard, window, SystemClock::new(), rng);

  let result = director.start_game(&mut cast, &settings, Rgb::new);
  let score = director.score();
  // Restore the terminal before anything is printed to it.
  drop(director);

  match result {
    Ok(()) => println!("Final score: {}", score),
    Err(e) => {
      tracing::error!(error = %e, "game aborted");
      eprintln!("greed: {}", e);
      process::exit(1);
    }
  }
}
