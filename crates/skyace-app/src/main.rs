//! skyace: headless Neon Sky Ace runner.
//!
//! Usage:
//!   skyace [--config <path>] [--seconds <n>] [--fps <n>] [--seed <n>]
//!
//! Starts a run and flies an autopilot that sweeps the steering input until
//! the craft is destroyed or the time limit passes.

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use skyace_app::control;
use skyace_app::game_loop::DEFAULT_FPS;
use skyace_app::state::AppState;
use skyace_core::commands::PlayerCommand;
use skyace_core::enums::GamePhase;
use skyace_core::types::SteeringInput;
use skyace_sim::engine::SimConfig;

/// How often the driver polls the latest snapshot.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct Cli {
    config: Option<PathBuf>,
    seconds: f64,
    fps: u32,
    seed: Option<u64>,
}

impl Cli {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);
        let mut cli = Cli {
            config: None,
            seconds: 60.0,
            fps: DEFAULT_FPS,
            seed: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().ok_or("--config requires a file path")?;
                    cli.config = Some(PathBuf::from(value));
                }
                "--seconds" => {
                    let value = args.next().ok_or("--seconds requires a number")?;
                    cli.seconds = value
                        .parse()
                        .map_err(|_| format!("invalid --seconds value: {value}"))?;
                }
                "--fps" => {
                    let value = args.next().ok_or("--fps requires a number")?;
                    cli.fps = value
                        .parse::<u32>()
                        .ok()
                        .filter(|&fps| fps > 0)
                        .ok_or_else(|| format!("invalid --fps value: {value}"))?;
                }
                "--seed" => {
                    let value = args.next().ok_or("--seed requires a number")?;
                    cli.seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid --seed value: {value}"))?,
                    );
                }
                "help" | "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                }
                other => return Err(format!("Unknown argument: {other}")),
            }
        }
        Ok(cli)
    }

    fn sim_config(&self) -> SimConfig {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default config");
                SimConfig::default()
            }),
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

fn print_usage() {
    eprintln!(
        "skyace: headless Neon Sky Ace runner\n\
         \n\
           --config <path>  JSON simulation config (seed, time_scale, auto_fire, spawn_targets)\n\
           --seconds <n>    Stop after n seconds of wall time (default: 60)\n\
           --fps <n>        Game loop frame rate (default: 60)\n\
           --seed <n>       Override the config seed\n"
    );
}

/// Slow figure-eight across the steering range.
fn autopilot(t: f64) -> SteeringInput {
    SteeringInput::new((t * 0.7).sin() as f32, (t * 1.4).sin() as f32 * 0.6)
}

fn run(cli: &Cli) -> Result<u64, String> {
    let config = cli.sim_config();
    log::info!("seed {}, {} fps, {} s limit", config.seed, cli.fps, cli.seconds);

    let state = AppState::new();
    control::start_simulation(&state, config, cli.fps)?;
    control::send_command(&state, PlayerCommand::StartRun)?;

    let started = Instant::now();
    let limit = Duration::try_from_secs_f64(cli.seconds.max(0.0)).unwrap_or(Duration::MAX);
    let mut last_score = 0;
    let mut last_multiplier = 1;

    while started.elapsed() < limit {
        control::set_steering(&state, autopilot(started.elapsed().as_secs_f64()))?;
        std::thread::sleep(POLL_INTERVAL);

        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.score != last_score || snapshot.multiplier != last_multiplier {
            log::info!("score {} (x{})", snapshot.score, snapshot.multiplier);
            last_score = snapshot.score;
            last_multiplier = snapshot.multiplier;
        }
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
    }

    control::stop_simulation(&state)?;
    let final_score = control::get_snapshot(&state)?
        .map(|snapshot| snapshot.score)
        .unwrap_or(0);
    Ok(final_score)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(1);
        }
    };

    match run(&cli) {
        Ok(score) => println!("Final score: {score}"),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
