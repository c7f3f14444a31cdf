mod broadcaster;
mod config;
mod input;

use clap::Parser;
use snake_common::engine::session::snake_session::{SnakeSession, SnakeSessionState};
use snake_common::games::SessionRng;
use snake_common::games::snake::WallCollisionMode;
use snake_common::high_score::FileHighScoreStore;
use snake_common::{log, logger};
use tokio::sync::mpsc;

use broadcaster::ConsoleBroadcaster;
use config::{CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "snake_client")]
#[command(version, about = "Terminal snake driven by stdin key names")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Wrap around the field edges instead of dying on them
    #[arg(long)]
    wrap: bool,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;

    let mut settings = config.game.clone();
    if args.wrap {
        settings.wall_collision_mode = WallCollisionMode::WrapAround;
    }
    let rng = args
        .seed
        .or(config.seed)
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    let seed = rng.seed();

    let session_state = SnakeSessionState::create(
        format!("local_{}", seed),
        settings,
        Box::new(FileHighScoreStore::new(&config.high_score_file)),
        rng,
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || input::read_commands(command_tx));

    println!("{}", input::HELP);
    log!("Using config {} and seed {}", args.config, seed);

    SnakeSession::run(session_state, command_rx, ConsoleBroadcaster::new()).await;

    Ok(())
}
