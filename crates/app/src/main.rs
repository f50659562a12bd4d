use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{
    ENV_DOWNLOAD_DIR, ENV_DOWNLOAD_FILE, ENV_IMAGE_URL, ENV_REVEAL_MS, ENV_SHOW_TARGET_HINT,
    parse_file_name, parse_image_endpoint, parse_reveal_millis,
};
use services::{ConfigError, GameConfig, GameLoopService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    game_loop: Arc<GameLoopService>,
    show_target_hint: bool,
}

impl UiApp for DesktopApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    fn show_target_hint(&self) -> bool {
        self.show_target_hint
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p guess-app -- [--image-url <url>] [--download-dir <dir>] \
         [--download-file <name>] [--reveal-ms <ms>] [--show-target-hint]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --image-url https://picsum.photos/400");
    eprintln!("  --download-dir $HOME/Downloads");
    eprintln!("  --download-file image.jpg");
    eprintln!("  --reveal-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {ENV_IMAGE_URL}, {ENV_DOWNLOAD_DIR}, {ENV_DOWNLOAD_FILE}, {ENV_REVEAL_MS}, \
         {ENV_SHOW_TARGET_HINT}, RUST_LOG"
    );
}

enum Parsed {
    Run(GameConfig),
    Help,
}

/// Environment first, then flags on top.
fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
    let mut config = GameConfig::from_env()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--image-url" => {
                let value = require_value(args, "--image-url")?;
                config.image_endpoint = parse_image_endpoint(&value)?;
            }
            "--download-dir" => {
                config.download_dir = require_value(args, "--download-dir")?.into();
            }
            "--download-file" => {
                let value = require_value(args, "--download-file")?;
                config.download_file_name = parse_file_name(&value)?;
            }
            "--reveal-ms" => {
                let value = require_value(args, "--reveal-ms")?;
                config.reveal_duration = parse_reveal_millis(&value)?;
            }
            "--show-target-hint" => config.show_target_hint = true,
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(&mut argv).inspect_err(|_| print_usage())? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    info!(
        endpoint = %config.image_endpoint,
        download = %config.download_path().display(),
        reveal_ms = config.reveal_duration.num_milliseconds(),
        "starting guess-the-number"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        game_loop: Arc::new(GameLoopService::from_config(&config)),
        show_target_hint: config.show_target_hint,
    });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top; the game is an ordinary window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Guess the Number")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
