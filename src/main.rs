use clap::Parser;
use log::{info, log, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use systemic::core::clock::{ClockFormat, SystemClock};
use systemic::core::config::{self, CliOverrides};
use systemic::core::seed;
use systemic::core::state::App;
use systemic::tui;

#[derive(Parser)]
#[command(name = "systemic", about = "Terminal chat and calling mockup")]
struct Args {
    /// Config file (defaults to ~/.systemic/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML file with conversations to load instead of the built-in set
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Timestamp format for sent messages
    #[arg(long, value_enum)]
    clock: Option<ClockFormat>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("systemic: {e}");
            std::process::exit(2);
        }
    };
    let config = config::resolve(
        &loaded.config,
        &CliOverrides {
            log_level: args.log_level,
            clock: args.clock,
            seed_file: args.seed,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    info!("Systemic starting up as {}", config.user_name);
    for notice in loaded.notices.iter().chain(&config.notices) {
        log!(notice.level, "{}", notice.message);
    }

    let conversations = match &config.seed_file {
        Some(path) => seed::load_seed_file(path).unwrap_or_else(|e| {
            warn!("Falling back to built-in conversations: {e}");
            seed::builtin_conversations()
        }),
        None => seed::builtin_conversations(),
    };
    info!("Loaded {} conversations", conversations.len());

    let app = App::new(conversations).with_clock(Box::new(SystemClock), config.clock);
    tui::run(app, &config)
}
