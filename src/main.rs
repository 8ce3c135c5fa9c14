use clap::Parser;
use log::{info, warn};
use pirates_calc::core::config::{self, CalcConfig};
use pirates_calc::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pirates-calc", about = "Keypad calculator for the terminal")]
struct Args {
    /// Press these key labels (e.g. "7 + 8 =") and print the display instead of opening the keypad
    #[arg(short, long)]
    keys: Option<String>,

    /// Maximum fraction digits shown for results
    #[arg(short, long)]
    precision: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pirates-calc.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pirates-calc.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        eprintln!("warning: {e}, falling back to defaults");
        CalcConfig::default()
    });
    let resolved = config::resolve(&file_config, args.precision);
    info!("Calculator starting up: {:?}", resolved);

    let mut app = App::from_config(&resolved);

    if let Some(keys) = args.keys {
        return match pirates_calc::run_keys(&mut app.calculator, &keys) {
            Ok(display) => {
                println!("{display}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match pirates_calc::tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
