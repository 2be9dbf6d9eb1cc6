// stepviz: step-by-step sorting and maze-carving visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepviz::errors::ConfigError;
use stepviz::settings::{self, Settings};
use stepviz::stepper::AlgorithmKind;
use stepviz::ui::app::Options;
use stepviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::load(Settings::default_path());

    let (kind, options) = match parse_args(&args, &settings) {
        Ok(parsed) => parsed,
        Err(e) => {
            let program_name = args.first().map(|s| s.as_str()).unwrap_or("stepviz");
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!(
                "Usage: {} [algorithm] [--length N] [--width N] [--height N]",
                program_name
            );
            eprintln!();
            eprintln!("Algorithms:");
            eprintln!("  bubble         Bubble sort, one comparison per step");
            eprintln!("  quick          Quick sort, one comparison per step");
            eprintln!("  backtracker    Recursive-backtracker maze carving");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} quick --length 256", program_name);
            eprintln!("  {} backtracker --width 48 --height 24", program_name);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(kind, options, settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Parse the command line: an optional algorithm name followed by size
/// flags. With no algorithm argument the last-used one is restored from
/// settings, defaulting to bubble sort.
fn parse_args(args: &[String], settings: &Settings) -> Result<(AlgorithmKind, Options), ConfigError> {
    let mut kind = None;
    let mut options = Options::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--length" | "--width" | "--height" => {
                let value = iter.next().ok_or_else(|| ConfigError::MissingValue {
                    flag: arg.clone(),
                })?;
                let parsed = value.parse().map_err(|_| ConfigError::InvalidNumber {
                    flag: arg.clone(),
                    value: value.clone(),
                })?;
                match arg.as_str() {
                    "--length" => options.length = Some(parsed),
                    "--width" => options.width = Some(parsed),
                    _ => options.height = Some(parsed),
                }
            }
            name => {
                kind = Some(AlgorithmKind::parse(name).ok_or_else(|| {
                    ConfigError::UnknownAlgorithm {
                        name: name.to_string(),
                    }
                })?);
            }
        }
    }

    let kind = kind
        .or_else(|| {
            settings
                .get(settings::KEY_ALGORITHM)
                .and_then(AlgorithmKind::parse)
        })
        .unwrap_or(AlgorithmKind::Bubble);

    Ok((kind, options))
}
