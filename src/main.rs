// sortty: terminal visualizer for sorting and searching algorithms

mod algorithms;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algorithms::{registry, AlgorithmId};
use ui::app::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --algorithm <key>   Algorithm to visualize (default: bubble-sort)");
    eprintln!(
        "  --size <n>          Input array size, {}..={} (default: 50)",
        MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
    );
    eprintln!("  --target <t>        Search target for searching algorithms (default: 50)");
    eprintln!();
    eprintln!("Known algorithms:");
    for (id, descriptor) in registry::catalog() {
        eprintln!(
            "  {:<16} {} ({})",
            id.key(),
            descriptor.name,
            descriptor.category.label()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let mut algorithm = AlgorithmId::BubbleSort;
    let mut size: usize = 50;
    let mut target: i32 = 50;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--algorithm" | "-a" => {
                i += 1;
                let key = match args.get(i) {
                    Some(key) => key,
                    None => {
                        eprintln!("Error: --algorithm requires a value");
                        print_usage(program_name);
                        std::process::exit(1);
                    }
                };
                algorithm = match AlgorithmId::from_key(key) {
                    Some(id) => id,
                    None => {
                        eprintln!("Error: Unknown algorithm '{}'", key);
                        eprintln!();
                        print_usage(program_name);
                        std::process::exit(1);
                    }
                };
            }
            "--size" | "-n" => {
                i += 1;
                size = match args.get(i).and_then(|s| s.parse::<usize>().ok()) {
                    Some(n) if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&n) => n,
                    _ => {
                        eprintln!(
                            "Error: --size must be an integer in {}..={}",
                            MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
                        );
                        std::process::exit(1);
                    }
                };
            }
            "--target" | "-t" => {
                i += 1;
                target = match args.get(i).and_then(|s| s.parse::<i32>().ok()) {
                    Some(t) => t,
                    None => {
                        eprintln!("Error: --target must be an integer");
                        std::process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage(program_name);
                return Ok(());
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(algorithm, size, target);
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
