//! Playground: prints a person's pretty description, then describes an empty
//! collection of pretty things.

use std::path::PathBuf;

use playground_core::DriverConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Protocols playground: PrettyDescription demo");
    println!();
    println!("Usage: playground [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Describe the default person (Jim)");
    println!("  --config <path>          Describe the person from a JSON config file");
    println!("  help                     Show this help message");
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the descriptions
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = if args.len() > 1 {
        match args[1].as_str() {
            "--config" | "-c" => {
                if args.len() < 3 {
                    eprintln!("Usage: playground --config <path>");
                    std::process::exit(1);
                }
                let path = PathBuf::from(&args[2]);
                DriverConfig::load(&path)
                    .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'playground help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    } else {
        DriverConfig::default()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = playground_core::run(&config, &mut out)?;

    info!(
        "Done: {} pretty things described",
        report.pretty_things_described
    );

    Ok(())
}
