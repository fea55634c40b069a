mod config;
mod printing;

use anyhow::{Context, Result};
use huffpack_core::{actions, analyze, CompressionStats};

use config::{Command, Config};

fn main() {
    let config = Config::from_args();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    match &config.command {
        Command::Load { input } => {
            let bytes = actions::load(input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let analysis = analyze(&bytes)?;

            if config.print_table {
                println!("{} ({} bytes)\n", input.display(), bytes.len());
                let rows = printing::rows(
                    Some(&analysis.frequencies),
                    Some(&analysis.code_table),
                    config.show_all,
                );
                printing::print_table(&rows);
            }
        }

        Command::Encode { input, output } => {
            let bytes = actions::load(input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let (stats, analysis) = actions::encode_with_analysis(&bytes, output)
                .with_context(|| format!("Failed to encode into {}", output.display()))?;

            if config.print_table {
                let rows = printing::rows(
                    Some(&analysis.frequencies),
                    Some(&analysis.code_table),
                    config.show_all,
                );
                printing::print_table(&rows);
            }
            report(config, &stats);
        }

        Command::Decode { input, output } => {
            let (stats, table) = actions::decode_with_table(input, output)
                .with_context(|| format!("Failed to decode {}", input.display()))?;

            if config.print_table {
                let rows = printing::rows(None, Some(&table), config.show_all);
                printing::print_table(&rows);
            }
            report(config, &stats);
        }
    }

    Ok(())
}

fn report(config: &Config, stats: &CompressionStats) {
    if config.print_summary {
        stats.print_summary();
    }
    if config.print_metrics {
        print!("{}", stats.export_text());
    }
}
