use antenna_map::app::report;
use antenna_map::config::OutputFormat;
use antenna_map::utils::error::MapError;
use antenna_map::utils::logger::{self, LogFormat};
use antenna_map::{CliConfig, FileMapStore, MapEngine};
use clap::Parser;

fn fail(e: &MapError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, cli.verbose);

    tracing::info!("Starting antenna-map");
    tracing::debug!("CLI arguments: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(&e);
        }
    };

    let store = FileMapStore::new(&config.map_path);
    let report = match MapEngine::new(store).run(&config.plan) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    let output = match config.format {
        OutputFormat::Text => report::render_text(&report),
        OutputFormat::Json => report::render_json(&report)?,
    };
    print!("{}", output);

    tracing::info!("✅ Done: {} hazard positions", report.hazards.len());
    Ok(())
}
