use anyhow::Result;
use clap::Parser;

use scene_guard::cli::Cli;
use scene_guard::loaders::load_scene_or_none;
use scene_guard::report::FileReport;
use scene_guard::{AssetSlot, ValidatorConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => ValidatorConfig::from_file(path)?,
        None => ValidatorConfig::default(),
    };
    let config = cli.apply(base);
    log::debug!("Validator config: {:?}", config);

    let mut slot = AssetSlot::new(&config);
    let reports: Vec<FileReport> = cli
        .paths
        .iter()
        .map(|path| {
            let ticket = slot.begin_load();
            slot.complete(ticket, load_scene_or_none(path));
            FileReport::from_slot(path.display().to_string(), &slot)
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }
    }

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if cli.strict && invalid > 0 {
        eprintln!("{} of {} scenes invalid", invalid, reports.len());
        std::process::exit(1);
    }

    Ok(())
}
