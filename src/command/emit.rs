use anyhow::Result;

use ze07::codegen;
use ze07::config::{self, Ze07Config};
use ze07::protocol::setup_commands;

use crate::argsets::{EmitArgs, OutputFormat};

pub fn emit(args: EmitArgs) -> Result<()> {
    let config = config::from_path(&args.config_path)?;
    dump_config(&config);

    let plan = codegen::emit(&config);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Cpp => println!("{}", codegen::render_cpp(&plan)),
    }
    Ok(())
}

fn dump_config(config: &Ze07Config) {
    log::info!("ZE-07 '{}':", config.id());
    match config.update_interval {
        Some(interval) => log::info!("  Update Interval: {interval}"),
        None => log::info!("  Update Interval: none"),
    }
    log::info!(
        "  RX-only mode: {}",
        if config.rx_only() { "ON" } else { "OFF" }
    );
    for command in setup_commands(config.rx_only()) {
        log::info!("  Setup command: {:?} ({})", command, hex::encode(command.encode()));
    }
    if let Some(co) = &config.co {
        log::info!("  CO: '{}'", co.name);
    }
}
