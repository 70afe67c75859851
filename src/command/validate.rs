use anyhow::Result;

use ze07::config;

use crate::argsets::ValidateArgs;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let config = config::from_path(&args.config_path)?;
    log::debug!("Resolved config: {}", serde_json::to_string(&config)?);
    println!("Configuration valid");
    Ok(())
}
