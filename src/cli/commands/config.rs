use anyhow::Result;

use crate::config::ServerConfig;

pub fn print_config(config: &ServerConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
