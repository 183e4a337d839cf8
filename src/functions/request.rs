use anyhow::Result;

use crate::functions::fetch::FetchConfig;

/// Print the GraphQL request that would be sent, without sending it.
pub fn cmd_request(config: &FetchConfig) -> Result<()> {
    println!("POST {}", config.endpoint);
    println!("{}", request_json(config)?);
    Ok(())
}

pub fn request_json(config: &FetchConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&config.input().request_body())?)
}
