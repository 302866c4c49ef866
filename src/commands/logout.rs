use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Logs the current user out by clearing the stored API key.
pub fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    config.api_key = String::new();
    config.save()?;

    msg_success!(Message::LogoutSucceeded);
    Ok(())
}
