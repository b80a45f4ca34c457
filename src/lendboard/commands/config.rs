use crate::commands::{CmdMessage, CmdResult};
use crate::config::DashConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DashConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DashConfig::load(dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DashConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
