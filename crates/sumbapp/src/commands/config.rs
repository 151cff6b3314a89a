use crate::commands::{CmdMessage, CmdResult, SumbPaths};
use crate::config::SumbConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SumbPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir();
    let mut config = SumbConfig::load(dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SumbError;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SumbPaths::new(dir.path());

        run(&paths, ConfigAction::Set("list-limit".into(), "25".into())).unwrap();

        let shown = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().list_limit, 25);

        let key = run(&paths, ConfigAction::ShowKey("list-limit".into())).unwrap();
        assert_eq!(key.messages[0].content, "list-limit = 25");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SumbPaths::new(dir.path());
        assert!(matches!(
            run(&paths, ConfigAction::ShowKey("nope".into())),
            Err(SumbError::Config(_))
        ));
    }
}
