use common::config::{ConfigManager, FileContentProvider, Validate, YamlConfigSerializer};
use common::defaults::DEFAULT_SCORE_FILE;
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "grid_snake_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentProvider, ClientConfig, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub snake: SnakeSettings,
    pub score_file: String,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        if self.score_file.trim().is_empty() {
            return Err("score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            snake: SnakeSettings::default(),
            score_file: DEFAULT_SCORE_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigSerializer, ContentProvider};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_grid_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(get_temp_file_path().as_str()));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_manager_round_trip_through_file() {
        let file_path = get_temp_file_path();
        let config = ClientConfig {
            snake: SnakeSettings { board_size: 16, tick_interval_ms: 250 },
            score_file: "scores/best.yaml".to_string(),
        };

        get_config_manager(Some(file_path.as_str())).set_config(&config).unwrap();
        let loaded = get_config_manager(Some(file_path.as_str())).get_config().unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let file_path = get_temp_file_path();
        FileContentProvider::new(file_path.as_str())
            .set_content("snake:\n  board_size: 1\n  tick_interval_ms: 500\nscore_file: best.yaml\n")
            .unwrap();

        let result = get_config_manager(Some(file_path.as_str())).get_config();
        assert!(result.is_err());

        let _ = std::fs::remove_file(&file_path);
    }
}
