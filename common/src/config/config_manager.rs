use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{ConfigSerializer, ContentProvider, FileContentProvider, Validate, YamlConfigSerializer};

/// Loads, validates and caches a typed config document.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    serializer: TSerializer,
    provider: TProvider,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            provider,
            cached: Mutex::new(None),
        }
    }

    /// Returns the stored config, or `TConfig::default()` when nothing is stored.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        size: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { size: 10 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.size == 0 {
                return Err("size must be positive".to_string());
            }
            Ok(())
        }
    }

    fn create_manager(provider: MemoryContentProvider) -> ConfigManager<MemoryContentProvider, TestConfig> {
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_empty_provider_yields_default() {
        let manager = create_manager(MemoryContentProvider::new());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_stored_config_is_parsed() {
        let manager = create_manager(MemoryContentProvider::with_content("size: 17\n"));
        assert_eq!(manager.get_config().unwrap().size, 17);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let manager = create_manager(MemoryContentProvider::with_content("size: 0\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"));
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let provider = MemoryContentProvider::new();
        let manager = create_manager(provider.clone());
        assert!(manager.set_config(&TestConfig { size: 0 }).is_err());
        assert_eq!(provider.get_content(), Ok(None));
    }

    #[test]
    fn test_set_config_persists_and_caches() {
        let provider = MemoryContentProvider::new();
        let manager = create_manager(provider.clone());
        manager.set_config(&TestConfig { size: 12 }).unwrap();

        let reloaded = create_manager(provider);
        assert_eq!(reloaded.get_config().unwrap().size, 12);
        assert_eq!(manager.get_config().unwrap().size, 12);
    }
}
