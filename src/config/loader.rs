use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::path::PathBuf;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "STUDYMATE_CONFIG";

/// 选择内置默认值的环境变量
pub const ENVIRONMENT_ENV: &str = "STUDYMATE_ENVIRONMENT";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 内置默认值，`STUDYMATE_ENVIRONMENT=production` 时使用生产默认值
    /// 2. `STUDYMATE_CONFIG` 指向的文件，否则 ./config.yaml
    /// 3. `STUDYMATE_` 前缀的环境变量，嵌套键用 `__` 分隔
    pub fn load() -> Result<AppConfig, figment::Error> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        Self::load_from(path)
    }

    /// 从指定路径加载配置，文件不存在时只使用默认值和环境变量
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        let defaults = std::env::var(ENVIRONMENT_ENV)
            .map(|environment| AppConfig::for_environment(&environment))
            .unwrap_or_default();
        Figment::from(Serialized::defaults(defaults))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("STUDYMATE_").split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.gateway.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::MissingGatewayEndpoint);
        }

        if config.gateway.model.trim().is_empty() {
            return Err(ConfigValidationError::MissingModel);
        }

        if config.gateway.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::MissingCredentialVariable);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("AI 网关端点未配置")]
    MissingGatewayEndpoint,

    #[error("模型标识未配置")]
    MissingModel,

    #[error("凭证环境变量名未配置")]
    MissingCredentialVariable,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from(PathBuf::from("missing.yaml"))?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.gateway.model, "google/gemini-2.5-flash");
            assert_eq!(config.gateway.api_key_env, "LOVABLE_API_KEY");
            assert!(config.gateway.timeout_secs.is_none());
            assert!(!config.gateway.strict_results);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
server:
  port: 9000
gateway:
  model: "test/model"
  strict_results: true
"#,
            )?;
            jail.set_env("STUDYMATE_SERVER__PORT", "9100");
            jail.set_env("STUDYMATE_GATEWAY__API_KEY_ENV", "MY_KEY");

            let config = ConfigLoader::load_from(PathBuf::from("config.yaml"))?;
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.gateway.model, "test/model");
            assert_eq!(config.gateway.api_key_env, "MY_KEY");
            assert!(config.gateway.strict_results);
            Ok(())
        });
    }

    #[test]
    fn test_production_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env(ENVIRONMENT_ENV, "production");

            let config = ConfigLoader::load_from(PathBuf::from("missing.yaml"))?;
            assert_eq!(config.environment, "production");
            assert_eq!(config.logging.level, "info");
            assert!(config.logging.structured);
            assert!(ConfigLoader::validate(&config).is_ok());

            jail.set_env(ENVIRONMENT_ENV, "staging");
            let config = ConfigLoader::load_from(PathBuf::from("missing.yaml"))?;
            assert_eq!(config.logging.level, "debug");
            assert!(!config.logging.structured);
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));

        let mut config = AppConfig::development();
        config.gateway.api_key_env = " ".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingCredentialVariable)
        ));
    }
}
