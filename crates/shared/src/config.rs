//! 配置管理模块
//!
//! 支持分层配置文件加载与环境变量覆盖，服务可按 key 读取自己的配置段。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::observability::ObservabilityConfig;

/// 环境变量前缀（LOYALTY_OBSERVABILITY__LOG_LEVEL -> observability.log_level）
pub const ENV_PREFIX: &str = "LOYALTY";

/// 分层配置加载器
///
/// 加载顺序（后加载的会覆盖先加载的同名配置项）：
/// 1. {config_dir}/default.toml
/// 2. {config_dir}/{environment}.toml
/// 3. {config_dir}/{service_name}.toml
/// 4. 环境变量（LOYALTY_ 前缀，层级之间使用 `__` 分隔）
///
/// 所有配置文件均为可选。
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service_name: String,
    environment: String,
    config_dir: PathBuf,
    env_overrides: bool,
}

impl ConfigLoader {
    /// 创建加载器，环境名取自 `LOYALTY_ENV`，配置目录取自 `CONFIG_DIR`
    pub fn new(service_name: impl Into<String>) -> Self {
        let environment =
            std::env::var("LOYALTY_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self {
            service_name: service_name.into(),
            environment,
            config_dir: PathBuf::from(config_dir),
            env_overrides: true,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_config_dir(mut self, config_dir: impl AsRef<Path>) -> Self {
        self.config_dir = config_dir.as_ref().to_path_buf();
        self
    }

    /// 是否允许环境变量覆盖（测试中关闭以保证结果确定）
    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// 构建合并后的配置源
    pub fn build(&self) -> Result<Config, ConfigError> {
        let dir = self.config_dir.as_path();

        let mut builder = Config::builder()
            .set_default("service_name", self.service_name.as_str())?
            .set_default("environment", self.environment.as_str())?
            .add_source(File::from(dir.join("default.toml")).required(false))
            .add_source(File::from(dir.join(format!("{}.toml", self.environment))).required(false))
            .add_source(
                File::from(dir.join(format!("{}.toml", self.service_name))).required(false),
            );

        if self.env_overrides {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        builder.build()
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown-service".to_string(),
            environment: "development".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从已构建的配置源反序列化
    pub fn from_source(source: &Config) -> Result<Self, ConfigError> {
        source.clone().try_deserialize()
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// 读取指定 key 的配置段
///
/// 配置段不存在时返回 `Ok(None)`，由调用方决定默认值。
pub fn load_section<T: DeserializeOwned>(
    source: &Config,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match source.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
