use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// AI 网关配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// chat completion 端点
    pub endpoint: String,
    /// 模型标识
    pub model: String,
    /// 保存 bearer 凭证的环境变量名，每次请求时读取
    pub api_key_env: String,
    /// 请求超时（秒），为空时不设超时
    pub timeout_secs: Option<u64>,
    /// 是否按类型模型检查模型返回的结果
    pub strict_results: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ai.gateway.lovable.dev/v1/chat/completions".into(),
            model: "google/gemini-2.5-flash".into(),
            api_key_env: "LOVABLE_API_KEY".into(),
            timeout_secs: None,
            strict_results: false,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别，RUST_LOG 优先
    pub level: String,
    /// 结构化（JSON）日志格式
    pub structured: bool,
    /// 日志文件目录，按天滚动
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
            log_dir: None,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// AI 网关配置
    pub gateway: GatewayConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            gateway: GatewayConfig::default(),
            logging: LoggingConfig {
                level: "debug".into(),
                ..LoggingConfig::default()
            },
            app_name: "studymate".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }

    /// 按环境名选择内置默认值，未知名称按开发环境处理
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" => Self::production(),
            _ => Self::development(),
        }
    }
}
