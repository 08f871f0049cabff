//! 网关凭证来源
//!
//! 凭证在每次请求时读取，缺失只影响当前请求，不在启动时检查。

use crate::error::{AppError, Result};

/// 网关 bearer 凭证来源
pub trait CredentialSource: Send + Sync {
    /// 读取凭证，缺失或为空时返回 `AppError::Config`
    fn api_key(&self) -> Result<String>;
}

/// 从进程环境变量读取凭证
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Result<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config(format!("{} is not configured", self.var)))
    }
}

/// 固定凭证，测试和嵌入场景使用
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    key: Option<String>,
    name: String,
}

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            name: "API key".into(),
        }
    }

    /// 始终缺失的凭证
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            key: None,
            name: name.into(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Result<String> {
        self.key
            .clone()
            .ok_or_else(|| AppError::Config(format!("{} is not configured", self.name)))
    }
}
