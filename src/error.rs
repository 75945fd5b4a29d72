//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use thiserror::Error;

/// gt 应用程序的主要错误类型
#[derive(Error, Debug)]
pub enum GtError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 子进程启动失败
    #[error("{program} 执行失败: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// 交互式提示读写失败
    #[error("读取用户输入失败: {0}")]
    Prompt(String),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置文件解析错误
    #[error("配置文件解析失败: {0}")]
    ParseError(String),

    /// 配置验证错误
    #[error("配置验证失败: {0}")]
    ValidationError(String),

    /// 配置文件不存在
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    /// 环境变量替换错误
    #[error("环境变量替换失败: {var}")]
    EnvVarError { var: String },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, GtError>;
