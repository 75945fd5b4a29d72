//! 配置数据结构定义
//!
//! 定义应用程序的配置结构体和验证逻辑

use crate::resolver::catalog::{CommandCatalog, DEFAULT_COMMANDS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 主配置结构，包含全局配置和命令目录配置
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// 全局配置项
    #[serde(default)]
    pub global: GlobalConfig,
    /// 命令目录配置
    #[serde(default)]
    pub commands: CommandsConfig,
}

/// 全局配置结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    /// 外部可执行程序，不在 PATH 中时可指定绝对路径
    #[serde(default = "default_executable")]
    pub executable: String,
    /// 插入在转发参数之前的固定参数
    #[serde(default)]
    pub executable_args: Vec<String>,
    /// 是否等待子进程退出并返回其退出码
    #[serde(default)]
    pub wait_for_exit: bool,
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 是否使用JSON格式日志
    #[serde(default)]
    pub json_logs: bool,
    /// 日志文件路径，不设置时输出到标准错误
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            executable_args: Vec::new(),
            wait_for_exit: false,
            log_level: default_log_level(),
            json_logs: false,
            log_file: None,
        }
    }
}

/// 命令目录配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandsConfig {
    /// 已知命令，设置后替换默认目录
    #[serde(default = "default_known_commands")]
    pub known: Vec<String>,
    /// 追加到目录末尾的命令
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            known: default_known_commands(),
            extra: Vec::new(),
        }
    }
}

impl CommandsConfig {
    /// 构建命令目录
    pub fn catalog(&self) -> CommandCatalog {
        CommandCatalog::new(self.known.iter().chain(self.extra.iter()).cloned())
    }
}

impl Config {
    /// 当前配置对应的命令目录
    pub fn catalog(&self) -> CommandCatalog {
        self.commands.catalog()
    }
}

// 默认值函数
fn default_executable() -> String {
    "git".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_known_commands() -> Vec<String> {
    DEFAULT_COMMANDS.iter().map(|s| s.to_string()).collect()
}

/// 配置验证函数
///
/// # 参数
/// * `config` - 要验证的配置
///
/// # 返回
/// * `Result<(), String>` - 验证结果，错误时返回错误信息
pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.global.executable.trim().is_empty() {
        return Err("可执行程序不能为空".to_string());
    }

    // 验证日志级别
    let valid_log_levels = ["debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&config.global.log_level.as_str()) {
        return Err(format!(
            "无效的日志级别: {}，支持的级别: {:?}",
            config.global.log_level, valid_log_levels
        ));
    }

    for command in config.commands.known.iter().chain(&config.commands.extra) {
        validate_command_name(command)?;
    }

    if config.catalog().is_empty() {
        return Err("命令目录不能为空".to_string());
    }

    Ok(())
}

/// 验证单个命令名
fn validate_command_name(command: &str) -> Result<(), String> {
    if command.is_empty() {
        return Err("命令名不能为空".to_string());
    }
    if command.chars().any(char::is_whitespace) {
        return Err(format!("命令名不能包含空白字符: {command:?}"));
    }
    if command.starts_with('-') {
        return Err(format!("命令名不能以 '-' 开头: {command}"));
    }
    Ok(())
}
