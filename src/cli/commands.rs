//! 命令处理逻辑
//!
//! 实现各个动作的处理逻辑

use crate::app::App;
use crate::cli::args::{Args, OutputFormat};
use crate::config::{user_config_path, Config};
use crate::error::Result;
use crate::launcher::{DryRunLauncher, Launcher, ProcessLauncher};
use crate::resolver::ConsolePrompt;
use async_trait::async_trait;
use clap::CommandFactory;
use std::path::Path;

/// 配置文件模板
pub const CONFIG_TEMPLATE: &str = include_str!("../../templates/config.toml");

/// 命令处理器trait
#[async_trait]
pub trait Command: Send + Sync {
    /// 执行命令，返回进程退出码
    async fn execute(&self, args: &Args) -> Result<u8>;
}

/// 帮助命令
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    async fn execute(&self, _args: &Args) -> Result<u8> {
        Args::command().print_help()?;
        println!();
        Ok(0)
    }
}

/// 版本命令
pub struct VersionCommand;

#[async_trait]
impl Command for VersionCommand {
    async fn execute(&self, args: &Args) -> Result<u8> {
        match args.format {
            OutputFormat::Json => {
                let version_info = serde_json::json!({
                    "name": crate::APP_NAME,
                    "version": crate::VERSION,
                    "description": crate::APP_DESCRIPTION
                });
                println!("{}", serde_json::to_string_pretty(&version_info)?);
            }
            OutputFormat::Text => {
                println!("{} v{}", crate::APP_NAME, crate::VERSION);
                println!("{}", crate::APP_DESCRIPTION);
            }
        }
        Ok(0)
    }
}

/// 列出命令目录
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 按输出格式渲染命令目录
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let catalog = self.config.catalog();
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(catalog.as_slice())?,
            OutputFormat::Text => catalog.iter().collect::<Vec<_>>().join("\n"),
        };
        Ok(rendered)
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, args: &Args) -> Result<u8> {
        println!("{}", self.render(args.format)?);
        Ok(0)
    }
}

/// 初始化配置文件命令
pub struct InitCommand;

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, args: &Args) -> Result<u8> {
        let config_path = args.config.clone().unwrap_or_else(user_config_path);
        self.create_config_file(&config_path, args.force).await
    }
}

impl InitCommand {
    /// 写入配置文件模板，文件已存在且未指定覆盖时不做修改
    pub async fn create_config_file(&self, config_path: &Path, force: bool) -> Result<u8> {
        if config_path.exists() && !force {
            eprintln!("配置文件已存在: {}", config_path.display());
            eprintln!("使用 --gt-force 参数覆盖现有文件");
            return Ok(1);
        }

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(config_path, CONFIG_TEMPLATE).await?;

        println!("配置文件已创建: {}", config_path.display());
        Ok(0)
    }
}

/// 展开缩写并执行 git
pub struct ForwardCommand {
    config: Config,
}

impl ForwardCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ForwardCommand {
    async fn execute(&self, args: &Args) -> Result<u8> {
        let launcher: Box<dyn Launcher> = if args.dry_run {
            Box::new(DryRunLauncher::new(args.format == OutputFormat::Json))
        } else {
            Box::new(ProcessLauncher::new(
                args.wait || self.config.global.wait_for_exit,
            ))
        };

        let app = App::new(&self.config, Box::new(ConsolePrompt::stdio()), launcher);
        let outcome = app.run(args.git_args.clone()).await?;
        Ok(outcome.exit_code())
    }
}
