//! gt 主程序入口
//!
//! git 命令缩写工具

use anyhow::{Context, Result};
use gt::cli::{
    Action, Args, Command, ForwardCommand, HelpCommand, InitCommand, ListCommand, VersionCommand,
};
use gt::config::{Config, ConfigLoader, TomlConfigLoader};
use gt::logging::{self, LogConfig, LoggingSystem};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 解析命令行参数
    let args = Args::parse_args();

    tokio::select! {
        code = run(&args) => ExitCode::from(code),
        Ok(()) = tokio::signal::ctrl_c() => {
            // 中断视为正常结束；等待输入的阻塞线程不会自行退出，直接结束进程
            std::process::exit(0);
        }
    }
}

/// 执行并把错误转换为退出码
async fn run(args: &Args) -> u8 {
    match execute_command(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gt: {e:#}");
            1
        }
    }
}

/// 执行CLI命令
async fn execute_command(args: &Args) -> Result<u8> {
    let action = args.action();

    // 这些动作不依赖配置文件
    match action {
        Action::Help => return Ok(HelpCommand.execute(args).await?),
        Action::Version => return Ok(VersionCommand.execute(args).await?),
        Action::InitConfig => return Ok(InitCommand.execute(args).await?),
        Action::List | Action::Forward => {}
    }

    let config = load_config(args).await?;
    let _logging_system = init_logging(args, &config)?;

    debug!("gt v{} 启动，动作: {:?}", gt::VERSION, action);

    let code = match action {
        Action::List => ListCommand::new(config).execute(args).await?,
        _ => ForwardCommand::new(config).execute(args).await?,
    };
    Ok(code)
}

/// 加载配置文件，默认位置没有配置文件时使用内置配置
async fn load_config(args: &Args) -> Result<Config> {
    let (path, explicit) = args.get_config_path();
    let loader = TomlConfigLoader::new(true);
    loader
        .load_or_default(&path, explicit)
        .await
        .with_context(|| format!("加载配置文件失败: {}", path.display()))
}

/// 初始化日志系统，命令行指定的级别优先于配置文件
fn init_logging(args: &Args, config: &Config) -> Result<LoggingSystem> {
    let level = args
        .log_level
        .map(Into::into)
        .or_else(|| logging::parse_level(&config.global.log_level))
        .unwrap_or(log::LevelFilter::Warn);

    let log_config = LogConfig {
        level,
        file_path: config.global.log_file.clone(),
        json_format: config.global.json_logs,
        ..Default::default()
    };

    LoggingSystem::setup_logging(log_config).context("初始化日志系统失败")
}
