//! 命令行参数定义
//!
//! 使用clap定义应用程序的命令行接口。
//! gt 自身的选项统一使用 `--gt-` 前缀，且只能出现在第一个转发参数之前；
//! 其余参数（包括 `-h`、`--version`、`--`）原样转发给 git。

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// gt 选项前缀
const WRAPPER_PREFIX: &str = "--gt-";

/// 需要单独取值的 gt 选项
const VALUE_OPTIONS: &[&str] = &["--gt-config", "--gt-log-level", "--gt-format"];

/// gt - git 命令缩写工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gt",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// 配置文件路径
    #[arg(
        long = "gt-config",
        value_name = "FILE",
        help = "配置文件路径",
        env = "GT_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// 日志级别，不指定时使用配置文件中的级别
    #[arg(
        long = "gt-log-level",
        value_enum,
        value_name = "LEVEL",
        help = "日志级别",
        env = "GT_LOG_LEVEL"
    )]
    pub log_level: Option<LogLevel>,

    /// 只打印展开后的命令，不执行
    #[arg(long = "gt-dry-run", help = "只打印展开后的命令，不执行")]
    pub dry_run: bool,

    /// 等待 git 退出并返回其退出码
    #[arg(long = "gt-wait", help = "等待 git 退出并返回其退出码")]
    pub wait: bool,

    /// 列出命令目录
    #[arg(long = "gt-list", help = "列出可展开的命令")]
    pub list: bool,

    /// 生成配置文件模板
    #[arg(long = "gt-init-config", help = "生成配置文件模板")]
    pub init_config: bool,

    /// 覆盖已存在的配置文件
    #[arg(
        long = "gt-force",
        requires = "init_config",
        help = "覆盖已存在的配置文件"
    )]
    pub force: bool,

    /// 显示 gt 版本信息
    #[arg(long = "gt-version", help = "显示 gt 版本信息")]
    pub show_version: bool,

    /// 显示帮助信息
    #[arg(long = "gt-help", help = "显示帮助信息")]
    pub show_help: bool,

    /// 输出格式
    #[arg(
        long = "gt-format",
        value_enum,
        default_value = "text",
        help = "输出格式"
    )]
    pub format: OutputFormat,

    /// 转发给 git 的参数，第一个参数按缩写展开
    ///
    /// 由 [`Args::try_parse_from_raw`] 直接从原始参数切分，不经 clap 解析。
    #[arg(value_name = "GIT_ARGS")]
    pub git_args: Vec<String>,
}

/// 日志级别枚举
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    /// 调试级别
    Debug,
    /// 信息级别
    Info,
    /// 警告级别
    Warn,
    /// 错误级别
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// 输出格式枚举
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// 文本格式
    Text,
    /// JSON格式
    Json,
}

/// 本次运行要执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 展开缩写并执行 git
    Forward,
    /// 列出命令目录
    List,
    /// 生成配置文件
    InitConfig,
    /// 显示版本
    Version,
    /// 显示帮助
    Help,
}

impl Args {
    /// 解析命令行参数
    pub fn parse_args() -> Self {
        match Self::try_parse_from_raw(std::env::args_os()) {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// 从原始参数（含程序名）解析
    ///
    /// 开头连续的 `--gt-*` 选项及其取值交给 clap，从第一个其他参数起全部原样转发。
    /// 非转发动作不接受 git 参数。
    pub fn try_parse_from_raw<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (wrapper, forwarded) = split_raw_args(raw);

        let mut args = Self::try_parse_from(wrapper)?;
        args.git_args = forwarded
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|arg| {
                    Self::command().error(
                        ErrorKind::InvalidUtf8,
                        format!("参数不是有效的UTF-8: {arg:?}"),
                    )
                })
            })
            .collect::<Result<_, _>>()?;

        if args.action() != Action::Forward && !args.git_args.is_empty() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "该选项不能与转发给 git 的参数同时使用: {}",
                    args.git_args.join(" ")
                ),
            ));
        }

        Ok(args)
    }

    /// 根据选项确定动作，多个动作选项同时出现时按帮助、版本、生成配置、列表的顺序取第一个
    pub fn action(&self) -> Action {
        if self.show_help {
            Action::Help
        } else if self.show_version {
            Action::Version
        } else if self.init_config {
            Action::InitConfig
        } else if self.list {
            Action::List
        } else {
            Action::Forward
        }
    }

    /// 获取配置文件路径，以及路径是否由用户显式指定
    pub fn get_config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(config) => (config.clone(), true),
            None => (crate::config::get_default_config_path(), false),
        }
    }
}

/// 把原始参数切分为 gt 选项（含程序名）和转发给 git 的参数
fn split_raw_args<I, T>(raw: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::<OsString>::into);
    let mut wrapper: Vec<OsString> = raw.next().into_iter().collect();
    let mut forwarded = Vec::new();
    let mut expects_value = false;

    for arg in raw.by_ref() {
        if expects_value {
            expects_value = false;
            wrapper.push(arg);
            continue;
        }
        match arg.to_str() {
            Some(option) if option.starts_with(WRAPPER_PREFIX) => {
                expects_value = VALUE_OPTIONS.contains(&option);
                wrapper.push(arg);
            }
            _ => {
                forwarded.push(arg);
                break;
            }
        }
    }
    forwarded.extend(raw);

    (wrapper, forwarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from_raw(std::iter::once("gt").chain(args.iter().copied()))
    }

    fn parse(args: &[&str]) -> Args {
        try_parse(args).unwrap()
    }

    #[test]
    fn test_forward_args_verbatim() {
        let args = parse(&["com", "-m", "Initial commit"]);
        assert_eq!(args.git_args, vec!["com", "-m", "Initial commit"]);
        assert_eq!(args.action(), Action::Forward);
    }

    #[test]
    fn test_no_args() {
        let args = parse(&[]);
        assert!(args.git_args.is_empty());
        assert_eq!(args.action(), Action::Forward);
    }

    #[test]
    fn test_git_flags_are_not_consumed() {
        assert_eq!(parse(&["--version"]).git_args, vec!["--version"]);
        assert_eq!(parse(&["-h"]).git_args, vec!["-h"]);
        assert_eq!(parse(&["--help"]).git_args, vec!["--help"]);
    }

    #[test]
    fn test_leading_double_dash_is_forwarded() {
        assert_eq!(parse(&["--", "st"]).git_args, vec!["--", "st"]);
        assert_eq!(
            parse(&["st", "--", "file"]).git_args,
            vec!["st", "--", "file"]
        );

        let args = parse(&["--gt-dry-run", "--", "st"]);
        assert!(args.dry_run);
        assert_eq!(args.git_args, vec!["--", "st"]);
    }

    #[test]
    fn test_option_values_are_not_forwarded() {
        let args = parse(&[
            "--gt-log-level",
            "info",
            "--gt-format=json",
            "--gt-dry-run",
            "st",
        ]);
        assert_eq!(args.log_level, Some(LogLevel::Info));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.git_args, vec!["st"]);
    }

    #[test]
    fn test_unknown_wrapper_option_is_rejected() {
        let err = try_parse(&["--gt-bogus", "st"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_actions_reject_git_args() {
        for flag in ["--gt-list", "--gt-version", "--gt-help", "--gt-init-config"] {
            let err = try_parse(&[flag, "st"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "flag {flag}");
        }
        assert_eq!(parse(&["--gt-list"]).action(), Action::List);
    }

    #[test]
    fn test_wrapper_options_before_git_args() {
        let args = parse(&["--gt-dry-run", "--gt-wait", "st", "--short"]);
        assert!(args.dry_run);
        assert!(args.wait);
        assert_eq!(args.git_args, vec!["st", "--short"]);
    }

    #[test]
    fn test_wrapper_options_after_git_args_are_forwarded() {
        let args = parse(&["st", "--gt-dry-run"]);
        assert!(!args.dry_run);
        assert_eq!(args.git_args, vec!["st", "--gt-dry-run"]);
    }

    #[test]
    fn test_actions() {
        assert_eq!(parse(&["--gt-list"]).action(), Action::List);
        assert_eq!(parse(&["--gt-version"]).action(), Action::Version);
        assert_eq!(parse(&["--gt-help"]).action(), Action::Help);
        assert_eq!(
            parse(&["--gt-init-config", "--gt-force"]).action(),
            Action::InitConfig
        );
    }

    #[test]
    fn test_force_requires_init_config() {
        let result = try_parse(&["--gt-force"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_and_format() {
        let args = parse(&["--gt-log-level", "debug", "--gt-list", "--gt-format", "json"]);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_explicit_config_path() {
        let args = parse(&["--gt-config", "/tmp/gt.toml", "st"]);
        let (path, explicit) = args.get_config_path();
        assert_eq!(path, PathBuf::from("/tmp/gt.toml"));
        assert!(explicit);
    }
}
