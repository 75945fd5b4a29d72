//! gt - git 命令缩写工具
//!
//! 只需输入 git 命令的前几个字母，例如 `gt st` 即执行 `git status`：
//! - 缩写唯一对应一个命令时自动展开
//! - 存在歧义时列出候选命令，由用户输入序号或完整命令名
//! - 无法匹配时原样转发，由 git 报告未知命令
//!
//! 这不是 git 别名的替代品，只是命令名的缩写展开。

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod logging;
pub mod resolver;

// 重新导出主要类型
pub use app::App;
pub use config::Config;
pub use error::{GtError, Result};
pub use invocation::{Invocation, InvocationBuilder};
pub use launcher::{LaunchOutcome, Launcher};
pub use resolver::{CommandCatalog, CommandResolver, Resolution};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
