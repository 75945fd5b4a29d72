//! 命令解析模块
//!
//! 根据用户输入的缩写在命令目录中查找候选命令，
//! 候选唯一时自动选择，存在歧义时交由用户选择

pub mod catalog;
pub mod command;
pub mod disambiguate;
pub mod matcher;

// 重新导出主要类型
pub use catalog::{CommandCatalog, DEFAULT_COMMANDS};
pub use command::{CommandResolver, Resolution};
pub use disambiguate::{disambiguate, interpret_response, CannedPrompt, ConsolePrompt, Prompt};
pub use matcher::{suitable_commands, Likeness, PrefixLikeness};
