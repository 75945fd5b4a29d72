//! 命令解析器
//!
//! 将用户输入的缩写解析为目录中的完整命令名

use crate::resolver::catalog::CommandCatalog;
use crate::resolver::disambiguate::{disambiguate, Prompt};
use crate::resolver::matcher::{suitable_commands, Likeness, PrefixLikeness};
use tracing::{debug, warn};

/// 缩写解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 没有任何候选命令
    NoMatch,
    /// 只有一个候选命令，自动选择
    Unique { command: String },
    /// 多个候选命令，由用户选择
    Chosen {
        command: String,
        candidates: Vec<String>,
    },
    /// 多个候选命令，但用户的回答无效
    Unresolved { candidates: Vec<String> },
}

impl Resolution {
    /// 解析出的完整命令名，没有结果时返回 `None`
    pub fn command(&self) -> Option<&str> {
        match self {
            Resolution::Unique { command } | Resolution::Chosen { command, .. } => {
                Some(command.as_str())
            }
            Resolution::NoMatch | Resolution::Unresolved { .. } => None,
        }
    }

    pub fn into_command(self) -> Option<String> {
        match self {
            Resolution::Unique { command } | Resolution::Chosen { command, .. } => Some(command),
            Resolution::NoMatch | Resolution::Unresolved { .. } => None,
        }
    }

    /// 是否经过了用户交互
    pub fn was_interactive(&self) -> bool {
        matches!(
            self,
            Resolution::Chosen { .. } | Resolution::Unresolved { .. }
        )
    }
}

/// 命令解析器
///
/// 目录在构造时注入，之后只读。
pub struct CommandResolver {
    catalog: CommandCatalog,
    likeness: Box<dyn Likeness>,
}

impl CommandResolver {
    /// 使用前缀匹配创建解析器
    pub fn new(catalog: CommandCatalog) -> Self {
        Self::with_likeness(catalog, Box::new(PrefixLikeness))
    }

    pub fn with_likeness(catalog: CommandCatalog, likeness: Box<dyn Likeness>) -> Self {
        Self { catalog, likeness }
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// 按目录顺序返回缩写的候选命令
    pub fn candidates(&self, abbreviation: &str) -> Vec<String> {
        suitable_commands(&self.catalog, abbreviation, self.likeness.as_ref())
    }

    /// 解析缩写
    ///
    /// 候选唯一时直接返回，存在歧义时通过 `prompt` 询问一次。
    /// 提示读写失败按无效回答处理。
    pub fn resolve(&self, abbreviation: &str, prompt: &mut dyn Prompt) -> Resolution {
        let mut candidates = self.candidates(abbreviation);

        match candidates.len() {
            0 => Resolution::NoMatch,
            1 => Resolution::Unique {
                command: candidates.remove(0),
            },
            _ => {
                debug!(
                    abbreviation,
                    count = candidates.len(),
                    "缩写存在歧义，询问用户"
                );
                let chosen = disambiguate(&candidates, prompt).unwrap_or_else(|e| {
                    warn!("{e}");
                    None
                });
                match chosen {
                    Some(command) => Resolution::Chosen {
                        command,
                        candidates,
                    },
                    None => Resolution::Unresolved { candidates },
                }
            }
        }
    }
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new(CommandCatalog::default())
    }
}
