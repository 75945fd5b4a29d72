//! 命令目录
//!
//! 保存可被缩写展开的完整命令名集合，启动时构建后不再修改

use std::collections::HashSet;

/// 默认支持的常用 git 命令
pub const DEFAULT_COMMANDS: &[&str] = &[
    "add",
    "archive",
    "bisect",
    "branch",
    "blame",
    "bundle",
    "checkout",
    "cherry-pick",
    "citool",
    "clone",
    "commit",
    "config",
    "diff",
    "describe",
    "fetch",
    "grep",
    "init",
    "log",
    "merge",
    "mv",
    "pull",
    "push",
    "rebase",
    "reset",
    "rm",
    "show",
    "status",
    "submodule",
    "tag",
];

/// 不可变的命令目录
///
/// 迭代顺序即声明顺序，重复项只保留第一次出现的位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: Vec<String>,
}

impl CommandCatalog {
    /// 从命令名列表创建目录
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for command in commands {
            let command: String = command.into();
            if seen.insert(command.clone()) {
                unique.push(command);
            }
        }

        Self { commands: unique }
    }

    /// 命令数量
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 是否包含指定命令
    pub fn contains(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }

    /// 按声明顺序遍历命令
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.commands
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_COMMANDS.iter().copied())
    }
}

impl<'a> IntoIterator for &'a CommandCatalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
