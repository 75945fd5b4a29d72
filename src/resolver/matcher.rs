//! 候选命令匹配
//!
//! 通过可替换的相似度策略从目录中筛选候选命令

use crate::resolver::catalog::CommandCatalog;

/// 命令相似度判断策略
pub trait Likeness: Send + Sync {
    /// 判断目录中的 `command` 是否是 `abbreviation` 的候选
    fn is_alike(&self, command: &str, abbreviation: &str) -> bool;
}

/// 前缀匹配：区分大小写，命令必须以缩写开头
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixLikeness;

impl Likeness for PrefixLikeness {
    fn is_alike(&self, command: &str, abbreviation: &str) -> bool {
        command.starts_with(abbreviation)
    }
}

/// 按目录顺序返回所有与缩写相似的命令
pub fn suitable_commands(
    catalog: &CommandCatalog,
    abbreviation: &str,
    likeness: &dyn Likeness,
) -> Vec<String> {
    catalog
        .iter()
        .filter(|command| likeness.is_alike(command, abbreviation))
        .map(str::to_string)
        .collect()
}
