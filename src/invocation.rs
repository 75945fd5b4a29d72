//! 调用构建
//!
//! 将原始参数中的第一个缩写替换为完整命令名，并拼接外部可执行程序

use crate::config::Config;
use crate::logging::log_resolution;
use crate::resolver::{CommandResolver, Prompt};
use serde::Serialize;
use std::fmt;

/// 最终要执行的外部程序调用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// 可执行程序名称或路径
    pub program: String,
    /// 传给程序的参数（不含程序本身）
    pub args: Vec<String>,
}

impl Invocation {
    /// 完整的参数向量，第 0 个元素为程序本身
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.argv().iter().map(|arg| quote(arg)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// 仅用于展示：含空白或引号的参数加单引号
fn quote(arg: &str) -> String {
    if !arg.is_empty()
        && !arg
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"')
    {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// 调用构建器
pub struct InvocationBuilder {
    executable: String,
    executable_args: Vec<String>,
    resolver: CommandResolver,
    prompt: Box<dyn Prompt>,
}

impl InvocationBuilder {
    pub fn new(
        executable: impl Into<String>,
        resolver: CommandResolver,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            executable: executable.into(),
            executable_args: Vec::new(),
            resolver,
            prompt,
        }
    }

    /// 根据配置创建构建器
    pub fn from_config(config: &Config, prompt: Box<dyn Prompt>) -> Self {
        Self::new(
            config.global.executable.clone(),
            CommandResolver::new(config.catalog()),
            prompt,
        )
        .with_executable_args(config.global.executable_args.clone())
    }

    /// 设置插入在转发参数之前的固定参数
    pub fn with_executable_args(mut self, args: Vec<String>) -> Self {
        self.executable_args = args;
        self
    }

    /// 改写参数：只可能替换第 0 个元素，长度不变
    pub fn rewrite(&mut self, mut raw_args: Vec<String>) -> Vec<String> {
        if let Some(abbreviation) = raw_args.first() {
            let resolution = self.resolver.resolve(abbreviation, self.prompt.as_mut());
            log_resolution(abbreviation, &resolution);
            if let Some(command) = resolution.into_command() {
                raw_args[0] = command;
            }
        }
        raw_args
    }

    /// 构建最终调用
    pub fn build(&mut self, raw_args: Vec<String>) -> Invocation {
        let rewritten = self.rewrite(raw_args);
        let mut args = self.executable_args.clone();
        args.extend(rewritten);

        Invocation {
            program: self.executable.clone(),
            args,
        }
    }
}
