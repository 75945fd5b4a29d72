//! 应用程序核心逻辑
//!
//! 将调用构建与进程启动串联起来

use crate::config::Config;
use crate::error::{GtError, Result};
use crate::invocation::{Invocation, InvocationBuilder};
use crate::launcher::{LaunchOutcome, Launcher};
use crate::resolver::Prompt;
use tracing::debug;

/// 一次 gt 运行
pub struct App {
    builder: InvocationBuilder,
    launcher: Box<dyn Launcher>,
}

impl App {
    pub fn new(config: &Config, prompt: Box<dyn Prompt>, launcher: Box<dyn Launcher>) -> Self {
        Self::with_builder(InvocationBuilder::from_config(config, prompt), launcher)
    }

    pub fn with_builder(builder: InvocationBuilder, launcher: Box<dyn Launcher>) -> Self {
        Self { builder, launcher }
    }

    /// 构建调用
    ///
    /// 交互提示会阻塞读取标准输入，因此放到阻塞线程池中执行，
    /// 以便等待输入期间仍能响应中断信号。
    pub async fn invocation(mut builder: InvocationBuilder, raw_args: Vec<String>) -> Result<Invocation> {
        tokio::task::spawn_blocking(move || builder.build(raw_args))
            .await
            .map_err(|e| GtError::Other(anyhow::anyhow!("构建调用失败: {e}")))
    }

    /// 构建调用并启动外部程序
    pub async fn run(self, raw_args: Vec<String>) -> Result<LaunchOutcome> {
        let App { builder, launcher } = self;

        let invocation = Self::invocation(builder, raw_args).await?;
        debug!(argv = ?invocation.argv(), "最终调用");

        launcher.launch(&invocation).await
    }
}
