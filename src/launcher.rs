//! 外部进程启动
//!
//! 以字面参数向量（不经过 shell）启动外部程序，标准输入输出直接继承

use crate::error::{GtError, Result};
use crate::invocation::Invocation;
use async_trait::async_trait;
use std::process::Stdio;
use tracing::{debug, info};

/// 启动结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// 已启动，未等待退出
    Spawned,
    /// 子进程正常退出，附带退出码
    Exited(i32),
    /// 子进程被信号终止
    Terminated,
    /// 只打印了调用，没有启动进程
    Printed,
}

impl LaunchOutcome {
    /// 转换为本进程的退出码
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchOutcome::Spawned | LaunchOutcome::Printed => 0,
            LaunchOutcome::Exited(code) => u8::try_from(*code).unwrap_or(1),
            LaunchOutcome::Terminated => 1,
        }
    }
}

/// 进程启动接口
#[async_trait]
pub trait Launcher: Send + Sync {
    /// 执行调用
    async fn launch(&self, invocation: &Invocation) -> Result<LaunchOutcome>;
}

/// 真实的子进程启动器
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    /// 是否等待子进程退出
    wait_for_exit: bool,
}

impl ProcessLauncher {
    pub fn new(wait_for_exit: bool) -> Self {
        Self { wait_for_exit }
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self, invocation: &Invocation) -> Result<LaunchOutcome> {
        let mut child = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| GtError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        debug!(pid = child.id(), "已启动: {invocation}");

        if !self.wait_for_exit {
            return Ok(LaunchOutcome::Spawned);
        }

        let status = child.wait().await?;
        info!("{} 退出: {status}", invocation.program);

        Ok(status
            .code()
            .map(LaunchOutcome::Exited)
            .unwrap_or(LaunchOutcome::Terminated))
    }
}

/// 只打印调用而不执行
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher {
    /// 是否以JSON格式输出
    json: bool,
}

impl DryRunLauncher {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// 渲染调用
    pub fn render(&self, invocation: &Invocation) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string(invocation)?)
        } else {
            Ok(invocation.to_string())
        }
    }
}

#[async_trait]
impl Launcher for DryRunLauncher {
    async fn launch(&self, invocation: &Invocation) -> Result<LaunchOutcome> {
        println!("{}", self.render(invocation)?);
        Ok(LaunchOutcome::Printed)
    }
}
