//! 歧义消解
//!
//! 多个候选命令匹配时询问用户，并解析用户的回答

use crate::error::{GtError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// 候选命令提示接口
///
/// 生产环境使用 [`ConsolePrompt`] 读写终端，测试中可替换为 [`CannedPrompt`]。
pub trait Prompt: Send {
    /// 展示候选命令并返回用户的原始回答
    fn ask(&mut self, candidates: &[String]) -> Result<String>;
}

/// 基于终端的交互式提示
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    /// 使用标准输入输出创建提示
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsolePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 取回内部的输出端（测试中用于检查输出内容）
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn render(&mut self, candidates: &[String]) -> io::Result<()> {
        writeln!(self.writer, "您指的是哪个命令？")?;
        writeln!(self.writer)?;
        for (i, command) in candidates.iter().enumerate() {
            writeln!(self.writer, "{}) {}", i + 1, command)?;
        }
        writeln!(self.writer, "请输入序号或完整命令名: ")?;
        self.writer.flush()
    }

    fn read_response(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(strip_line_ending(line))
    }
}

impl<R, W> Prompt for ConsolePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&mut self, candidates: &[String]) -> Result<String> {
        self.render(candidates)
            .and_then(|_| self.read_response())
            .map_err(|e| GtError::Prompt(e.to_string()))
    }
}

/// 只去掉行尾换行符，其余空白保持原样
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// 预设回答的提示实现
///
/// 按顺序返回预设回答，用完后返回空字符串；同时记录每次展示的候选列表。
#[derive(Debug, Clone, Default)]
pub struct CannedPrompt {
    responses: VecDeque<String>,
    asked: Vec<Vec<String>>,
}

impl CannedPrompt {
    /// 创建只有一个回答的提示
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_responses([response])
    }

    /// 创建带有多个回答的提示
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// 每次询问时展示的候选列表
    pub fn asked(&self) -> &[Vec<String>] {
        &self.asked
    }
}

impl Prompt for CannedPrompt {
    fn ask(&mut self, candidates: &[String]) -> Result<String> {
        self.asked.push(candidates.to_vec());
        Ok(self.responses.pop_front().unwrap_or_default())
    }
}

/// 询问用户并解析回答
///
/// 回答无法对应到候选命令时返回 `Ok(None)`，不会重试。
pub fn disambiguate(candidates: &[String], prompt: &mut dyn Prompt) -> Result<Option<String>> {
    let response = prompt.ask(candidates)?;
    Ok(interpret_response(candidates, &response))
}

/// 解析用户回答
///
/// 纯数字的回答按 1 起始的序号处理，越界时无结果；
/// 其他回答必须与某个候选命令完全一致。
pub fn interpret_response(candidates: &[String], response: &str) -> Option<String> {
    if !response.is_empty() && response.bytes().all(|b| b.is_ascii_digit()) {
        return response
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=candidates.len()).contains(index))
            .map(|index| candidates[index - 1].clone());
    }

    candidates
        .iter()
        .find(|candidate| candidate.as_str() == response)
        .cloned()
}
