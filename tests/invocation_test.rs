//! 调用构建集成测试
//!
//! 使用预设回答的提示和记录型启动器，验证从原始参数到最终调用的完整流程

use async_trait::async_trait;
use gt::config::{ConfigLoader, TomlConfigLoader};
use gt::resolver::CannedPrompt;
use gt::{App, Config, Invocation, LaunchOutcome, Launcher};
use std::sync::{Arc, Mutex};

/// 记录收到的调用，不启动任何进程
#[derive(Clone, Default)]
struct RecordingLauncher {
    launched: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingLauncher {
    fn launched(&self) -> Vec<Invocation> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    async fn launch(&self, invocation: &Invocation) -> gt::Result<LaunchOutcome> {
        self.launched.lock().unwrap().push(invocation.clone());
        Ok(LaunchOutcome::Spawned)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn run_with(config: &Config, response: &str, raw_args: &[&str]) -> Vec<String> {
    let launcher = RecordingLauncher::default();
    let app = App::new(
        config,
        Box::new(CannedPrompt::new(response)),
        Box::new(launcher.clone()),
    );

    let outcome = app.run(strings(raw_args)).await.unwrap();
    assert_eq!(outcome, LaunchOutcome::Spawned);

    let launched = launcher.launched();
    assert_eq!(launched.len(), 1);
    launched[0].argv()
}

#[tokio::test]
async fn test_original_command_table() {
    let config = Config::default();
    let cases: [(&[&str], &[&str]); 6] = [
        (&["res"], &["git", "reset"]),
        (&["t", "start"], &["git", "tag", "start"]),
        (&["chec", "-b", "branch1"], &["git", "checkout", "-b", "branch1"]),
        (
            &["com", "-m", "Initial commit"],
            &["git", "commit", "-m", "Initial commit"],
        ),
        (&[], &["git"]),
        (&["--version"], &["git", "--version"]),
    ];

    for (input, expected) in cases {
        assert_eq!(run_with(&config, "", input).await, strings(expected));
    }
}

#[tokio::test]
async fn test_ambiguous_abbreviation_uses_answer() {
    let config = Config::default();

    assert_eq!(
        run_with(&config, "1", &["c", "."]).await,
        strings(&["git", "checkout", "."])
    );
    assert_eq!(
        run_with(&config, "config", &["c", "--list"]).await,
        strings(&["git", "config", "--list"])
    );
    // 无效回答时原样转发
    assert_eq!(
        run_with(&config, "chckt", &["c", "."]).await,
        strings(&["git", "c", "."])
    );
    assert_eq!(
        run_with(&config, "-1", &["c"]).await,
        strings(&["git", "c"])
    );
}

#[tokio::test]
async fn test_configured_executable_and_catalog() {
    let loader = TomlConfigLoader::new(false);
    let config = loader
        .load_from_string(
            r#"
[global]
executable = "/opt/git/bin/git"
executable_args = ["--no-pager"]

[commands]
known = ["log", "ls-files", "stash"]
extra = ["worktree"]
"#,
        )
        .await
        .unwrap();

    assert_eq!(
        run_with(&config, "", &["w", "list"]).await,
        strings(&["/opt/git/bin/git", "--no-pager", "worktree", "list"])
    );
    assert_eq!(
        run_with(&config, "2", &["l"]).await,
        strings(&["/opt/git/bin/git", "--no-pager", "ls-files"])
    );
    // 默认目录中的命令被替换后不再展开
    assert_eq!(
        run_with(&config, "", &["st"]).await,
        strings(&["/opt/git/bin/git", "--no-pager", "stash"])
    );
    assert_eq!(
        run_with(&config, "", &["com"]).await,
        strings(&["/opt/git/bin/git", "--no-pager", "com"])
    );
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let config = Config::default();
    let first = run_with(&config, "2", &["pu", "origin", "main"]).await;
    let second = run_with(&config, "2", &["pu", "origin", "main"]).await;
    assert_eq!(first, second);
    assert_eq!(first, strings(&["git", "push", "origin", "main"]));
}
