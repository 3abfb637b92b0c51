//! Interrupt Integration Tests
//!
//! 入力待ちのバイナリにSIGINTを送り、終了することを確認する

#![cfg(unix)]

use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// 子プロセスの終了を待つ（時間切れなら `None`）
fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_ctrl_c_at_stdin_prompt_exits_with_failure() {
    let work_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_biascast"))
        .args(["--endpoint", "http://127.0.0.1:9"])
        .current_dir(work_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // 書き込み側を開いたままにして、入力待ちの状態を保つ
    let stdin = child.stdin.take().unwrap();

    // シグナルハンドラが登録されるまで待つ
    sleep(Duration::from_millis(1000));
    let kill = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let status = wait_for_exit(&mut child, Duration::from_secs(5));
    if status.is_none() {
        let _ = child.kill();
        let _ = child.wait();
    }
    drop(stdin);

    let status = status.expect("process kept waiting for stdin after SIGINT");
    assert!(!status.success());
}

#[test]
fn test_stdin_eof_ends_session_cleanly() {
    let work_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_biascast"))
        .args(["--endpoint", "http://127.0.0.1:9"])
        .current_dir(work_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdin.take());

    let status = wait_for_exit(&mut child, Duration::from_secs(5));
    if status.is_none() {
        let _ = child.kill();
        let _ = child.wait();
    }

    assert!(status.expect("process did not exit on EOF").success());
}
