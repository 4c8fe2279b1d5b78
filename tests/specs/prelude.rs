// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test harness: a disposable workspace directory plus a thin
//! builder over `assert_cmd::Command` for invoking the `ac` binary.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Workspace {
    _dir: TempDir,
    root: PathBuf,
}

impl Workspace {
    /// An empty directory with nothing in it yet; most tests start here and
    /// call `ac workspace init` as their first command.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp workspace dir");
        let root = dir.path().to_path_buf();
        Workspace { _dir: dir, root }
    }

    /// A workspace that has already been initialized.
    pub fn initialized(name: &str) -> Self {
        let ws = Self::empty();
        ws.ac().args(["workspace", "init", "--name", name]).passes();
        ws
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A fresh `ac` invocation rooted at this workspace.
    pub fn ac(&self) -> Run {
        let mut cmd = Command::cargo_bin("ac").expect("locate ac binary");
        cmd.arg("--root").arg(&self.root);
        Run { cmd }
    }
}

/// Wraps one `Command` invocation with assertion helpers in the style the
/// rest of this suite expects: build up args, then assert on the outcome.
pub struct Run {
    cmd: Command,
}

impl Run {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn env<S: AsRef<std::ffi::OsStr>>(mut self, key: &str, value: S) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run the command, asserting it exits 0, and return stdout as a string.
    pub fn passes(mut self) -> String {
        let output = self.cmd.output().expect("spawn ac");
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run the command, asserting it exits with the given code, and return
    /// stderr as a string.
    pub fn fails_with(mut self, code: i32) -> String {
        let output = self.cmd.output().expect("spawn ac");
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}

pub trait StdoutExt {
    fn stdout_has(&self, needle: &str) -> &Self;
}

impl StdoutExt for String {
    fn stdout_has(&self, needle: &str) -> &Self {
        assert!(self.contains(needle), "expected output to contain {needle:?}, got:\n{self}");
        self
    }
}
