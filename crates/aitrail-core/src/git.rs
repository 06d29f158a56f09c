use aitrail_types::{GitContext, UNKNOWN};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default bound on each git subprocess invocation.
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Capability interface over repository context resolution.
///
/// Callers take this trait instead of `GitCli` directly so tests can
/// substitute a fake without spawning a real subprocess.
pub trait RepoContextResolver {
    /// Resolve repository status for `dir` (or the process's current
    /// directory when `None`). Never fails: non-repositories, missing
    /// binaries, and timeouts all yield the sentinel context.
    fn resolve(&self, dir: Option<&Path>) -> GitContext;
}

/// Resolver backed by the `git` binary on PATH.
pub struct GitCli {
    timeout: Duration,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_GIT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run one git subcommand, bounded by the configured timeout.
    ///
    /// Returns trimmed stdout, or `None` on spawn failure, non-zero exit,
    /// or timeout. The subcommands used here emit well under a pipe
    /// buffer's worth of output, so reading after exit cannot block.
    fn run_git(&self, dir: Option<&Path>, args: &[&str]) -> Option<String> {
        let mut command = Command::new("git");
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().ok()?;
        let deadline = Instant::now() + self.timeout;

        loop {
            match child.try_wait().ok()? {
                Some(status) => {
                    if !status.success() {
                        return None;
                    }
                    break;
                }
                None => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return None;
                    }
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }

        let mut output = String::new();
        child.stdout.take()?.read_to_string(&mut output).ok()?;
        Some(output.trim().to_string())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoContextResolver for GitCli {
    fn resolve(&self, dir: Option<&Path>) -> GitContext {
        match self.run_git(dir, &["rev-parse", "--is-inside-work-tree"]) {
            Some(inside) if inside == "true" => {}
            _ => return GitContext::unknown(),
        }

        let branch = self
            .run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let hash = self
            .run_git(dir, &["rev-parse", "--short", "HEAD"])
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        GitContext {
            is_repo: true,
            branch,
            hash,
            session_commits: None,
        }
    }
}

/// Resolve repository context with the default git CLI resolver.
pub fn resolve_git_context(dir: Option<&Path>) -> GitContext {
    GitCli::new().resolve(dir)
}

/// A fixed-answer resolver for tests and offline callers.
pub struct StaticResolver {
    context: GitContext,
}

impl StaticResolver {
    pub fn new(context: GitContext) -> Self {
        Self { context }
    }
}

impl RepoContextResolver for StaticResolver {
    fn resolve(&self, _dir: Option<&Path>) -> GitContext {
        self.context.clone()
    }
}
