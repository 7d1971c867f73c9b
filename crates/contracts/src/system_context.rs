//! Command and file-transfer contract for a local or remote system.
//!
//! A [`SystemContext`] is what a transport adapter (SSH, serial console,
//! local shell...) exposes: run a command, move files, inspect directories
//! and open sessions. This crate only defines the shape; every backend
//! supplies all of the operations. A backend that cannot support one
//! returns [`ContractError::Unimplemented`].

use crate::error::{ContractError, Result};
use crate::serializable::Serializable;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// The status codes a command is allowed to exit with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedStatus {
    Exactly(i32),
    AnyOf(Vec<i32>),
}

impl ExpectedStatus {
    pub fn matches(&self, status: i32) -> bool {
        match self {
            ExpectedStatus::Exactly(expected) => *expected == status,
            ExpectedStatus::AnyOf(expected) => expected.contains(&status),
        }
    }
}

impl Default for ExpectedStatus {
    fn default() -> Self {
        ExpectedStatus::Exactly(0)
    }
}

impl From<i32> for ExpectedStatus {
    fn from(status: i32) -> Self {
        ExpectedStatus::Exactly(status)
    }
}

impl From<Vec<i32>> for ExpectedStatus {
    fn from(statuses: Vec<i32>) -> Self {
        ExpectedStatus::AnyOf(statuses)
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedStatus::Exactly(status) => write!(f, "{status}"),
            ExpectedStatus::AnyOf(statuses) => {
                let joined = statuses
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "one of [{joined}]")
            }
        }
    }
}

/// Per-command settings a backend should honor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandAspects {
    /// Upper bound on the whole command
    pub timeout: Option<Duration>,
    /// Upper bound on time without any output
    pub inactivity_timeout: Option<Duration>,
}

impl CommandAspects {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_inactivity_timeout(mut self, timeout: Duration) -> Self {
        self.inactivity_timeout = Some(timeout);
        self
    }
}

impl Serializable for CommandAspects {}

/// Exit status and captured output of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Pass the output through if `status` is expected, otherwise fail with
    /// [`ContractError::UnexpectedStatus`].
    ///
    /// Backends call this at the end of `run_cmd`.
    pub fn expect_status(self, command: &str, expected: &ExpectedStatus) -> Result<Self> {
        if expected.matches(self.status) {
            return Ok(self);
        }
        tracing::debug!(
            "Command '{}' exited with {} (expected {})",
            command,
            self.status,
            expected
        );
        Err(ContractError::UnexpectedStatus {
            command: command.to_string(),
            status: self.status,
            expected: expected.to_string(),
        })
    }
}

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// One node of a directory listing or tree.
///
/// `children` is only populated for directories, and only as deep as the
/// listing asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirectoryEntry>,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<DirectoryEntry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            children,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Number of directory levels below this entry.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Copy of this tree cut off `depth` levels below this entry.
    pub fn truncated(&self, depth: usize) -> Self {
        let children = if depth == 0 {
            Vec::new()
        } else {
            self.children
                .iter()
                .map(|child| child.truncated(depth - 1))
                .collect()
        };
        Self {
            name: self.name.clone(),
            kind: self.kind,
            children,
        }
    }
}

impl Serializable for DirectoryEntry {}

/// Operations a system backend exposes.
///
/// Paths on the target system are plain strings; local paths are
/// [`Path`]s.
#[async_trait]
pub trait SystemContext: Send + Sync {
    /// Close the session this context represents.
    ///
    /// Contexts that are not sessions have nothing to close.
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// List the entries directly inside `root`.
    async fn directory(&self, root: &str) -> Result<Vec<DirectoryEntry>>;

    async fn directory_exists(&self, path: &str) -> Result<bool>;

    /// Walk `root` down to `depth` levels.
    async fn directory_tree(&self, root: &str, depth: usize) -> Result<DirectoryEntry>;

    async fn file_exists(&self, path: &str) -> Result<bool>;

    /// Copy the remote file at `remote` to `local`.
    async fn file_pull(&self, remote: &str, local: &Path) -> Result<()>;

    /// Copy the local file at `local` to `remote`.
    async fn file_push(&self, local: &Path, remote: &str) -> Result<()>;

    /// Open a session sharing this context's settings.
    ///
    /// When `reuse` is given the backend adopts that context as the session
    /// instead of creating a new one. `aspects` become the default for
    /// commands run through the session.
    async fn open_session(
        &self,
        reuse: Option<Box<dyn SystemContext>>,
        aspects: Option<CommandAspects>,
    ) -> Result<Box<dyn SystemContext>>;

    async fn reboot(&self, aspects: Option<&CommandAspects>) -> Result<()>;

    /// Run `command` and check its exit status against `expected`.
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - Status, stdout and stderr of the command
    /// * `Err(ContractError::UnexpectedStatus)` - The status was not expected
    async fn run_cmd(
        &self,
        command: &str,
        expected: &ExpectedStatus,
        aspects: Option<&CommandAspects>,
    ) -> Result<CommandOutput>;

    async fn verify_connectivity(&self) -> Result<bool>;
}
