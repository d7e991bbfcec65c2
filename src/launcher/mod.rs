//! Native launcher for an installed pgplan package.
//!
//! The launcher sits next to a `bin/` directory holding the real binary. At
//! start it resolves `bin/pgplan` (`bin/pgplan.exe` on Windows) relative to
//! its own location and re-executes it with the same arguments and standard
//! streams, then exits with the child's status.
//!
//! There is no fallback search path: a missing binary is a hard error that
//! names the path it expected.

use std::{
    ffi::OsStr,
    future::Future,
    io,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};
use thiserror::Error;

/// Exit code used when an operator interrupt arrives while the child runs.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Directory, relative to the launcher, holding the embedded binary.
pub const BIN_DIR: &str = "bin";

/// File stem of the embedded binary.
pub const BINARY_STEM: &str = "pgplan";

/// Where users are sent when no binary exists for their platform.
pub const SUPPORT_URL: &str = "https://github.com/JacobArthurs/pgplan";

/// Host operating system family, as far as binary naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Windows: binary carries `.exe`
    Windows,
    /// Everything else
    Unix,
}

impl HostOs {
    /// The OS this launcher was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Embedded binary file name on this host.
    pub fn binary_name(self) -> String {
        match self {
            Self::Windows => format!("{BINARY_STEM}.exe"),
            Self::Unix => BINARY_STEM.to_string(),
        }
    }
}

/// Launcher failures.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// No regular file at the expected binary path
    #[error(
        "{BINARY_STEM} binary not found at {}. Your platform may not be supported. See: {SUPPORT_URL}",
        path.display()
    )]
    Resolution {
        /// Path that was checked
        path: PathBuf,
    },

    /// The launcher could not determine its own location
    #[error("cannot determine launcher location: {0}")]
    CurrentExe(#[source] io::Error),

    /// The child process could not be started
    #[error("failed to start {}: {source}", path.display())]
    Spawn {
        /// Binary that was executed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Waiting on the child failed
    #[error("failed waiting for {}: {source}", path.display())]
    Wait {
        /// Binary that was executed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Operator interrupt while the child was running
    #[error("interrupted")]
    Interrupted,
}

impl LauncherError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => INTERRUPTED_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Resolves the embedded binary next to the running executable.
pub fn resolve_binary_path() -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe().map_err(LauncherError::CurrentExe)?;
    let install_dir = exe.parent().ok_or_else(|| {
        LauncherError::CurrentExe(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;
    resolve_binary_path_in(install_dir, HostOs::current())
}

/// Resolves `install_dir/bin/<binary>` for `host`.
///
/// The returned path is absolute. Fails with [`LauncherError::Resolution`]
/// unless it names an existing regular file.
pub fn resolve_binary_path_in(install_dir: &Path, host: HostOs) -> Result<PathBuf, LauncherError> {
    let candidate = install_dir.join(BIN_DIR).join(host.binary_name());
    let path = std::path::absolute(&candidate).unwrap_or(candidate);

    if path.is_file() {
        log::debug!("Resolved {BINARY_STEM} binary at {}", path.display());
        Ok(path)
    } else {
        Err(LauncherError::Resolution { path })
    }
}

/// Runs `binary` with `args`, returning its exit code.
///
/// An operator interrupt (Ctrl-C) while waiting kills the child and yields
/// [`LauncherError::Interrupted`].
pub async fn delegate<I, S>(binary: &Path, args: I) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    delegate_until(binary, args, tokio::signal::ctrl_c()).await
}

/// [`delegate`] with a caller-supplied interrupt future.
///
/// The child is killed and [`LauncherError::Interrupted`] returned as soon
/// as `interrupt` completes, whatever its output.
pub async fn delegate_until<I, S, F>(
    binary: &Path,
    args: I,
    interrupt: F,
) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    F: Future,
{
    let mut child = tokio::process::Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            path: binary.to_path_buf(),
            source,
        })?;

    // Interrupt is polled first: a child that exits on the same Ctrl-C
    // must still map to the interrupt code.
    tokio::select! {
        biased;

        _ = interrupt => {
            log::debug!("Interrupt received, stopping {}", binary.display());
            // The child may already have exited on the same signal.
            let _ = child.kill().await;
            Err(LauncherError::Interrupted)
        }
        status = child.wait() => {
            let status = status.map_err(|source| LauncherError::Wait {
                path: binary.to_path_buf(),
                source,
            })?;
            Ok(exit_code_of(status))
        }
    }
}

/// Maps a child status to the launcher's exit code.
///
/// A child killed by a signal on Unix maps to `128 + signal`, as shells do.
/// The Python launcher shipped in the wheel applies the same rule.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Launcher entry point: resolve the binary and delegate to it.
///
/// `args` excludes the program name. Returns the child's exit code; the
/// error's [`exit_code`](crate::BundlerError::exit_code) is what the
/// process should exit with on failure.
pub async fn run<I, S>(args: I) -> crate::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = resolve_binary_path()?;
    Ok(delegate(&binary, args).await?)
}
