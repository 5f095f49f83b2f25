//! The external process that keeps the machine awake.
//!
//! Only one [`Inhibitor`] is created per run. It is released by
//! [`Inhibitor::stop`] on the shutdown path; if it is dropped while still
//! running (an error or a panic unwinding through the main loop) the drop
//! handler kills the process instead.

use log::{debug, error, info, warn};
use std::io;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::{Child, ChildStdin, Command};

use crate::config::InhibitorConfig;

#[derive(Debug, Error)]
pub enum InhibitorError {
    #[error("Sleep inhibitor is disabled")]
    Disabled,

    #[error("Failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to kill sleep inhibitor: {0}")]
    Kill(#[source] io::Error),

    #[error("Failed to query sleep inhibitor: {0}")]
    Wait(#[source] io::Error),
}

pub struct Inhibitor {
    program: String,
    child: Option<Child>,
    // Held open so a child waiting on stdin exits when we go away.
    stdin: Option<ChildStdin>,
    /// Set once an unexpected exit has been reported.
    exited: Option<ExitStatus>,
}

impl Inhibitor {
    /// Launches the configured program.
    pub fn start(config: &InhibitorConfig) -> Result<Self, InhibitorError> {
        if !config.enabled {
            return Err(InhibitorError::Disabled);
        }

        let mut child = Command::new(&config.program)
            .args(config.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| InhibitorError::Spawn {
                program: config.program.clone(),
                source,
            })?;

        info!(
            "Sleep inhibitor `{} {}` started with pid {:?}",
            config.program,
            config.args,
            child.id()
        );

        let stdin = child.stdin.take();
        Ok(Self {
            program: config.program.clone(),
            child: Some(child),
            stdin,
            exited: None,
        })
    }

    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().and_then(Child::id)
    }

    /// Whether the process is still alive. Always false once stopped.
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Reports the exit status the first time the process is found to have
    /// died on its own, with a warning; `None` while it runs and afterwards.
    pub fn check_exited(&mut self) -> Option<ExitStatus> {
        if self.exited.is_some() {
            return None;
        }
        let status = match self.child.as_mut()?.try_wait() {
            Ok(status) => status?,
            Err(e) => {
                debug!("Failed to query sleep inhibitor `{}`: {}", self.program, e);
                return None;
            }
        };
        warn!(
            "Sleep inhibitor `{}` exited unexpectedly ({}); sleep is NOT being prevented",
            self.program, status
        );
        self.exited = Some(status);
        Some(status)
    }

    /// Terminates the process and reaps it.
    ///
    /// Returns `Ok(true)` the first time, `Ok(false)` on every later call.
    pub async fn stop(&mut self) -> Result<bool, InhibitorError> {
        let Some(mut child) = self.child.take() else {
            return Ok(false);
        };
        drop(self.stdin.take());

        if let Some(status) = child.try_wait().map_err(InhibitorError::Wait)? {
            if self.exited.is_none() {
                warn!("Sleep inhibitor `{}` had already exited: {}", self.program, status);
            }
            return Ok(true);
        }

        child.kill().await.map_err(InhibitorError::Kill)?;
        info!("Sleep inhibitor `{}` stopped", self.program);
        Ok(true)
    }
}

impl Drop for Inhibitor {
    fn drop(&mut self) {
        drop(self.stdin.take());
        if let Some(child) = self.child.as_mut() {
            debug!("Sleep inhibitor dropped while running; killing it");
            if let Err(e) = child.start_kill() {
                error!("Failed to kill sleep inhibitor `{}`: {}", self.program, e);
            }
        }
    }
}

/// Whether `pid` names a live process. Zombies count as dead.
#[cfg(all(test, target_os = "linux"))]
pub(crate) fn pid_alive(pid: u32) -> bool {
    match std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
        Ok(stat) => stat
            .rsplit(')')
            .next()
            .map(|rest| !rest.trim_start().starts_with('Z'))
            .unwrap_or(true),
        Err(_) => false,
    }
}
