pub mod collectors;
pub mod config;
pub mod dashboard;
pub mod inhibitor;
pub mod models;
pub mod renderer;
pub mod shutdown;


use anyhow::Context;
use log::{debug, error, info, warn};
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::Instant;

use crate::collectors::{Collector, Probe, SystemProbe};
use crate::config::AppConfig;
use crate::inhibitor::{Inhibitor, InhibitorError};
use crate::shutdown::Shutdown;

/// Everything the main loop carries between ticks.
pub struct LoopState {
    started: Instant,
    inhibitor: Option<Inhibitor>,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of frames painted.
    pub renders: u64,
    /// Whether a live inhibitor was released on the way out.
    pub inhibitor_stopped: bool,
    /// Whether the inhibitor died on its own while the dashboard was up.
    pub inhibitor_exited_early: bool,
}

impl LoopState {
    pub fn new(inhibitor: Option<Inhibitor>) -> Self {
        Self {
            started: Instant::now(),
            inhibitor,
        }
    }

    /// Time since start, rounded to whole seconds.
    pub fn uptime(&self) -> Duration {
        renderer::round_to_seconds(self.started.elapsed())
    }

    /// True the first tick the inhibitor is found to have exited on its own.
    fn inhibitor_exited(&mut self) -> bool {
        self.inhibitor
            .as_mut()
            .and_then(Inhibitor::check_exited)
            .is_some()
    }

    /// Stops the inhibitor if there is one. Failures are logged only.
    async fn release(&mut self) -> bool {
        let Some(inhibitor) = self.inhibitor.as_mut() else {
            return false;
        };
        match inhibitor.stop().await {
            Ok(stopped) => stopped,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting application");

    let shutdown = Shutdown::new();
    let _listener = shutdown
        .listen()
        .context("Failed to register signal handlers")?;

    let mut stdout = io::stdout();
    dashboard::paint_banner(&mut stdout).context("Failed to draw banner")?;

    let inhibitor = match Inhibitor::start(&config.inhibitor) {
        Ok(inhibitor) => Some(inhibitor),
        Err(InhibitorError::Disabled) => {
            info!("Sleep inhibitor disabled by configuration");
            None
        }
        Err(e) => {
            warn!("{}; the dashboard will run without preventing sleep", e);
            None
        }
    };

    let state = LoopState::new(inhibitor);
    let collector = Collector::new(SystemProbe::new(), &config);

    match main_loop(
        state,
        collector,
        &shutdown,
        config.dashboard.interval(),
        &mut stdout,
    )
    .await
    {
        Ok(report) => {
            info!(
                "Application completed successfully after {} frames",
                report.renders
            );
            Ok(())
        }
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            let mut source = e.source();
            while let Some(e) = source {
                error!("Caused by: {e}");
                source = e.source();
            }
            Err(e).context("Application failed to run")
        }
    }
}

/// Collects and paints once per `interval` until `shutdown` is triggered.
///
/// The flag is only acted on at the top of an iteration; a trigger during the
/// sleep wakes the loop early so it gets there sooner. On every way out the
/// inhibitor is stopped before returning.
pub async fn main_loop<P: Probe, W: Write>(
    mut state: LoopState,
    mut collector: Collector<P>,
    shutdown: &Shutdown,
    interval: Duration,
    out: &mut W,
) -> anyhow::Result<RunReport> {
    let mut renders = 0u64;
    let mut inhibitor_exited_early = false;

    let result = loop {
        if shutdown.is_triggered() {
            debug!("Shutdown requested");
            break Ok(());
        }

        if state.inhibitor_exited() {
            inhibitor_exited_early = true;
        }

        let sample = collector.sample(state.uptime());
        if let Err(e) = dashboard::paint_frame(out, &sample) {
            break Err(e);
        }
        renders += 1;

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.wait() => debug!("Woken by shutdown"),
        }
    };

    let farewell = dashboard::paint_farewell(out);
    let inhibitor_stopped = state.release().await;

    result.context("Failed to draw dashboard")?;
    farewell.context("Failed to draw shutdown message")?;

    Ok(RunReport {
        renders,
        inhibitor_stopped,
        inhibitor_exited_early,
    })
}
