//! Perpetual resolve → collect → compare loop

use std::time::Duration;

use semver::Version;
use tokio::time::sleep;
use tracing::{error, info};

use crate::config::{Config, ProjectConfig, RETRY_INTERVAL_MS};
use crate::fetch::FetchError;
use crate::version::collector::{VersionProbe, collect_versions};
use crate::version::snapshot::{ProjectReport, ServerReport, Snapshot};
use crate::version::tracker::{ReleaseSource, resolve_versions};

/// Tagged outcome of one cycle, for hosts consuming a channel
#[derive(Debug)]
pub enum PollEvent {
    Data(Snapshot),
    Error(FetchError),
}

/// Receives each cycle's outcome. Fire-and-forget: the loop never
/// waits on the sink.
pub trait EventSink: Send + Sync {
    fn data(&self, snapshot: Snapshot);
    fn error(&self, error: FetchError);
}

/// Hosts that prefer a stream can hand the loop a channel sender.
/// Send failures (receiver dropped) are ignored; the loop keeps running.
impl EventSink for tokio::sync::mpsc::UnboundedSender<PollEvent> {
    fn data(&self, snapshot: Snapshot) {
        let _ = self.send(PollEvent::Data(snapshot));
    }

    fn error(&self, error: FetchError) {
        let _ = self.send(PollEvent::Error(error));
    }
}

/// Drives the polling cycles: resolve release versions, collect live
/// versions, compare, emit, sleep, repeat.
pub struct Poller<S, P> {
    source: S,
    probe: P,
    headline: String,
    projects: Vec<ProjectConfig>,
    interval: Duration,
    retry_interval: Duration,
}

impl<S: ReleaseSource, P: VersionProbe> Poller<S, P> {
    pub fn new(source: S, probe: P, config: &Config) -> Self {
        Self {
            source,
            probe,
            headline: config.headline.clone(),
            projects: config.projects.clone(),
            interval: Duration::from_millis(config.interval),
            retry_interval: Duration::from_millis(RETRY_INTERVAL_MS),
        }
    }

    /// One full resolve → collect → compare pass.
    ///
    /// Stages run sequentially; fan-out happens inside each stage. Any
    /// stage error aborts the pass.
    pub async fn run_cycle(&self) -> Result<Snapshot, FetchError> {
        let resolved = resolve_versions(&self.source, &self.projects).await?;
        let collected = collect_versions(&self.probe, &self.projects).await?;
        Ok(self.build_snapshot(&resolved, &collected))
    }

    fn build_snapshot(
        &self,
        resolved: &[Option<Version>],
        collected: &[Vec<Option<Version>>],
    ) -> Snapshot {
        let projects = self
            .projects
            .iter()
            .zip(resolved.iter().zip(collected))
            .map(|(project, (version, currents))| {
                let servers = project
                    .servers
                    .iter()
                    .zip(currents)
                    .map(|(server, current)| {
                        ServerReport::new(server.url.clone(), version.as_ref(), current.as_ref())
                    })
                    .collect();

                ProjectReport {
                    project: project.project.clone(),
                    version: version.as_ref().map(Version::to_string),
                    servers,
                }
            })
            .collect();

        Snapshot {
            headline: self.headline.clone(),
            projects,
        }
    }

    /// Run forever. Each outcome is emitted to the sink, then the next
    /// cycle's timer is armed — only after the current cycle has fully
    /// settled, so at most one cycle is ever in flight. A failed cycle
    /// reschedules at the shorter retry interval; nothing is fatal.
    pub async fn run<K: EventSink>(self, sink: K) {
        loop {
            match self.run_cycle().await {
                Ok(snapshot) => {
                    info!("Cycle completed for {} projects", snapshot.projects.len());
                    sink.data(snapshot);
                    sleep(self.interval).await;
                }
                Err(e) => {
                    error!("Cycle failed: {}", e);
                    sink.error(e);
                    sleep(self.retry_interval).await;
                }
            }
        }
    }
}
