//! Periodic advisory runner.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use stockpilot_advisors::AdvisoryOrchestrator;
use stockpilot_catalog::CatalogSnapshot;

use crate::sink::AdvisorySink;
use crate::snapshot::SnapshotReader;

/// Config for the advisory runner.
#[derive(Debug, Clone)]
pub struct AdvisoryRunner {
    /// Cadence for unprompted re-evaluation.
    pub interval: Duration,
}

impl Default for AdvisoryRunner {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
        }
    }
}

/// Handle for the running advisory thread (shutdown + trigger hook).
#[derive(Debug)]
pub struct AdvisoryRunnerHandle {
    shutdown: mpsc::Sender<()>,
    trigger: mpsc::SyncSender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl AdvisoryRunnerHandle {
    /// Manual re-run hook (the dashboard's "run now" affordance).
    ///
    /// Backpressure: triggers are coalesced (bounded queue). If a run is
    /// already pending this becomes a no-op.
    pub fn trigger(&self) {
        // Coalesce: channel capacity=1; ignore if already full.
        let _ = self.trigger.try_send(());
    }

    /// Gracefully stop the runner thread.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

impl AdvisoryRunner {
    /// Spawn the runner thread.
    ///
    /// - Schedule: one evaluation pass per `interval`, plus one on startup
    /// - Manual runs: `handle.trigger()`
    /// - Reader failures: logged, the pass degrades to an empty catalog
    pub fn spawn<R, S>(
        &self,
        name: &'static str,
        reader: Arc<R>,
        sink: Arc<S>,
    ) -> AdvisoryRunnerHandle
    where
        R: SnapshotReader,
        S: AdvisorySink,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let (trigger_tx, trigger_rx) = mpsc::sync_channel::<()>(1);

        let cfg = self.clone();
        let join = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || runner_loop(name, cfg, shutdown_rx, trigger_rx, reader, sink))
            .expect("failed to spawn advisory runner thread");

        AdvisoryRunnerHandle {
            shutdown: shutdown_tx,
            trigger: trigger_tx,
            join: Some(join),
        }
    }
}

fn runner_loop<R, S>(
    name: &'static str,
    cfg: AdvisoryRunner,
    shutdown_rx: mpsc::Receiver<()>,
    trigger_rx: mpsc::Receiver<()>,
    reader: Arc<R>,
    sink: Arc<S>,
) where
    R: SnapshotReader,
    S: AdvisorySink,
{
    info!(runner = name, "advisory runner started");

    let mut next_tick = Instant::now() + cfg.interval;
    let mut pending = true; // run once on startup

    loop {
        // Shutdown has priority.
        if shutdown_rx.try_recv().is_ok() {
            break;
        }

        let now = Instant::now();
        if now >= next_tick {
            pending = true;
            // Keep a stable cadence even if we were delayed.
            while next_tick <= now {
                next_tick += cfg.interval;
            }
        }

        // Manual triggers: non-blocking drain to coalesce several into one.
        while trigger_rx.try_recv().is_ok() {
            pending = true;
        }

        if !pending {
            // Wait until next tick or trigger or shutdown.
            let sleep_for = next_tick
                .saturating_duration_since(Instant::now())
                .min(Duration::from_millis(50));
            thread::sleep(sleep_for);
            continue;
        }

        pending = false;

        let snapshot = match reader.latest() {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    runner = name,
                    error = ?e,
                    "failed to read catalog snapshot, evaluating empty catalog"
                );
                CatalogSnapshot::empty()
            }
        };

        let mut orchestrator = AdvisoryOrchestrator::new(snapshot);
        let actions = orchestrator.run_all();
        info!(runner = name, actions = actions.len(), "advisory pass complete");
        sink.publish(actions);
    }

    info!(runner = name, "advisory runner stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::InMemoryAdvisorySink;
    use crate::snapshot::{InMemorySnapshotReader, SnapshotError};
    use stockpilot_advisors::AgentId;
    use stockpilot_catalog::{Money, ProductRecord};
    use stockpilot_core::ProductId;

    fn low_stock_snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![
            ProductRecord::new(
                ProductId::new(),
                "Webcam",
                "P006",
                8,
                25,
                Money::from_minor_units(8999),
            )
            .unwrap(),
        ])
    }

    fn wait_for_runs(sink: &InMemoryAdvisorySink, at_least: usize) -> Vec<Vec<stockpilot_advisors::Action>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let runs = sink.runs();
            if runs.len() >= at_least {
                return runs;
            }
            if Instant::now() > deadline {
                panic!("expected {at_least} advisory runs, saw {}", runs.len());
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn startup_pass_publishes_to_the_sink() {
        let reader = Arc::new(InMemorySnapshotReader::new(low_stock_snapshot()));
        let sink = Arc::new(InMemoryAdvisorySink::new());

        let handle = AdvisoryRunner::default().spawn("advisory-test", reader, Arc::clone(&sink));
        let runs = wait_for_runs(&sink, 1);
        handle.shutdown();

        let actions = &runs[0];
        assert!(actions.iter().any(|a| a.agent == AgentId::Inventory));
        assert!(actions.iter().any(|a| a.agent == AgentId::Expense));
        assert!(actions.iter().any(|a| a.agent == AgentId::Calling));
    }

    #[test]
    fn trigger_forces_an_extra_pass() {
        let reader = Arc::new(InMemorySnapshotReader::new(low_stock_snapshot()));
        let sink = Arc::new(InMemoryAdvisorySink::new());

        let handle = AdvisoryRunner::default().spawn("advisory-test", reader, Arc::clone(&sink));
        wait_for_runs(&sink, 1);
        handle.trigger();
        wait_for_runs(&sink, 2);
        handle.shutdown();
    }

    #[test]
    fn reader_failure_degrades_to_empty_catalog() {
        struct FailingReader;

        impl SnapshotReader for FailingReader {
            fn latest(&self) -> Result<CatalogSnapshot, SnapshotError> {
                Err(SnapshotError::Unavailable("connection refused".into()))
            }
        }

        let sink = Arc::new(InMemoryAdvisorySink::new());
        let handle = AdvisoryRunner::default().spawn(
            "advisory-test",
            Arc::new(FailingReader),
            Arc::clone(&sink),
        );
        let runs = wait_for_runs(&sink, 1);
        handle.shutdown();

        // Simulators still report; the stock rules see no records.
        assert!(runs[0].iter().all(|a| a.agent != AgentId::Inventory));
        assert_eq!(runs[0].len(), 8);
    }

    #[test]
    fn shutdown_stops_publishing() {
        let reader = Arc::new(InMemorySnapshotReader::new(low_stock_snapshot()));
        let sink = Arc::new(InMemoryAdvisorySink::new());

        let handle = AdvisoryRunner::default().spawn("advisory-test", reader, Arc::clone(&sink));
        wait_for_runs(&sink, 1);
        handle.shutdown();

        let settled = sink.runs().len();
        thread::sleep(Duration::from_millis(100));
        assert_eq!(sink.runs().len(), settled);
    }

    #[test]
    fn replaced_snapshot_is_observed_on_the_next_pass() {
        let reader = Arc::new(InMemorySnapshotReader::new(CatalogSnapshot::empty()));
        let sink = Arc::new(InMemoryAdvisorySink::new());

        let handle = AdvisoryRunner::default().spawn(
            "advisory-test",
            Arc::clone(&reader),
            Arc::clone(&sink),
        );
        wait_for_runs(&sink, 1);

        reader.replace(low_stock_snapshot());
        handle.trigger();
        let runs = wait_for_runs(&sink, 2);
        handle.shutdown();

        assert!(runs[0].iter().all(|a| a.agent != AgentId::Inventory));
        assert!(runs[1].iter().any(|a| a.agent == AgentId::Inventory));
    }
}
