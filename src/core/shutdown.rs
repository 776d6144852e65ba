//! # Single-fire shutdown gate and OS signal handling.
//!
//! Shutdown can be requested from three independent contexts: a feed-level
//! terminal condition, an OS interrupt, or the render surface closing.
//! [`ShutdownGate`] collapses them into exactly one firing: the first
//! [`request`] wins, records its [`StopReason`], and cancels the token the
//! runner is waiting on; every later request is a no-op.
//!
//! [`wait_for_shutdown_signal`] completes when the process receives a
//! termination signal.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//! - `SIGQUIT` (quit signal, often used for core dumps or hard stop)
//!
//! **Windows platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]
//!
//! [`request`]: ShutdownGate::request

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use crate::feed::TerminalKind;

/// Why the process is stopping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// OS interrupt signal.
    Interrupted,
    /// The render surface's window was closed.
    SurfaceClosed,
    /// A feed-level terminal condition.
    Feed {
        kind: TerminalKind,
        detail: String,
    },
}

impl StopReason {
    /// True when the process should exit with a failure status.
    ///
    /// Feed-level terminal conditions are failures; an interrupt or a
    /// closed window is a normal shutdown.
    pub fn is_failure(&self) -> bool {
        matches!(self, StopReason::Feed { .. })
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Interrupted => f.write_str("interrupted"),
            StopReason::SurfaceClosed => f.write_str("surface closed"),
            StopReason::Feed { kind, detail } => write!(f, "{kind} ({detail})"),
        }
    }
}

struct GateInner {
    fired: AtomicBool,
    reason: Mutex<Option<StopReason>>,
}

/// Single-fire shutdown trigger, cloneable across trigger contexts.
///
/// The first [`request`](ShutdownGate::request) records its reason and
/// cancels the token; the effects behind the gate (feed disconnect, surface
/// release, process exit) run exactly once no matter how many triggers race.
#[derive(Clone)]
pub struct ShutdownGate {
    inner: Arc<GateInner>,
    token: CancellationToken,
}

impl ShutdownGate {
    /// Creates an unfired gate.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GateInner {
                fired: AtomicBool::new(false),
                reason: Mutex::new(None),
            }),
            token: CancellationToken::new(),
        }
    }

    /// Fires the gate with the given reason.
    ///
    /// Returns `true` for the winning call, `false` for every later one.
    /// Safe to call from any context, including racing callers.
    pub fn request(&self, reason: StopReason) -> bool {
        if self.inner.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Ok(mut slot) = self.inner.reason.lock() {
            *slot = Some(reason);
        }
        self.token.cancel();
        true
    }

    /// True once any trigger has fired the gate.
    pub fn is_fired(&self) -> bool {
        self.inner.fired.load(Ordering::SeqCst)
    }

    /// The winning reason, once fired.
    pub fn reason(&self) -> Option<StopReason> {
        self.inner.reason.lock().ok().and_then(|r| r.clone())
    }

    /// Completes when the gate fires. Cancel-safe.
    pub async fn fired(&self) {
        self.token.cancelled().await;
    }
}

impl Default for ShutdownGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for a termination signal.
///
/// Each call creates independent signal listeners.
///
/// Returns `Ok(())` when any signal is received, or `Err` if signal
/// registration fails.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

/// Waits for a termination signal.
///
/// Each call creates independent signal listeners.
///
/// Returns `Ok(())` when any signal is received, or `Err` if signal
/// registration fails.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_wins() {
        let gate = ShutdownGate::new();
        assert!(!gate.is_fired());
        assert!(gate.request(StopReason::Interrupted));
        assert!(!gate.request(StopReason::SurfaceClosed));
        assert_eq!(gate.reason(), Some(StopReason::Interrupted));
    }

    #[test]
    fn test_clones_share_the_fire_state() {
        let gate = ShutdownGate::new();
        let clone = gate.clone();
        assert!(clone.request(StopReason::SurfaceClosed));
        assert!(gate.is_fired());
        assert!(!gate.request(StopReason::Interrupted));
        assert_eq!(gate.reason(), Some(StopReason::SurfaceClosed));
    }

    #[test]
    fn test_racing_requests_fire_exactly_once() {
        let gate = ShutdownGate::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let g = gate.clone();
            handles.push(std::thread::spawn(move || g.request(StopReason::Interrupted)));
        }
        let wins: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(wins, 1);
    }

    #[tokio::test]
    async fn test_fired_future_completes_after_request() {
        let gate = ShutdownGate::new();
        let waiter = gate.clone();
        let handle = tokio::spawn(async move { waiter.fired().await });
        gate.request(StopReason::Interrupted);
        handle.await.unwrap();
    }

    #[test]
    fn test_failure_classification() {
        assert!(!StopReason::Interrupted.is_failure());
        assert!(!StopReason::SurfaceClosed.is_failure());
        assert!(StopReason::Feed {
            kind: TerminalKind::Timeout,
            detail: "notice".into()
        }
        .is_failure());
    }
}
