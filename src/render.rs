//! # Render-surface boundary.
//!
//! Map rendering itself lives outside this crate. A concrete surface (a
//! plotting window, a test double) implements [`Surface`]; the core only
//! calls its hooks: project a lon/lat pair, plot a marker, request a
//! redraw, and release the surface during shutdown.
//!
//! UI close is reported through a [`CancellationToken`] the surface cancels
//! when its window goes away; the runner watches that token as one of the
//! shutdown triggers.
//!
//! The surface is mutated only from the dispatch loop (via
//! [`MapObserver`](crate::MapObserver)) and from the runner's stop path,
//! both running on the single dispatch task.

use tokio_util::sync::CancellationToken;

/// Marker style for plotted points.
///
/// `style` uses plot-library notation ("ro" = red circle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub style: &'static str,
    pub size: u32,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            style: "ro",
            size: 5,
        }
    }
}

/// External render surface the map observer draws on.
///
/// `project` and `plot` correspond to the projection function and plot
/// primitive supplied by the rendering collaborator; errors are reported as
/// strings and wrapped into
/// [`ObserverError::Render`](crate::ObserverError::Render) at the observer.
pub trait Surface: Send {
    /// Projects a geographic point onto surface coordinates.
    fn project(&self, longitude: f64, latitude: f64) -> Result<(f64, f64), String>;

    /// Plots a marker at the projected point.
    fn plot(&mut self, x: f64, y: f64, marker: Marker) -> Result<(), String>;

    /// Requests a redraw so the new marker becomes visible.
    fn redraw(&mut self) -> Result<(), String>;

    /// Token cancelled when the surface's window is closed by the user.
    fn close_token(&self) -> CancellationToken;

    /// Releases the surface. Called exactly once during shutdown.
    fn release(&mut self);
}
