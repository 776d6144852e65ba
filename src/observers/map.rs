//! # Map observer.
//!
//! Plots tweet locations on the render surface: projects the coordinate
//! pair, adds a marker at the projected point, and requests a redraw.
//! Any step failing is reported as a render error and isolated by the
//! dispatching set; no marker is guaranteed to have been drawn on failure.

use std::sync::{Arc, Mutex};

use crate::error::ObserverError;
use crate::feed::RawEvent;
use crate::render::{Marker, Surface};

use super::Observe;

/// Renders tweets as markers on a shared render surface.
///
/// The surface handle is shared with the runner, which releases it during
/// shutdown; all mutation happens on the single dispatch task.
pub struct MapObserver {
    surface: Arc<Mutex<dyn Surface>>,
    marker: Marker,
}

impl MapObserver {
    /// Creates a map observer over the given surface with the default
    /// marker style.
    pub fn new(surface: Arc<Mutex<dyn Surface>>) -> Self {
        Self {
            surface,
            marker: Marker::default(),
        }
    }

    /// Overrides the marker style.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}

impl Observe for MapObserver {
    fn update(&mut self, raw: &RawEvent) -> Result<(), ObserverError> {
        let coords = raw
            .coordinates
            .as_ref()
            .ok_or_else(|| ObserverError::malformed("missing coordinates"))?;

        let mut surface = self
            .surface
            .lock()
            .map_err(|_| ObserverError::render("surface lock poisoned"))?;
        let (x, y) = surface
            .project(coords.longitude(), coords.latitude())
            .map_err(ObserverError::render)?;
        surface.plot(x, y, self.marker).map_err(ObserverError::render)?;
        surface.redraw().map_err(ObserverError::render)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::feed::CoordinatePair;

    /// Surface double recording plot calls; any hook can be told to fail.
    struct FakeSurface {
        plots: Vec<(f64, f64, Marker)>,
        redraws: usize,
        fail_project: bool,
        fail_plot: bool,
        fail_redraw: bool,
        close: CancellationToken,
    }

    impl FakeSurface {
        fn shared() -> Arc<Mutex<FakeSurface>> {
            Arc::new(Mutex::new(FakeSurface {
                plots: Vec::new(),
                redraws: 0,
                fail_project: false,
                fail_plot: false,
                fail_redraw: false,
                close: CancellationToken::new(),
            }))
        }
    }

    impl Surface for FakeSurface {
        fn project(&self, longitude: f64, latitude: f64) -> Result<(f64, f64), String> {
            if self.fail_project {
                return Err("projection failed".into());
            }
            // Identity-ish projection, offset so tests can tell it ran.
            Ok((longitude / 10.0, latitude / 3.0))
        }

        fn plot(&mut self, x: f64, y: f64, marker: Marker) -> Result<(), String> {
            if self.fail_plot {
                return Err("plot failed".into());
            }
            self.plots.push((x, y, marker));
            Ok(())
        }

        fn redraw(&mut self) -> Result<(), String> {
            if self.fail_redraw {
                return Err("redraw failed".into());
            }
            self.redraws += 1;
            Ok(())
        }

        fn close_token(&self) -> CancellationToken {
            self.close.clone()
        }

        fn release(&mut self) {}
    }

    fn raw_at(longitude: f64, latitude: f64) -> RawEvent {
        RawEvent {
            coordinates: Some(CoordinatePair {
                coordinates: [longitude, latitude],
            }),
            ..RawEvent::default()
        }
    }

    #[test]
    fn test_update_projects_plots_and_redraws() {
        let surface = FakeSurface::shared();
        let mut obs = MapObserver::new(surface.clone());
        obs.update(&raw_at(100.0, 45.0)).unwrap();

        let s = surface.lock().unwrap();
        assert_eq!(s.plots, vec![(10.0, 15.0, Marker::default())]);
        assert_eq!(s.redraws, 1);
    }

    #[test]
    fn test_default_marker_is_red_circle_size_five() {
        let marker = Marker::default();
        assert_eq!(marker.style, "ro");
        assert_eq!(marker.size, 5);
    }

    #[test]
    fn test_missing_coordinates_is_malformed() {
        let surface = FakeSurface::shared();
        let mut obs = MapObserver::new(surface.clone());
        let err = obs.update(&RawEvent::default()).unwrap_err();
        assert_eq!(err.as_label(), "observer_malformed_event");
        assert!(surface.lock().unwrap().plots.is_empty());
    }

    #[test]
    fn test_projection_failure_is_a_render_error() {
        let surface = FakeSurface::shared();
        surface.lock().unwrap().fail_project = true;
        let mut obs = MapObserver::new(surface.clone());
        let err = obs.update(&raw_at(0.0, 0.0)).unwrap_err();
        assert_eq!(err.as_label(), "observer_render_failed");
    }

    #[test]
    fn test_plot_failure_is_a_render_error() {
        let surface = FakeSurface::shared();
        surface.lock().unwrap().fail_plot = true;
        let mut obs = MapObserver::new(surface.clone());
        assert!(obs.update(&raw_at(0.0, 0.0)).is_err());
        assert_eq!(surface.lock().unwrap().redraws, 0);
    }

    #[test]
    fn test_redraw_failure_is_a_render_error() {
        let surface = FakeSurface::shared();
        surface.lock().unwrap().fail_redraw = true;
        let mut obs = MapObserver::new(surface.clone());
        let err = obs.update(&raw_at(0.0, 0.0)).unwrap_err();
        assert_eq!(err.as_label(), "observer_render_failed");
        // The marker was plotted before the redraw failed; no rollback.
        assert_eq!(surface.lock().unwrap().plots.len(), 1);
    }
}
