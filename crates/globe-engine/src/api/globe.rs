use glam::Vec2;
use crate::api::config::{GlobeConfig, GlobeStyle};
use crate::assets::dataset::GlobeDataset;
use crate::components::arc::GeoArc;
use crate::components::marker::Marker;
use crate::core::graticule::Graticule;
use crate::core::projection::Orthographic;
use crate::input::queue::InputEvent;
use crate::renderer::vector::ScenePainter;
use crate::systems::drag::DragController;
use crate::systems::scene::build_scene;

/// The per-app contract: configuration plus one-shot scene setup.
pub trait GlobeApp {
    /// Return surface configuration. Called once before init.
    fn config(&self) -> GlobeConfig {
        GlobeConfig::default()
    }

    /// Populate the globe: initial rotation, markers, arcs.
    fn init(&mut self, globe: &mut Globe);
}

/// All globe state under one owner: projection, scene data, drag
/// controller, and the tessellated output buffer. Both the event path and
/// the redraw path borrow from here; there is no hidden shared state.
pub struct Globe {
    config: GlobeConfig,
    style: GlobeStyle,
    projection: Orthographic,
    graticule: Graticule,
    markers: Vec<Marker>,
    arcs: Vec<GeoArc>,
    drag: DragController,
    painter: ScenePainter,
}

impl Globe {
    pub fn new(config: GlobeConfig) -> Self {
        let projection = Orthographic::new()
            .with_scale(config.scale)
            .with_translate(Vec2::new(
                config.surface_width / 2.0,
                config.surface_height / 2.0,
            ))
            .with_clip_angle(config.clip_angle);
        let graticule = Graticule::new()
            .with_step(config.graticule_step)
            .with_precision(config.precision);

        Self {
            config,
            style: GlobeStyle::default(),
            projection,
            graticule,
            markers: Vec::new(),
            arcs: Vec::new(),
            drag: DragController::new(),
            painter: ScenePainter::new(),
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn set_style(&mut self, style: GlobeStyle) {
        self.style = style;
    }

    /// Replace the scene's point and arc collections from a dataset.
    pub fn set_dataset(&mut self, dataset: &GlobeDataset) {
        self.markers = dataset
            .points
            .iter()
            .map(|&[lon, lat]| Marker::new(lon, lat).with_radius(self.config.marker_radius))
            .collect();
        self.arcs = dataset.arcs.iter().map(|a| GeoArc::from_pairs(a)).collect();
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn add_arc(&mut self, arc: GeoArc) {
        self.arcs.push(arc);
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.projection.rotation()
    }

    pub fn set_rotation(&mut self, lambda: f32, phi: f32) {
        self.projection.set_rotation(lambda, phi);
    }

    pub fn projection(&self) -> &Orthographic {
        &self.projection
    }

    /// Whether a drag gesture is in progress (host mirrors this as a
    /// "dragging" style on the surface).
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Feed one input event to the drag controller.
    /// Returns true when the projection state changed (redraw needed).
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drag.on_pointer_down(Vec2::new(x, y), &self.projection);
                false
            }
            InputEvent::PointerMove { x, y } => {
                self.drag.on_pointer_move(Vec2::new(x, y), &mut self.projection)
            }
            InputEvent::PointerUp { x, y } => {
                self.drag.on_pointer_up(Vec2::new(x, y));
                false
            }
        }
    }

    /// Rebuild all projected geometry from the current projection state.
    /// Idempotent: repeated calls with unchanged state produce identical
    /// buffers.
    pub fn redraw(&mut self) {
        build_scene(
            &self.projection,
            &self.graticule,
            &self.markers,
            &self.arcs,
            &self.style,
            self.config.precision,
            &mut self.painter,
        );
        if self.painter.vertex_count() > self.config.max_vertices {
            log::warn!(
                "globe: scene produced {} vertices, surface capacity is {}",
                self.painter.vertex_count(),
                self.config.max_vertices
            );
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.painter.vertex_count()
    }

    pub fn vertices(&self) -> &[f32] {
        self.painter.buffer()
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.painter.buffer_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> GlobeDataset {
        GlobeDataset {
            points: vec![[-0.1, 51.5], [139.7, 35.7]],
            arcs: vec![vec![[-0.1, 51.5], [139.7, 35.7]]],
        }
    }

    #[test]
    fn redraw_is_idempotent_end_to_end() {
        let mut globe = Globe::new(GlobeConfig::default());
        globe.set_dataset(&sample_dataset());
        globe.set_rotation(12.0, -34.0);

        globe.redraw();
        let first = globe.vertices().to_vec();
        globe.redraw();
        assert_eq!(first, globe.vertices());
    }

    #[test]
    fn empty_dataset_redraw_succeeds() {
        let mut globe = Globe::new(GlobeConfig::default());
        globe.redraw();
        assert!(globe.vertex_count() > 0);
    }

    #[test]
    fn drag_events_rotate_the_projection() {
        let mut globe = Globe::new(GlobeConfig::default());
        assert!(!globe.handle_event(&InputEvent::PointerDown { x: 100.0, y: 100.0 }));
        assert!(globe.is_dragging());
        assert!(globe.handle_event(&InputEvent::PointerMove { x: 140.0, y: 75.0 }));
        assert_eq!(globe.rotation(), [40.0, 25.0, 0.0]);
        assert!(!globe.handle_event(&InputEvent::PointerUp { x: 140.0, y: 75.0 }));
        assert!(!globe.is_dragging());
    }

    #[test]
    fn simulated_drag_matches_direct_rotation() {
        let mut via_drag = Globe::new(GlobeConfig::default());
        via_drag.set_dataset(&sample_dataset());
        via_drag.handle_event(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        via_drag.handle_event(&InputEvent::PointerMove { x: 40.0, y: 25.0 });
        via_drag.redraw();

        let mut direct = Globe::new(GlobeConfig::default());
        direct.set_dataset(&sample_dataset());
        direct.set_rotation(40.0, -25.0);
        direct.redraw();

        assert_eq!(via_drag.rotation(), direct.rotation());
        assert_eq!(via_drag.vertices(), direct.vertices());
    }

    #[test]
    fn moves_without_a_gesture_request_no_redraw() {
        let mut globe = Globe::new(GlobeConfig::default());
        assert!(!globe.handle_event(&InputEvent::PointerMove { x: 10.0, y: 10.0 }));
        assert_eq!(globe.rotation(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn dataset_replaces_scene_content() {
        let mut globe = Globe::new(GlobeConfig::default());
        globe.redraw();
        let empty = globe.vertex_count();

        globe.set_dataset(&sample_dataset());
        globe.redraw();
        assert!(globe.vertex_count() > empty);
    }
}
