use glam::Vec2;
use crate::renderer::vector::Color;

/// Configuration for a globe surface, provided by the app.
#[derive(Debug, Clone)]
pub struct GlobeConfig {
    /// Render surface width in surface units (default: 960).
    pub surface_width: f32,
    /// Render surface height in surface units (default: 960).
    pub surface_height: f32,
    /// Sphere radius in surface units (default: 270).
    pub scale: f32,
    /// Angular clip radius in degrees (default: 90, the front hemisphere).
    pub clip_angle: f32,
    /// Resampling step for arcs and graticule lines, in degrees.
    pub precision: f32,
    /// Marker radius in surface units (default: 8).
    pub marker_radius: f32,
    /// Graticule spacing in degrees (default: 10 x 10).
    pub graticule_step: Vec2,
    /// Maximum number of scene vertices (default: 65536).
    pub max_vertices: usize,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            surface_width: 960.0,
            surface_height: 960.0,
            scale: 270.0,
            clip_angle: 90.0,
            precision: 2.5,
            marker_radius: 8.0,
            graticule_step: Vec2::new(10.0, 10.0),
            max_vertices: 65536,
        }
    }
}

/// Scene colors and stroke widths — the host stylesheet moved into config.
#[derive(Debug, Clone)]
pub struct GlobeStyle {
    pub sphere_fill: Color,
    pub sphere_stroke: Color,
    pub sphere_stroke_width: f32,
    pub graticule: Color,
    pub graticule_width: f32,
    pub arc: Color,
    pub arc_width: f32,
    pub marker: Color,
}

impl Default for GlobeStyle {
    fn default() -> Self {
        Self {
            sphere_fill: Color::rgb8(245, 248, 250),
            sphere_stroke: Color::BLACK,
            sphere_stroke_width: 1.5,
            graticule: Color::GRAY.with_alpha(0.4),
            graticule_width: 0.5,
            arc: Color::BLUE,
            arc_width: 2.0,
            marker: Color::BLUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_square() {
        let config = GlobeConfig::default();
        assert_eq!(config.surface_width, 960.0);
        assert_eq!(config.surface_height, 960.0);
        assert_eq!(config.scale, 270.0);
        assert_eq!(config.clip_angle, 90.0);
    }
}
