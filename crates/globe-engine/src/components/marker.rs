use glam::Vec2;

/// Default marker radius in surface units.
pub const DEFAULT_MARKER_RADIUS: f32 = 8.0;

/// A geographic point rendered as a fixed-radius surface-space dot.
/// Immutable after load; the radius never scales with the projection.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    /// Longitude/latitude in degrees.
    pub coord: Vec2,
    /// Radius in surface units.
    pub radius: f32,
}

impl Marker {
    pub fn new(lon: f32, lat: f32) -> Self {
        Self {
            coord: Vec2::new(lon, lat),
            radius: DEFAULT_MARKER_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_radius() {
        let m = Marker::new(-74.0, 40.7);
        assert_eq!(m.radius, DEFAULT_MARKER_RADIUS);
        assert_eq!(m.coord, Vec2::new(-74.0, 40.7));
    }

    #[test]
    fn radius_override() {
        let m = Marker::new(0.0, 0.0).with_radius(3.0);
        assert_eq!(m.radius, 3.0);
    }
}
