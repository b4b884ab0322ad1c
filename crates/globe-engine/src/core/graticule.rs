use glam::Vec2;

/// Generator for graticule polylines: meridians and parallels sampled
/// densely enough that their projected strokes stay smooth.
#[derive(Debug, Clone)]
pub struct Graticule {
    /// Spacing between meridians (x) and parallels (y), in degrees.
    step: Vec2,
    /// Meridians span latitudes -extent_lat..extent_lat.
    extent_lat: f32,
    /// Sampling step along each line, in degrees.
    precision: f32,
}

impl Graticule {
    pub fn new() -> Self {
        Self {
            step: Vec2::new(10.0, 10.0),
            extent_lat: 80.0,
            precision: 2.5,
        }
    }

    pub fn with_step(mut self, step: Vec2) -> Self {
        self.step = step;
        self
    }

    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// All graticule lines as lon/lat polylines.
    pub fn lines(&self) -> Vec<Vec<Vec2>> {
        let mut lines = Vec::new();
        for lon in span(-180.0, 180.0, self.step.x) {
            lines.push(
                span(-self.extent_lat, self.extent_lat, self.precision)
                    .map(|lat| Vec2::new(lon, lat))
                    .collect(),
            );
        }
        for lat in span(-self.extent_lat, self.extent_lat, self.step.y) {
            lines.push(
                span(-180.0, 180.0, self.precision)
                    .map(|lon| Vec2::new(lon, lat))
                    .collect(),
            );
        }
        lines
    }
}

impl Default for Graticule {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive sampling of [from, to] in `step` increments.
/// Computed from the index to avoid accumulation drift.
fn span(from: f32, to: f32, step: f32) -> impl Iterator<Item = f32> {
    let n = ((to - from) / step).round().max(1.0) as usize;
    let step = (to - from) / n as f32;
    (0..=n).map(move |i| from + i as f32 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_count() {
        let lines = Graticule::new().lines();
        // 37 meridians (every 10 degrees, both ends of the seam) plus
        // 17 parallels between -80 and 80.
        assert_eq!(lines.len(), 37 + 17);
    }

    #[test]
    fn meridians_hold_longitude_constant() {
        let lines = Graticule::new().lines();
        let meridian = &lines[0];
        assert!(meridian.iter().all(|c| c.x == meridian[0].x));
        assert_eq!(meridian.first().unwrap().y, -80.0);
        assert_eq!(meridian.last().unwrap().y, 80.0);
    }

    #[test]
    fn parallels_hold_latitude_constant() {
        let lines = Graticule::new().lines();
        let parallel = lines.last().unwrap();
        assert!(parallel.iter().all(|c| c.y == parallel[0].y));
        assert_eq!(parallel.first().unwrap().x, -180.0);
        assert_eq!(parallel.last().unwrap().x, 180.0);
    }

    #[test]
    fn precision_controls_sample_density() {
        let coarse = Graticule::new().with_precision(10.0).lines();
        let fine = Graticule::new().with_precision(2.5).lines();
        assert!(fine[0].len() > coarse[0].len());
    }
}
