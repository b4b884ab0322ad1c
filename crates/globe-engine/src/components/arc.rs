use glam::{Vec2, Vec3};

/// An ordered sequence of geographic coordinates rendered as a connected
/// line. Consecutive coordinates are joined along great circles.
/// Immutable after load.
#[derive(Debug, Clone)]
pub struct GeoArc {
    /// Lon/lat waypoints in degrees.
    pub coords: Vec<Vec2>,
}

impl GeoArc {
    pub fn new(coords: Vec<Vec2>) -> Self {
        Self { coords }
    }

    pub fn from_pairs(pairs: &[[f32; 2]]) -> Self {
        Self {
            coords: pairs.iter().map(|&[lon, lat]| Vec2::new(lon, lat)).collect(),
        }
    }

    /// Resample the arc along great circles at roughly `step` degrees per
    /// sample. Arcs with fewer than two waypoints yield nothing to draw.
    pub fn sample(&self, step: f32) -> Vec<Vec2> {
        if self.coords.len() < 2 {
            return Vec::new();
        }

        let mut samples = vec![self.coords[0]];
        for pair in self.coords.windows(2) {
            great_circle(pair[0], pair[1], step, &mut samples);
        }
        samples
    }
}

/// Append great-circle samples from `a` (exclusive) to `b` (inclusive).
fn great_circle(a: Vec2, b: Vec2, step: f32, out: &mut Vec<Vec2>) {
    let va = to_unit(a);
    let vb = to_unit(b);
    let angle = va.dot(vb).clamp(-1.0, 1.0).acos();
    let sin_angle = angle.sin();

    // Coincident or antipodal endpoints have no unique great circle.
    if sin_angle < 1e-6 {
        out.push(b);
        return;
    }

    // Nudge below the next integer so rounding noise in the angle cannot
    // add a spurious extra segment at exact multiples of the step.
    let segments = ((angle.to_degrees() / step) - 1e-4).ceil().max(1.0) as usize;
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let v = (va * ((1.0 - t) * angle).sin() + vb * (t * angle).sin()) / sin_angle;
        out.push(to_lonlat(v));
    }
}

fn to_unit(coord: Vec2) -> Vec3 {
    let lambda = coord.x.to_radians();
    let phi = coord.y.to_radians();
    Vec3::new(
        phi.cos() * lambda.cos(),
        phi.cos() * lambda.sin(),
        phi.sin(),
    )
}

fn to_lonlat(v: Vec3) -> Vec2 {
    Vec2::new(
        v.y.atan2(v.x).to_degrees(),
        (v.z / v.length()).clamp(-1.0, 1.0).asin().to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_arcs_sample_to_nothing() {
        assert!(GeoArc::new(vec![]).sample(2.5).is_empty());
        assert!(GeoArc::new(vec![Vec2::ZERO]).sample(2.5).is_empty());
    }

    #[test]
    fn endpoints_are_preserved() {
        let arc = GeoArc::from_pairs(&[[-74.0, 40.7], [139.7, 35.7]]);
        let samples = arc.sample(2.5);
        let first = samples.first().unwrap();
        let last = samples.last().unwrap();
        assert!((first.x - -74.0).abs() < 1e-3 && (first.y - 40.7).abs() < 1e-3);
        assert!((last.x - 139.7).abs() < 1e-3 && (last.y - 35.7).abs() < 1e-3);
    }

    #[test]
    fn equatorial_midpoint_is_halfway() {
        let arc = GeoArc::from_pairs(&[[0.0, 0.0], [90.0, 0.0]]);
        let samples = arc.sample(2.5);
        // 90 degrees at a 2.5 degree step: 37 samples including both ends.
        assert_eq!(samples.len(), 37);
        let mid = samples[18];
        assert!((mid.x - 45.0).abs() < 1e-3);
        assert!(mid.y.abs() < 1e-3);
    }

    #[test]
    fn multi_leg_arc_passes_through_waypoints() {
        let arc = GeoArc::from_pairs(&[[0.0, 0.0], [30.0, 0.0], [30.0, 40.0]]);
        let samples = arc.sample(5.0);
        assert!(samples
            .iter()
            .any(|c| (c.x - 30.0).abs() < 1e-3 && c.y.abs() < 1e-3));
    }

    #[test]
    fn coarse_step_samples_fewer_points() {
        let arc = GeoArc::from_pairs(&[[0.0, 0.0], [90.0, 0.0]]);
        assert!(arc.sample(10.0).len() < arc.sample(2.5).len());
    }
}
