use globe_engine::*;
use globe_engine::api::config::GlobeConfig;
use glam::Vec2;

/// (lon, lat) of each city marker.
const CITIES: [(f32, f32); 6] = [
    (-0.1, 51.5),    // London
    (-74.0, 40.7),   // New York
    (139.7, 35.7),   // Tokyo
    (151.2, -33.9),  // Sydney
    (28.0, -26.2),   // Johannesburg
    (-46.6, -23.5),  // Sao Paulo
];

/// Great-circle routes between city indices.
const ROUTES: [(usize, usize); 6] = [
    (0, 1), // London - New York
    (0, 2), // London - Tokyo
    (1, 5), // New York - Sao Paulo
    (2, 3), // Tokyo - Sydney
    (0, 4), // London - Johannesburg
    (4, 3), // Johannesburg - Sydney
];

/// A draggable globe with city markers and the flight arcs between them.
pub struct FlightArcs;

impl FlightArcs {
    pub fn new() -> Self {
        Self
    }
}

impl GlobeApp for FlightArcs {
    fn config(&self) -> GlobeConfig {
        GlobeConfig::default()
    }

    fn init(&mut self, globe: &mut Globe) {
        for &(lon, lat) in &CITIES {
            globe.add_marker(Marker::new(lon, lat));
        }
        for &(from, to) in &ROUTES {
            let (a_lon, a_lat) = CITIES[from];
            let (b_lon, b_lat) = CITIES[to];
            globe.add_arc(GeoArc::new(vec![
                Vec2::new(a_lon, a_lat),
                Vec2::new(b_lon, b_lat),
            ]));
        }
        // Start centered on the Atlantic so most routes face the viewer.
        globe.set_rotation(30.0, -10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_populates_markers_and_arcs() {
        let mut globe = Globe::new(GlobeConfig::default());
        FlightArcs::new().init(&mut globe);
        globe.redraw();
        assert!(globe.vertex_count() > 0);
        assert_eq!(globe.rotation(), [30.0, -10.0, 0.0]);
    }
}
