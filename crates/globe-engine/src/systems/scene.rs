//! Scene construction.
//!
//! Every rebuild tessellates the full scene from geographic source data
//! and the current projection: sphere, graticule, arcs, markers. Nothing
//! is cached between rebuilds, so the output is a pure function of
//! (data, style, projection) and repeated rebuilds with unchanged state
//! produce identical buffers.

use glam::Vec2;
use crate::api::config::GlobeStyle;
use crate::components::arc::GeoArc;
use crate::components::marker::Marker;
use crate::core::graticule::Graticule;
use crate::core::projection::Orthographic;
use crate::renderer::vector::{Color, ScenePainter};

/// Tessellate the full scene into `painter`.
pub fn build_scene(
    projection: &Orthographic,
    graticule: &Graticule,
    markers: &[Marker],
    arcs: &[GeoArc],
    style: &GlobeStyle,
    precision: f32,
    painter: &mut ScenePainter,
) {
    painter.clear();

    // Sphere fill and outline at the projection center.
    painter.fill_circle(projection.translate(), projection.scale(), style.sphere_fill);
    painter.stroke_circle(
        projection.translate(),
        projection.scale(),
        style.sphere_stroke_width,
        style.sphere_stroke,
    );

    for line in graticule.lines() {
        stroke_clipped(projection, &line, style.graticule_width, style.graticule, painter);
    }

    for arc in arcs {
        let samples = arc.sample(precision);
        stroke_clipped(projection, &samples, style.arc_width, style.arc, painter);
    }

    // Markers project without clipping: every marker gets a surface
    // position, even when its coordinate currently faces away.
    for marker in markers {
        let pos = projection.project_unclipped(marker.coord);
        painter.fill_circle(pos, marker.radius, style.marker);
    }
}

/// Stroke a lon/lat polyline, splitting it into visible runs wherever
/// samples fall outside the clip angle.
fn stroke_clipped(
    projection: &Orthographic,
    coords: &[Vec2],
    width: f32,
    color: Color,
    painter: &mut ScenePainter,
) {
    let mut run: Vec<Vec2> = Vec::new();
    for &coord in coords {
        match projection.project(coord) {
            Some(p) => run.push(p),
            None => {
                if run.len() >= 2 {
                    painter.stroke_polyline(&run, width, color);
                }
                run.clear();
            }
        }
    }
    if run.len() >= 2 {
        painter.stroke_polyline(&run, width, color);
    }
}
