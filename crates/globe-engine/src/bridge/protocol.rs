/// Shared vertex buffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Vertices: max_vertices × 6 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::config::GlobeConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_VERTICES: usize = 1;
pub const HEADER_VERTEX_COUNT: usize = 2;
pub const HEADER_SURFACE_WIDTH: usize = 3;
pub const HEADER_SURFACE_HEIGHT: usize = 4;
pub const HEADER_DRAGGING: usize = 5;
pub const HEADER_PROTOCOL_VERSION: usize = 6;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per scene vertex: x, y, r, g, b, a (wire format — never changes).
pub const VERTEX_FLOATS: usize = 6;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum scene vertices.
    pub max_vertices: usize,
    /// Size of the vertex data section in floats.
    pub vertex_data_floats: usize,
    /// Offset (in floats) where vertex data begins.
    pub vertex_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from a raw vertex capacity.
    pub fn new(max_vertices: usize) -> Self {
        let vertex_data_floats = max_vertices * VERTEX_FLOATS;
        let vertex_data_offset = HEADER_FLOATS;
        let buffer_total_floats = vertex_data_offset + vertex_data_floats;

        Self {
            max_vertices,
            vertex_data_floats,
            vertex_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GlobeConfig.
    pub fn from_config(config: &GlobeConfig) -> Self {
        Self::new(config.max_vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GlobeConfig::default());
        assert_eq!(layout.max_vertices, 65536);
        assert_eq!(layout.vertex_data_floats, 65536 * VERTEX_FLOATS);
        assert_eq!(layout.vertex_data_offset, HEADER_FLOATS);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 65536 * VERTEX_FLOATS);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn custom_capacity_computes_correctly() {
        let layout = ProtocolLayout::new(1024);
        assert_eq!(layout.vertex_data_floats, 1024 * 6);
        assert_eq!(layout.buffer_total_floats, 8 + 1024 * 6);
    }
}
