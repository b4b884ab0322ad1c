pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{GlobeConfig, GlobeStyle};
pub use api::globe::{Globe, GlobeApp};
pub use crate::core::graticule::Graticule;
pub use crate::core::projection::Orthographic;
pub use components::arc::GeoArc;
pub use components::marker::Marker;
pub use systems::drag::{Capture, DragController, DragState};
pub use systems::scene::build_scene;
pub use renderer::vector::{Color, ScenePainter, SceneVertex};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::dataset::GlobeDataset;
pub use bridge::protocol::ProtocolLayout;
