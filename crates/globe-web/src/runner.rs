use globe_engine::{Globe, GlobeApp, GlobeDataset, InputEvent, InputQueue, ProtocolLayout};

/// Generic runner that wires a globe app to the browser event loop.
///
/// Each concrete app creates a `thread_local!` GlobeRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GlobeRunner<A: GlobeApp> {
    app: A,
    globe: Globe,
    input: InputQueue,
    layout: ProtocolLayout,
    frame: u32,
    initialized: bool,
    needs_redraw: bool,
}

impl<A: GlobeApp> GlobeRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);
        let globe = Globe::new(config);

        Self {
            app,
            globe,
            input: InputQueue::new(),
            layout,
            frame: 0,
            initialized: false,
            needs_redraw: false,
        }
    }

    /// Initialize the app's scene and render the first frame.
    /// Call once after construction.
    pub fn init(&mut self) {
        self.app.init(&mut self.globe);
        self.globe.redraw();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: replay queued pointer events through the drag
    /// controller and rebuild the scene only when the projection changed.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        let mut changed = self.needs_redraw;
        for event in self.input.drain() {
            changed |= self.globe.handle_event(&event);
        }
        if changed {
            self.globe.redraw();
            self.needs_redraw = false;
        }
        self.frame = self.frame.wrapping_add(1);
    }

    /// Replace the scene's point/arc collections from host-supplied JSON.
    /// A malformed dataset is dropped with a warning; the session keeps
    /// its previous data.
    pub fn load_dataset(&mut self, json: &str) {
        match GlobeDataset::from_json(json) {
            Ok(dataset) => {
                self.globe.set_dataset(&dataset);
                self.needs_redraw = true;
            }
            Err(err) => log::warn!("globe: dataset rejected: {err}"),
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.globe.vertices_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.globe.vertex_count() as u32
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame
    }

    /// Whether a drag gesture is active; the host mirrors this as a
    /// "dragging" class on the surface element.
    pub fn dragging(&self) -> u32 {
        self.globe.is_dragging() as u32
    }

    pub fn surface_width(&self) -> f32 {
        self.globe.config().surface_width
    }

    /// The host resizes its containing frame to this at startup.
    pub fn surface_height(&self) -> f32 {
        self.globe.config().surface_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_vertices(&self) -> u32 {
        self.layout.max_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
