pub mod runner;

pub use runner::GlobeRunner;

/// Generate all `#[wasm_bindgen]` exports for a globe app.
///
/// Generates:
/// - `thread_local!` storage for the GlobeRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (globe_init, globe_tick, pointer handlers,
///   dataset loading, buffer/size accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use globe_engine::*;
/// use globe_web::GlobeRunner;
///
/// mod app;
/// use app::MyApp;
///
/// globe_web::export_globe!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `globe_engine::GlobeApp`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_globe {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GlobeRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GlobeRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Globe not initialized. Call globe_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn globe_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::GlobeRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn globe_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn globe_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn globe_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn globe_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn globe_load_dataset(json: &str) {
            with_runner(|r| r.load_dataset(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vertex_count() -> u32 {
            with_runner(|r| r.vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        /// Nonzero while a drag gesture is active; the host mirrors this
        /// as a "dragging" class on the surface element.
        #[wasm_bindgen]
        pub fn get_dragging() -> u32 {
            with_runner(|r| r.dragging())
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> f32 {
            with_runner(|r| r.surface_width())
        }

        /// The host resizes its containing frame to this height at startup.
        #[wasm_bindgen]
        pub fn get_surface_height() -> f32 {
            with_runner(|r| r.surface_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_vertices() -> u32 {
            with_runner(|r| r.max_vertices())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
