use wasm_bindgen::prelude::*;
use globe_engine::*;

mod app;
use app::FlightArcs;

globe_web::export_globe!(FlightArcs, "flight-arcs");
