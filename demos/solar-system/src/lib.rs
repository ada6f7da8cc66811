use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod animation;
mod builder;
mod catalog;
mod game;
mod navigation;
mod picking;
use game::SolarViewer;

orrery_web::export_game!(SolarViewer, "solar-system");
