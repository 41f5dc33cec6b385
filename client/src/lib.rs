use wasm_bindgen::prelude::*;

mod dom;
pub mod error;
pub mod preview;
pub mod timestamp;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();

	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));
	log::debug!("Page helpers loaded");
}
