//! Browser bridge for the starfield.
//!
//! The page drives everything: it calls `starfield_init` once, `starfield_tick`
//! from `requestAnimationFrame`, `starfield_resize` on window resize, and
//! reads line vertices from WASM memory at `get_buffer_ptr()` using the
//! layout in `starfield::bridge::protocol`.

pub mod runner;
pub mod surface;

pub use runner::StarfieldRunner;
pub use surface::SharedBufferSurface;

use std::cell::RefCell;
use starfield::{StarfieldConfig, Viewport};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<StarfieldRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls made before init are ignored.
fn with_runner<R: Default>(f: impl FnOnce(&mut StarfieldRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("starfield not initialized, call starfield_init() first");
            R::default()
        }
    })
}

fn install(config: StarfieldConfig, width: u32, height: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = StarfieldRunner::new(config, Viewport::new(width, height));
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("starfield: initialized at {}x{}", width, height);
}

#[wasm_bindgen]
pub fn starfield_init(width: u32, height: u32) {
    install(StarfieldConfig::default(), width, height);
}

/// Initialize with a JSON config. Missing fields take their defaults.
#[wasm_bindgen]
pub fn starfield_init_with_config(json: &str, width: u32, height: u32) -> Result<(), JsValue> {
    let config = StarfieldConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(config, width, height);
    Ok(())
}

#[wasm_bindgen]
pub fn starfield_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(Viewport::new(width, height)));
}

#[wasm_bindgen]
pub fn starfield_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_buffer_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.surface().buffer_ptr())
    })
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.surface().layout().buffer_total_floats as u32)
}

#[wasm_bindgen]
pub fn get_line_vertex_count() -> u32 {
    with_runner(|r| r.lines().vertex_count() as u32)
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.field().len() as u32)
}
