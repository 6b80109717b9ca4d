//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for WebGPU API. The match itself lives
//! in `game_core`; this crate detects the display, polls the keyboard and
//! draws each frame.
//!
//! Note: the browser-only modules are compiled for the wasm32 target only,
//! so the pure ones can be tested natively.

pub mod batch;
pub mod camera;
pub mod error;
pub mod input;
pub mod layout;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use batch::{InstanceData, SceneBatch, TextCommand};
pub use error::ClientError;
pub use input::{key_from_name, KeyboardState};
pub use layout::{fit_to_viewport, Fit};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    logger::init();
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = app::start().await {
            log::error!("failed to start Pong: {e}");
        }
    });
}
