//! Browser host for the Launchpad page behavior.
//!
//! Built with the `hydrate` feature this crate compiles to a wasm module that
//! binds [`page::controller::PageController`] to the static markup served
//! from `website/`: it reads the embedded page config, resolves the view
//! bindings against the document, forwards DOM events to the controller and
//! applies the actions it returns. Without `hydrate` only the browser-free
//! helpers are built, so the crate still tests natively.
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | `PageHost`: event binding, action application, timers |
//! | [`dom`] | Markup fragments and selection helpers |
//! | [`page_config`] | Embedded `#page-config` JSON |
//! | [`random`] | `RngCore` over a unit-interval source (`Math.random`) |
//! | `storage` | `localStorage`-backed `KeyValueStore` (hydrate only) |

pub mod dom;
pub mod host;
pub mod page_config;
pub mod random;
#[cfg(feature = "hydrate")]
pub mod storage;

/// Wasm entry point: install logging, then mount once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = host::mount_when_ready() {
        log::error!("page behavior not mounted: {e}");
    }
}
