/* -----------------------------
   Escape blog page scripts
----------------------------- */

// Loaded by the login and admin templates. On start it binds whichever of
// these the current page has:
// - password show/hide toggle (login)
// - post composer: live preview, image slots, publish (admin)
// - demo fetch button

use wasm_bindgen::prelude::*;

pub mod api;
pub mod composer;
pub mod config;
pub mod demo;
pub mod dom;
pub mod draft;
pub mod error;
pub mod image;
pub mod mirror;
pub mod password;

use composer::Composer;
use config::ComposerConfig;
use password::PasswordToggle;

/* -----------------------------
   Entrypoint
----------------------------- */

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, cfg_err) = ComposerConfig::load();
    if console_log::init_with_level(cfg.level()).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    if let Some(e) = cfg_err {
        log::error!("{e}; using defaults");
    }

    match PasswordToggle::find() {
        Ok(Some(toggle)) => toggle.bind(),
        Ok(None) => {}
        Err(e) => log::error!("password toggle not bound: {e}"),
    }

    if let Err(e) = Composer::mount(&cfg) {
        log::error!("composer not bound: {e}");
    }

    if let Err(e) = demo::bind(&cfg.demo_endpoint) {
        log::error!("demo button not bound: {e}");
    }
}
