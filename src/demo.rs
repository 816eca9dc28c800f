//! Stand-alone "ask the backend" button. Not connected to the composer.

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::api;
use crate::dom;
use crate::error::Result;

pub const BUTTON_ID: &str = "button";

pub fn bind(endpoint: &str) -> Result<()> {
    let Some(button) = dom::maybe_by_id::<HtmlElement>(BUTTON_ID)? else {
        return Ok(());
    };

    let endpoint = endpoint.to_string();
    EventListener::new(&button, "click", move |_| {
        let endpoint = endpoint.clone();
        spawn_local(async move {
            match api::fetch_demo_message(&endpoint).await {
                Ok(m) => gloo::dialogs::alert(&m.message),
                Err(e) => log::error!("demo fetch from {endpoint}: {e}"),
            }
        });
    })
    .forget();

    log::debug!("bound demo button");
    Ok(())
}
