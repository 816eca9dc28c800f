/* -----------------------------
   DOM helpers
----------------------------- */

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::{Error, Result};

pub fn document() -> Document {
    gloo::utils::document()
}

/// Looks up `#id` and casts it to the element type the caller expects.
pub fn by_id<T: JsCast>(id: &str) -> Result<T> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::WrongElementType(id.to_string()))
}

/// Same as [`by_id`] but for controls a page may legitimately lack.
pub fn maybe_by_id<T: JsCast>(id: &str) -> Result<Option<T>> {
    match by_id(id) {
        Ok(el) => Ok(Some(el)),
        Err(Error::MissingElement(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn by_selector<T: JsCast>(selector: &str) -> Result<T> {
    document()
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::WrongElementType(selector.to_string()))
}

pub fn set_class(el: &Element, class_name: &str, on: bool) -> Result<()> {
    let list = el.class_list();
    if on {
        list.add_1(class_name)?;
    } else {
        list.remove_1(class_name)?;
    }
    Ok(())
}

pub fn set_text(el: &Element, value: &str) {
    el.set_text_content(Some(value));
}
