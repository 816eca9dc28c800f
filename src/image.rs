//! The three image slots of the composer: author photo, tiny preview, hero.
//!
//! Selecting a file reads it into an [`ImageAsset`] and shows it in both
//! previews of the slot; "remove" drops the asset and puts the slot's
//! placeholder art back. Slots never touch each other's state.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::dom;
use crate::error::{Error, Result};

/// Added to a slot's remove control while it holds a custom image.
pub const CONTROLS_VISIBLE_CLASS: &str = "img-buttons";
/// Added to a slot's "upload an image" signage while it holds a custom image.
pub const SIGNAGE_HIDDEN_CLASS: &str = "upload-signage_hidden";
/// Author upload button style once a photo is chosen.
pub const UPLOAD_NEW_CLASS: &str = "upload-button_secondary";
pub const UPLOAD_NEW_LABEL: &str = "Upload New";

const BASE64_MARKER: &str = ";base64,";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Author,
    Preview,
    Post,
}

#[derive(Debug)]
pub struct SlotSpec {
    pub input_id: &'static str,
    pub preview_ids: [&'static str; 2],
    pub remove_id: &'static str,
    pub signage_id: &'static str,
    /// Only the author slot relabels its upload button.
    pub button_id: Option<&'static str>,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Author, Slot::Preview, Slot::Post];

    pub fn spec(self) -> &'static SlotSpec {
        match self {
            Slot::Author => &SlotSpec {
                input_id: "authorPhoto",
                preview_ids: ["authorPhotoPreview", "authorPhotoPreviewTiny"],
                remove_id: "authorPhotoRemove",
                signage_id: "authorPhotoSignage",
                button_id: Some("authorPhotoButton"),
            },
            Slot::Preview => &SlotSpec {
                input_id: "previewPhoto",
                preview_ids: ["previewPhotoPreview", "previewPhotoPreviewTiny"],
                remove_id: "previewPhotoRemove",
                signage_id: "previewPhotoSignage",
                button_id: None,
            },
            Slot::Post => &SlotSpec {
                input_id: "postPhoto",
                preview_ids: ["postPhotoPreview", "postPhotoPreviewTiny"],
                remove_id: "postPhotoRemove",
                signage_id: "postPhotoSignage",
                button_id: None,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub name: String,
    /// Base64 body of `data_url`, without the `data:...;base64,` prefix.
    pub payload: String,
    pub data_url: String,
}

/// Splits `data:<mime>;base64,<payload>` into mime type and payload.
///
/// A bare `data:` is what Chromium hands back for a 0-byte file; it parses
/// as an empty mime type and an empty payload.
pub fn parse_data_url(data_url: &str) -> Result<(&str, &str)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::DataUrl(truncate(data_url)))?;
    if rest.is_empty() {
        return Ok(("", ""));
    }
    let at = rest
        .find(BASE64_MARKER)
        .ok_or_else(|| Error::DataUrl(truncate(data_url)))?;
    let mime = rest[..at].split(';').next().unwrap_or_default();
    Ok((mime, &rest[at + BASE64_MARKER.len()..]))
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}

impl ImageAsset {
    pub fn from_data_url(name: impl Into<String>, data_url: String) -> Result<Self> {
        let payload = parse_data_url(&data_url)?.1.to_string();
        Ok(Self {
            name: name.into(),
            payload,
            data_url,
        })
    }
}

/// A file picker's current selection.
pub trait FilePick {
    type File;

    fn first(&self) -> Option<Self::File>;
}

impl FilePick for web_sys::FileList {
    type File = web_sys::File;

    fn first(&self) -> Option<web_sys::File> {
        self.get(0)
    }
}

/// The file a `change` event should read, if any. Without one the slot is
/// left exactly as it was.
pub fn first_file<S: FilePick>(files: Option<S>) -> Option<S::File> {
    files.and_then(|f| f.first())
}

/// Reads a selected file into an asset. This is the slot's only await point.
pub async fn read_asset(file: web_sys::File) -> Result<ImageAsset> {
    let file = gloo::file::File::from(file);
    let data_url = gloo::file::futures::read_as_data_url(&file).await?;
    ImageAsset::from_data_url(file.name(), data_url)
}

/// Current custom image of each slot. `None` means the placeholder is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSlots {
    author: Option<ImageAsset>,
    preview: Option<ImageAsset>,
    post: Option<ImageAsset>,
}

impl ImageSlots {
    pub fn get(&self, slot: Slot) -> Option<&ImageAsset> {
        match slot {
            Slot::Author => self.author.as_ref(),
            Slot::Preview => self.preview.as_ref(),
            Slot::Post => self.post.as_ref(),
        }
    }

    fn entry(&mut self, slot: Slot) -> &mut Option<ImageAsset> {
        match slot {
            Slot::Author => &mut self.author,
            Slot::Preview => &mut self.preview,
            Slot::Post => &mut self.post,
        }
    }

    /// Replaces whatever the slot held.
    pub fn set(&mut self, slot: Slot, asset: ImageAsset) {
        *self.entry(slot) = Some(asset);
    }

    pub fn clear(&mut self, slot: Slot) {
        *self.entry(slot) = None;
    }
}

/// Everything the DOM shows for one slot, derived from its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotPresentation {
    pub src: String,
    pub controls_visible: bool,
    pub signage_hidden: bool,
    pub upload_new: bool,
}

impl SlotPresentation {
    pub fn for_state(slot: Slot, asset: Option<&ImageAsset>, default_src: &str) -> Self {
        let custom = asset.is_some();
        Self {
            src: asset.map_or_else(|| default_src.to_string(), |a| a.data_url.clone()),
            controls_visible: custom,
            signage_hidden: custom,
            upload_new: custom && slot.spec().button_id.is_some(),
        }
    }
}

struct UploadButton {
    el: HtmlElement,
    label: String,
}

/// One slot's elements, resolved once at bind time.
pub struct SlotView {
    slot: Slot,
    default_src: String,
    input: HtmlInputElement,
    previews: Vec<HtmlImageElement>,
    remove: Element,
    signage: Option<Element>,
    button: Option<UploadButton>,
}

impl SlotView {
    pub fn bind(slot: Slot, default_src: &str) -> Result<Self> {
        let spec = slot.spec();
        let input = dom::by_id::<HtmlInputElement>(spec.input_id)?;
        let previews = spec
            .preview_ids
            .iter()
            .map(|id| dom::by_id::<HtmlImageElement>(id))
            .collect::<Result<Vec<_>>>()?;
        let remove = dom::by_id::<Element>(spec.remove_id)?;
        let signage = dom::maybe_by_id::<Element>(spec.signage_id)?;
        let button = match spec.button_id {
            Some(id) => {
                let el = dom::by_id::<HtmlElement>(id)?;
                let label = el.text_content().unwrap_or_default();
                Some(UploadButton { el, label })
            }
            None => None,
        };

        Ok(Self {
            slot,
            default_src: default_src.to_string(),
            input,
            previews,
            remove,
            signage,
            button,
        })
    }

    pub fn present(&self, asset: Option<&ImageAsset>) -> Result<()> {
        let p = SlotPresentation::for_state(self.slot, asset, &self.default_src);

        for img in &self.previews {
            img.set_src(&p.src);
        }
        dom::set_class(&self.remove, CONTROLS_VISIBLE_CLASS, p.controls_visible)?;
        if let Some(signage) = &self.signage {
            dom::set_class(signage, SIGNAGE_HIDDEN_CLASS, p.signage_hidden)?;
        }
        if let Some(b) = &self.button {
            let label = if p.upload_new { UPLOAD_NEW_LABEL } else { b.label.as_str() };
            dom::set_text(&b.el, label);
            dom::set_class(&b.el, UPLOAD_NEW_CLASS, p.upload_new)?;
        }
        Ok(())
    }

    /// Wires the slot's file input and remove control to `slots`.
    pub fn listen(self, slots: Rc<RefCell<ImageSlots>>) {
        let view = Rc::new(self);
        let input = view.input.clone();
        let remove = view.remove.clone();

        {
            let view = view.clone();
            let slots = slots.clone();
            EventListener::new(&input, "change", move |_| {
                let Some(file) = first_file(view.input.files()) else {
                    log::debug!("{:?}: change without a file", view.slot);
                    return;
                };
                let view = view.clone();
                let slots = slots.clone();
                spawn_local(async move {
                    match read_asset(file).await {
                        Ok(asset) => {
                            log::info!(
                                "{:?}: read {} ({} base64 chars)",
                                view.slot,
                                asset.name,
                                asset.payload.len()
                            );
                            if let Err(e) = view.present(Some(&asset)) {
                                log::warn!("{:?}: {e}", view.slot);
                            }
                            slots.borrow_mut().set(view.slot, asset);
                        }
                        Err(e) => log::error!("{:?}: {e}", view.slot),
                    }
                });
            })
            .forget();
        }

        EventListener::new(&remove, "click", move |_| {
            slots.borrow_mut().clear(view.slot);
            // Lets the same file be picked again right after removing it.
            view.input.set_value("");
            if let Err(e) = view.present(None) {
                log::warn!("{:?}: {e}", view.slot);
            }
            log::debug!("{:?}: removed", view.slot);
        })
        .forget();
    }
}
