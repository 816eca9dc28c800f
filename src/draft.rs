use serde::Serialize;

use crate::image::{ImageSlots, Slot};

/// Body of `POST /api/post`. Image keys are left out of the JSON while their
/// slot shows the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub author_name: String,
    pub publish_date: String,
    pub content: String,

    #[serde(rename = "postIMG", skip_serializing_if = "Option::is_none")]
    pub post_img: Option<String>,
    #[serde(rename = "postIMGName", skip_serializing_if = "Option::is_none")]
    pub post_img_name: Option<String>,

    #[serde(rename = "authorIMG", skip_serializing_if = "Option::is_none")]
    pub author_img: Option<String>,
    #[serde(rename = "authorIMGName", skip_serializing_if = "Option::is_none")]
    pub author_img_name: Option<String>,

    #[serde(rename = "previewIMG", skip_serializing_if = "Option::is_none")]
    pub preview_img: Option<String>,
    #[serde(rename = "previewIMGName", skip_serializing_if = "Option::is_none")]
    pub preview_img_name: Option<String>,
}

impl PostDraft {
    /// Copies each slot's payload and file name into the draft.
    pub fn with_images(mut self, slots: &ImageSlots) -> Self {
        let pair = |slot| {
            slots
                .get(slot)
                .map(|a| (a.payload.clone(), a.name.clone()))
                .unzip()
        };
        (self.post_img, self.post_img_name) = pair(Slot::Post);
        (self.author_img, self.author_img_name) = pair(Slot::Author);
        (self.preview_img, self.preview_img_name) = pair(Slot::Preview);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
