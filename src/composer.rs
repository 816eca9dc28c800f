//! Admin page: live post preview and publish.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlTextAreaElement};

use crate::api;
use crate::config::ComposerConfig;
use crate::dom;
use crate::draft::PostDraft;
use crate::error::Result;
use crate::image::{ImageSlots, Slot, SlotView};
use crate::mirror::{Field, MirrorTable};

pub const PUBLISH_ID: &str = "publish";
pub const CONTENT_ID: &str = "content";

pub struct Composer {
    fields: Rc<MirrorTable>,
    content: HtmlTextAreaElement,
    slots: Rc<RefCell<ImageSlots>>,
    endpoint: String,
}

impl Composer {
    /// Binds the composer if this page has a publish button.
    pub fn mount(cfg: &ComposerConfig) -> Result<()> {
        let Some(publish) = dom::maybe_by_id::<HtmlElement>(PUBLISH_ID)? else {
            return Ok(());
        };

        let fields = Rc::new(MirrorTable::bind()?);
        let content = dom::by_id::<HtmlTextAreaElement>(CONTENT_ID)?;
        let slots = Rc::new(RefCell::new(ImageSlots::default()));

        let views = Slot::ALL
            .iter()
            .map(|&slot| SlotView::bind(slot, cfg.default_assets.for_slot(slot)))
            .collect::<Result<Vec<_>>>()?;

        fields.clone().listen();
        for view in views {
            view.listen(slots.clone());
        }

        let composer = Rc::new(Self {
            fields,
            content,
            slots,
            endpoint: cfg.publish_endpoint.clone(),
        });

        {
            let composer = composer.clone();
            EventListener::new(&publish, "click", move |_| composer.clone().publish())
                .forget();
        }

        log::info!("composer bound, publishing to {}", composer.endpoint);
        Ok(())
    }

    /// Snapshot of the form as it stands right now.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.fields.value(Field::Title),
            subtitle: self.fields.value(Field::Subtitle),
            author_name: self.fields.value(Field::AuthorName),
            publish_date: self.fields.value(Field::PublishDate),
            content: self.content.value(),
            ..PostDraft::default()
        }
        .with_images(&self.slots.borrow())
    }

    fn publish(self: Rc<Self>) {
        let draft = self.draft();
        spawn_local(async move {
            match api::publish(&self.endpoint, &draft).await {
                Ok(()) => log::info!("published \"{}\"", draft.title),
                Err(e) => {
                    log::error!("publish failed: {e}");
                    gloo::dialogs::alert(&api::publish_alert(&e));
                }
            }
        });
    }
}
