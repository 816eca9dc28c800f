//! Live preview of the composer's text fields.
//!
//! Every tracked input has a fixed set of mirror nodes and a placeholder.
//! The nodes are looked up once in [`MirrorTable::bind`]; after that each
//! `input` event goes through [`MirrorTable::update`].

use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};

use crate::dom;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Subtitle,
    AuthorName,
    PublishDate,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub input_id: &'static str,
    pub mirror_ids: &'static [&'static str],
    pub default_text: &'static str,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Subtitle,
        Field::AuthorName,
        Field::PublishDate,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            Field::Title => &FieldSpec {
                input_id: "title",
                mirror_ids: &["titleVisual", "titleVisualTiny"],
                default_text: "New Post",
            },
            Field::Subtitle => &FieldSpec {
                input_id: "subtitle",
                mirror_ids: &["subtitleVisual", "subtitleVisualTiny"],
                default_text: "Please, enter any description",
            },
            Field::AuthorName => &FieldSpec {
                input_id: "authorName",
                mirror_ids: &["authorNameVisual", "authorNameVisualTiny"],
                default_text: "Enter author name",
            },
            Field::PublishDate => &FieldSpec {
                input_id: "publishDate",
                mirror_ids: &["publishDateVisualTiny"],
                default_text: "4/19/2023",
            },
        }
    }
}

/// What a mirror shows for `value`.
pub fn mirror_text<'a>(value: &'a str, default_text: &'a str) -> &'a str {
    if value.is_empty() {
        default_text
    } else {
        value
    }
}

/// Every `(mirror id, text)` pair one input event on `field` writes.
pub fn mirror_writes(field: Field, value: &str) -> Vec<(&'static str, &str)> {
    let spec = field.spec();
    let text = mirror_text(value, spec.default_text);
    spec.mirror_ids.iter().map(|id| (*id, text)).collect()
}

struct BoundField {
    field: Field,
    input: HtmlInputElement,
    mirrors: Vec<(&'static str, Element)>,
}

pub struct MirrorTable {
    rows: Vec<BoundField>,
}

impl MirrorTable {
    /// Resolves every field's input and mirrors.
    ///
    /// A missing input is an error. A missing mirror is only logged, the
    /// remaining mirrors of that field still update.
    pub fn bind() -> Result<Self> {
        let mut rows = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let spec = field.spec();
            let input = dom::by_id::<HtmlInputElement>(spec.input_id)?;
            let mut mirrors = Vec::with_capacity(spec.mirror_ids.len());
            for id in spec.mirror_ids {
                match dom::by_id::<Element>(id) {
                    Ok(el) => mirrors.push((*id, el)),
                    Err(e) => log::warn!("{field:?} mirror skipped: {e}"),
                }
            }
            rows.push(BoundField {
                field,
                input,
                mirrors,
            });
        }
        Ok(Self { rows })
    }

    fn row(&self, field: Field) -> Option<&BoundField> {
        self.rows.iter().find(|r| r.field == field)
    }

    pub fn update(&self, field: Field, value: &str) {
        let Some(row) = self.row(field) else { return };
        for (id, text) in mirror_writes(field, value) {
            if let Some((_, el)) = row.mirrors.iter().find(|(m, _)| *m == id) {
                dom::set_text(el, text);
            }
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.row(field).map(|r| r.input.value()).unwrap_or_default()
    }

    /// Brings every mirror in line with its input, then follows `input` events.
    pub fn listen(self: Rc<Self>) {
        for row in &self.rows {
            self.update(row.field, &row.input.value());

            let table = self.clone();
            let field = row.field;
            let input = row.input.clone();
            EventListener::new(&row.input, "input", move |_| {
                table.update(field, &input.value());
            })
            .forget();
        }
        log::debug!("mirroring {} fields", self.rows.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_value_is_mirrored_verbatim() {
        assert_eq!(mirror_text("Hello", "New Post"), "Hello");
        assert_eq!(mirror_text("  spaced  ", "New Post"), "  spaced  ");
    }

    #[test]
    fn empty_value_shows_the_default() {
        assert_eq!(mirror_text("", "New Post"), "New Post");
    }

    #[test]
    fn title_scenario_types_then_clears() {
        assert_eq!(
            mirror_writes(Field::Title, "Hello"),
            [("titleVisual", "Hello"), ("titleVisualTiny", "Hello")]
        );
        assert_eq!(
            mirror_writes(Field::Title, ""),
            [("titleVisual", "New Post"), ("titleVisualTiny", "New Post")]
        );
    }

    #[test]
    fn every_mirror_of_a_field_gets_the_same_text() {
        for field in Field::ALL {
            for value in ["", "x", "Biba i Boba"] {
                let writes = mirror_writes(field, value);
                let ids: Vec<&str> = writes.iter().map(|(id, _)| *id).collect();
                assert_eq!(ids, field.spec().mirror_ids, "{field:?}");
                let expected = if value.is_empty() { field.spec().default_text } else { value };
                assert!(writes.iter().all(|(_, t)| *t == expected), "{field:?} {value:?}");
            }
        }
    }

    #[test]
    fn any_input_sequence_ends_on_the_last_value() {
        let inputs = ["a", "ab", "", "ab", "ab"];
        let last = inputs
            .iter()
            .map(|v| mirror_writes(Field::Subtitle, v))
            .last()
            .unwrap();
        assert_eq!(last, [("subtitleVisual", "ab"), ("subtitleVisualTiny", "ab")]);
    }

    #[test]
    fn every_field_has_one_or_two_mirrors_and_a_default() {
        for field in Field::ALL {
            let spec = field.spec();
            assert!(
                (1..=2).contains(&spec.mirror_ids.len()),
                "{field:?} has {} mirrors",
                spec.mirror_ids.len()
            );
            assert!(!spec.default_text.is_empty(), "{field:?} has no default");
        }
    }

    #[test]
    fn input_ids_are_unique() {
        let mut ids: Vec<&str> = Field::ALL.iter().map(|f| f.spec().input_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Field::ALL.len());
    }
}
