//! Show/hide control on the login form's password field.

use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::dom;
use crate::error::Result;

pub const SHOW_ID: &str = "show";
pub const HIDE_ID: &str = "hide";
pub const INPUT_SELECTOR: &str = ".form__field-password";

pub const SHOW_ACTIVE_CLASS: &str = "password-input_show";
pub const HIDE_ACTIVE_CLASS: &str = "password-input_hide";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Show,
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

/// DOM state of the field and both controls for one visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPresentation {
    pub input_type: &'static str,
    pub show_class_on: bool,
    pub hide_class_on: bool,
}

impl PasswordVisibility {
    /// A click sets the state outright, so repeating a click changes nothing.
    pub fn after_click(self, control: Control) -> Self {
        match control {
            Control::Show => PasswordVisibility::Shown,
            Control::Hide => PasswordVisibility::Hidden,
        }
    }

    pub fn presentation(self) -> PasswordPresentation {
        let shown = self == PasswordVisibility::Shown;
        PasswordPresentation {
            input_type: if shown { "text" } else { "password" },
            show_class_on: shown,
            hide_class_on: shown,
        }
    }
}

pub struct PasswordToggle {
    input: HtmlInputElement,
    show: HtmlElement,
    hide: HtmlElement,
    state: Cell<PasswordVisibility>,
}

impl PasswordToggle {
    /// `None` when the page has no show/hide pair.
    pub fn find() -> Result<Option<Self>> {
        let (Some(show), Some(hide)) = (
            dom::maybe_by_id::<HtmlElement>(SHOW_ID)?,
            dom::maybe_by_id::<HtmlElement>(HIDE_ID)?,
        ) else {
            return Ok(None);
        };
        let input = dom::by_selector::<HtmlInputElement>(INPUT_SELECTOR)?;
        Ok(Some(Self {
            input,
            show,
            hide,
            state: Cell::new(PasswordVisibility::default()),
        }))
    }

    pub fn click(&self, control: Control) -> Result<()> {
        let next = self.state.get().after_click(control);
        let p = next.presentation();
        dom::set_class(&self.show, SHOW_ACTIVE_CLASS, p.show_class_on)?;
        dom::set_class(&self.hide, HIDE_ACTIVE_CLASS, p.hide_class_on)?;
        self.input.set_type(p.input_type);
        self.state.set(next);
        Ok(())
    }

    pub fn bind(self) {
        let toggle = Rc::new(self);

        for (target, control) in [
            (toggle.show.clone(), Control::Show),
            (toggle.hide.clone(), Control::Hide),
        ] {
            let toggle = toggle.clone();
            EventListener::new(&target, "click", move |_| {
                if let Err(e) = toggle.click(control) {
                    log::warn!("password toggle: {e}");
                }
            })
            .forget();
        }

        log::debug!("bound password toggle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(clicks: &[Control]) -> PasswordVisibility {
        clicks
            .iter()
            .fold(PasswordVisibility::default(), |s, c| s.after_click(*c))
    }

    #[test]
    fn starts_hidden_as_a_password_field() {
        let p = PasswordVisibility::default().presentation();
        assert_eq!(p.input_type, "password");
        assert!(!p.show_class_on);
        assert!(!p.hide_class_on);
    }

    #[test]
    fn show_makes_plain_text_and_marks_both_controls() {
        let p = replay(&[Control::Show]).presentation();
        assert_eq!(p.input_type, "text");
        assert!(p.show_class_on);
        assert!(p.hide_class_on);
    }

    #[test]
    fn hide_undoes_show_completely() {
        assert_eq!(
            replay(&[Control::Show, Control::Hide]).presentation(),
            PasswordVisibility::default().presentation()
        );
    }

    #[test]
    fn show_hide_show_matches_a_single_show() {
        use Control::*;
        assert_eq!(
            replay(&[Show, Hide, Show]).presentation(),
            replay(&[Show]).presentation()
        );
    }

    #[test]
    fn repeated_clicks_have_no_extra_effect() {
        use Control::*;
        assert_eq!(replay(&[Show, Show]), replay(&[Show]));
        assert_eq!(replay(&[Hide, Hide]), replay(&[]));
        assert_eq!(replay(&[Show, Hide, Hide]), replay(&[Hide]));
    }
}
