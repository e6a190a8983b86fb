//! Option item for the select widget.

use std::fmt;
use std::sync::Arc;

use layerdom::{Document, Element, Event, EventKind, Style};

use crate::value::OptionValue;

/// Click callback for a single option.
pub type ClickHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// One selectable entry of a [`Select`](crate::Select).
///
/// Options are plain descriptors rebuilt on every render. They hold no state
/// of their own: the key gives the rendered list item a stable id, the value
/// is what the select compares against its current value.
///
/// # Example
///
/// ```ignore
/// SelectOption::new("fr", "fr")
///     .label("Français")
///     .class("lang")
///     .on_click(|_event| log::info!("french picked"))
/// ```
#[derive(Clone)]
pub struct SelectOption {
    key: String,
    value: OptionValue,
    content: Vec<Element>,
    class: Option<String>,
    style: Option<Style>,
    disabled: bool,
    selected: bool,
    on_click: ClickHandler,
}

impl fmt::Debug for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOption")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("content", &self.content)
            .field("class", &self.class)
            .field("disabled", &self.disabled)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl SelectOption {
    /// Create an option with no content and a no-op click handler.
    pub fn new(key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            content: Vec::new(),
            class: None,
            style: None,
            disabled: false,
            selected: false,
            on_click: Arc::new(|_| {}),
        }
    }

    /// Append a text label to the content.
    pub fn label(self, text: impl Into<String>) -> Self {
        self.content(Element::text(text))
    }

    /// Append an element to the content.
    pub fn content(mut self, element: Element) -> Self {
        self.content.push(element);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Mark the option as disabled. This only changes how it looks.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_click = Arc::new(handler);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn display_content(&self) -> &[Element] {
        &self.content
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Replace the click handler with one built around the current handler.
    pub fn wrap_on_click(mut self, wrap: impl FnOnce(ClickHandler) -> ClickHandler) -> Self {
        self.on_click = wrap(self.on_click);
        self
    }

    pub(crate) fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Id of the list item rendered for this option under `owner`.
    pub fn element_id(&self, owner: &str) -> String {
        format!("{}-opt-{}", owner, self.key)
    }

    /// Render the list item and register its click handler under `owner`.
    pub fn build(&self, doc: &mut Document, owner: &str) -> Element {
        let id = self.element_id(owner);

        let mut item = Element::row()
            .id(&id)
            .class("option")
            .class_if(self.disabled, "disabled")
            .class_if(self.selected, "selected")
            .clickable(true)
            .disabled(self.disabled)
            .children(self.content.iter().cloned());

        if let Some(class) = &self.class {
            item = item.class(class);
        }

        let mut style = Style::new();
        if self.disabled {
            style = style.dim();
        }
        if self.selected {
            style = style.reverse();
        }
        if let Some(custom) = self.style {
            style = style.merge(custom);
        }
        item = item.style(style);

        let on_click = Arc::clone(&self.on_click);
        doc.on(
            owner,
            &id,
            EventKind::Click,
            Arc::new(move |_doc: &mut Document, event: &Event| on_click(event)),
        );

        item
    }
}
