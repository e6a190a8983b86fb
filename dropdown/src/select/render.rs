//! Select widget rendering.

use std::fmt;
use std::sync::Arc;

use layerdom::{Document, Element, Event, EventKind, Position, Style};

use super::state::Select;
use crate::option::SelectOption;
use crate::value::OptionValue;

/// Selection callback: the chosen value and the click that chose it.
pub type SelectHandler = Arc<dyn Fn(&OptionValue, &Event) + Send + Sync>;

/// Inputs for one render of a [`Select`].
#[derive(Clone)]
pub struct SelectProps {
    value: OptionValue,
    class: Option<String>,
    style: Option<Style>,
    on_select: Option<SelectHandler>,
    options: Vec<SelectOption>,
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("value", &self.value)
            .field("class", &self.class)
            .field("on_select", &self.on_select.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl SelectProps {
    pub fn new(value: impl Into<OptionValue>) -> Self {
        Self {
            value: value.into(),
            class: None,
            style: None,
            on_select: None,
            options: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_select(
        mut self,
        handler: impl Fn(&OptionValue, &Event) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn option_list(&self) -> &[SelectOption] {
        &self.options
    }
}

/// Index of the first option whose value equals `value`.
pub fn matched_index(options: &[SelectOption], value: &OptionValue) -> Option<usize> {
    options.iter().position(|option| option.value() == value)
}

impl Select {
    /// Render the trigger and, once the mount point exists, the option list.
    ///
    /// Returns the trigger for the caller to place in its own tree. The list
    /// goes straight into this select's mount point. Element handlers from the
    /// previous render are replaced.
    pub fn render(&self, doc: &mut Document, props: SelectProps) -> Element {
        self.resolve_placement(doc);

        let id = self.id_string();
        doc.clear_handlers(&id);

        let matched = matched_index(&props.options, &props.value);
        log::debug!(
            "Select::render id={} open={} options={} matched={:?}",
            id,
            self.is_open(),
            props.options.len(),
            matched
        );

        // The list shows the same content, so the trigger gets its own ids.
        let mut shown: Vec<Element> = matched
            .map(|i| props.options[i].display_content().to_vec())
            .unwrap_or_default();
        for element in &mut shown {
            element.reissue_ids();
        }

        let mut trigger = Element::row()
            .id(&id)
            .class("select")
            .gap(1)
            .clickable(true)
            .children(shown)
            .child(
                Element::text(&self.config.indicator)
                    .id(format!("{id}-indicator"))
                    .class("select-indicator"),
            );
        if let Some(class) = &props.class {
            trigger = trigger.class(class);
        }
        if let Some(style) = props.style {
            trigger = trigger.style(style);
        }
        doc.on(&id, &id, EventKind::Click, self.trigger_handler());

        if let Some(mount) = self.mount_point() {
            let list = self.build_list(doc, &props, matched);
            if let Err(e) = doc.render_into(mount, list) {
                log::warn!("Select {} could not render its list: {}", id, e);
            }
        }

        self.clear_dirty();
        trigger
    }

    fn build_list(&self, doc: &mut Document, props: &SelectProps, matched: Option<usize>) -> Element {
        let id = self.id_string();
        let open = self.is_open();

        let items: Vec<Element> = props
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                self.decorate(option.clone(), Some(i) == matched, props.on_select.clone())
                    .build(doc, &id)
            })
            .collect();

        let mut list = Element::col()
            .id(self.list_id())
            .class("select-list")
            .class_if(open, "select-list-show")
            .hidden(!open)
            .position(Position::Absolute)
            .z_index(self.config.z_index)
            .child(
                Element::col()
                    .id(format!("{id}-options"))
                    .class("list")
                    .style(Style::new().border(self.config.border))
                    .children(items),
            );

        // Without a placement the list stays at the default position.
        if let Some(placement) = self.placement() {
            list = list.top(placement.top).left(placement.left);
        }

        list
    }
}
