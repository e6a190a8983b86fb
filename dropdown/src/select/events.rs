//! Select widget event handling.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use layerdom::{Document, Event, EventKind, Handler, MouseButton};

use super::config::DismissPolicy;
use super::render::SelectHandler;
use super::state::Select;
use crate::option::{ClickHandler, SelectOption};

impl Select {
    /// Register the global pointer-down listener. Calling it again while
    /// attached is a no-op.
    pub fn attach(&self, doc: &mut Document) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.listener.is_none() {
            let id = doc.add_listener(
                self.id_string(),
                EventKind::PointerDown,
                true,
                self.dismiss_listener(),
            );
            log::debug!("Select {} attached ({})", self.id, id);
            guard.listener = Some(id);
        }
    }

    /// Tear the instance down: remove its listener, its mount point and its
    /// element handlers. Safe to call more than once.
    pub fn detach(&self, doc: &mut Document) {
        let (listener, mount) = match self.inner.write() {
            Ok(mut guard) => {
                guard.placement = None;
                (guard.listener.take(), guard.mount.take())
            }
            Err(_) => (None, None),
        };

        if let Some(id) = listener
            && let Err(e) = doc.remove_listener(id)
        {
            log::warn!("Select {} detach: {}", self.id, e);
        }
        if let Some(id) = mount
            && let Err(e) = doc.remove_mount_point(id)
        {
            log::warn!("Select {} detach: {}", self.id, e);
        }
        doc.clear_handlers(&self.id_string());

        self.open.store(false, Ordering::SeqCst);
        self.created.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("Select {} detached", self.id);
    }

    /// Whether `target` is the list container or inside it.
    pub fn overlay_contains(&self, doc: &Document, target: Option<&str>) -> bool {
        let Some(target) = target else {
            return false;
        };
        doc.find(&self.list_id())
            .is_some_and(|list| list.contains_id(target))
    }

    fn dismiss_listener(&self) -> Handler {
        let select = self.clone();
        Arc::new(move |doc: &mut Document, event: &Event| {
            if !select.is_open() {
                return;
            }
            let inside = select.overlay_contains(doc, event.target.as_deref());
            let dismiss = match select.config.dismiss {
                DismissPolicy::InsideOverlay => inside,
                DismissPolicy::OutsideOverlay => !inside,
            };
            if dismiss {
                log::trace!("Select {} dismissed by {:?}", select.id, event.target);
                select.close();
            }
        })
    }

    pub(super) fn trigger_handler(&self) -> Handler {
        let select = self.clone();
        Arc::new(move |doc: &mut Document, event: &Event| {
            if event.button == MouseButton::Left {
                select.open(doc);
            }
        })
    }

    /// Wrap an option's click handler: report the value, close the list,
    /// then run the option's own handler. Only primary-button clicks select.
    pub(super) fn decorate(
        &self,
        option: SelectOption,
        selected: bool,
        on_select: Option<SelectHandler>,
    ) -> SelectOption {
        let select = self.clone();
        let value = option.value().clone();

        option.selected(selected).wrap_on_click(move |original| {
            let handler: ClickHandler = Arc::new(move |event: &Event| {
                if event.button != MouseButton::Left {
                    return;
                }
                log::debug!("Select {} picked {}", select.id, value);
                if let Some(on_select) = &on_select {
                    on_select(&value, event);
                }
                select.close();
                original(event);
            });
            handler
        })
    }
}
