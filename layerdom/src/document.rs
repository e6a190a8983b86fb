//! Document: a body tree plus detached mount points.
//!
//! The body is the caller's normal element tree. Mount points are secondary
//! roots that live outside the body, the way a portal container is appended
//! to a page's `<body>`. They render and hit-test above the body, in creation
//! order.
//!
//! Interaction is routed in two tiers:
//!
//! - **Element handlers** are attached to an element id and run for events
//!   targeting that element or one of its descendants (bubbling from the
//!   target to the root).
//! - **Global listeners** see every event of their kind. Capturing listeners
//!   run before any element handler; the rest run after bubbling.
//!
//! Everything registered carries an owner string, so a widget can drop all of
//! its handlers, listeners and mount points in one call.

use std::fmt;
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::element::{find_element, path_to, Element};
use crate::error::DomError;
use crate::event::{Event, EventKind};
use crate::hit::hit_test;
use crate::layout::{layout_into, LayoutResult, Rect};
use crate::render::render_to_buffer;

/// Callback for element handlers and global listeners.
///
/// Handlers get the document mutably so they can create mount points or
/// register further handlers while an event is being dispatched.
pub type Handler = Arc<dyn Fn(&mut Document, &Event) + Send + Sync>;

/// Identifier of a mount point within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

/// Identifier of a registered global listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

struct MountPoint {
    id: MountId,
    owner: String,
    root: Element,
}

struct HandlerEntry {
    owner: String,
    element_id: String,
    kind: EventKind,
    handler: Handler,
}

struct ListenerEntry {
    id: ListenerId,
    owner: String,
    kind: EventKind,
    capture: bool,
    listener: Handler,
}

#[derive(Default)]
pub struct Document {
    body: Option<Element>,
    mounts: Vec<MountPoint>,
    handlers: Vec<HandlerEntry>,
    listeners: Vec<ListenerEntry>,
    layout: LayoutResult,
    next_id: u64,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("body", &self.body.as_ref().map(|b| &b.id))
            .field("mounts", &self.mounts.iter().map(|m| m.id).collect::<Vec<_>>())
            .field("handlers", &self.handlers.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // -------------------------------------------------------------------------
    // Trees
    // -------------------------------------------------------------------------

    pub fn set_body(&mut self, body: Element) {
        self.body = Some(body);
    }

    pub fn body(&self) -> Option<&Element> {
        self.body.as_ref()
    }

    /// Create an empty mount point owned by `owner`.
    pub fn create_mount_point(&mut self, owner: impl Into<String>) -> MountId {
        let id = MountId(self.next_id());
        let owner = owner.into();
        log::debug!("Document: created {} for {}", id, owner);
        self.mounts.push(MountPoint {
            id,
            owner,
            root: Element::box_().id(id.to_string()),
        });
        id
    }

    /// Replace the content of a mount point with `element`.
    pub fn render_into(&mut self, id: MountId, element: Element) -> Result<(), DomError> {
        let mount = self
            .mounts
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomError::UnknownMountPoint(id))?;
        mount.root = Element::box_().id(id.to_string()).child(element);
        Ok(())
    }

    pub fn remove_mount_point(&mut self, id: MountId) -> Result<(), DomError> {
        let index = self
            .mounts
            .iter()
            .position(|m| m.id == id)
            .ok_or(DomError::UnknownMountPoint(id))?;
        let mount = self.mounts.remove(index);
        log::debug!("Document: removed {} of {}", id, mount.owner);
        Ok(())
    }

    pub fn mount_point(&self, id: MountId) -> Option<&Element> {
        self.mounts.iter().find(|m| m.id == id).map(|m| &m.root)
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.len()
    }

    /// Look an element up in the body and every mount point.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.roots().find_map(|root| find_element(root, id))
    }

    fn roots(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.body.iter().chain(self.mounts.iter().map(|m| &m.root))
    }

    // -------------------------------------------------------------------------
    // Handlers and listeners
    // -------------------------------------------------------------------------

    /// Attach a handler to an element id. Replaces any earlier handler for
    /// the same element and event kind.
    pub fn on(
        &mut self,
        owner: impl Into<String>,
        element_id: impl Into<String>,
        kind: EventKind,
        handler: Handler,
    ) {
        let element_id = element_id.into();
        self.handlers
            .retain(|h| !(h.element_id == element_id && h.kind == kind));
        self.handlers.push(HandlerEntry {
            owner: owner.into(),
            element_id,
            kind,
            handler,
        });
    }

    /// Drop every element handler registered by `owner`.
    pub fn clear_handlers(&mut self, owner: &str) {
        self.handlers.retain(|h| h.owner != owner);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn add_listener(
        &mut self,
        owner: impl Into<String>,
        kind: EventKind,
        capture: bool,
        listener: Handler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push(ListenerEntry {
            id,
            owner: owner.into(),
            kind,
            capture,
            listener,
        });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> Result<(), DomError> {
        let index = self
            .listeners
            .iter()
            .position(|l| l.id == id)
            .ok_or(DomError::UnknownListener(id))?;
        self.listeners.remove(index);
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every handler, listener and mount point owned by `owner`.
    pub fn remove_owner(&mut self, owner: &str) {
        self.handlers.retain(|h| h.owner != owner);
        self.listeners.retain(|l| l.owner != owner);
        self.mounts.retain(|m| m.owner != owner);
    }

    // -------------------------------------------------------------------------
    // Layout and render
    // -------------------------------------------------------------------------

    /// Recompute rects for the body and all mount points.
    pub fn layout(&mut self, viewport: Rect) {
        let mut result = LayoutResult::new();
        for root in self.roots() {
            layout_into(root, viewport, &mut result);
        }
        self.layout = result;
    }

    pub fn layout_result(&self) -> &LayoutResult {
        &self.layout
    }

    /// Rects supplied by an external layout pass.
    pub fn layout_mut(&mut self) -> &mut LayoutResult {
        &mut self.layout
    }

    /// Bounding box of an element that is currently attached and laid out.
    pub fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.find(id)?;
        self.layout.get(id).copied()
    }

    /// Paint the body, then each mount point on top of it.
    pub fn render(&self, buf: &mut Buffer) {
        for root in self.roots() {
            render_to_buffer(root, &self.layout, buf);
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Deepest element at a point; mount points are above the body.
    pub fn hit(&self, x: u16, y: u16) -> Option<String> {
        self.roots()
            .rev()
            .find_map(|root| hit_test(&self.layout, root, x, y))
    }

    /// Route an event: capturing listeners, then element handlers from the
    /// target up to its root, then non-capturing listeners.
    ///
    /// Returns the resolved target.
    pub fn dispatch(&mut self, mut event: Event) -> Option<String> {
        event.target = self.hit(event.x, event.y);
        log::trace!(
            "Document::dispatch {:?} at ({}, {}) target={:?}",
            event.kind,
            event.x,
            event.y,
            event.target
        );

        for listener in self.listeners_for(event.kind, true) {
            listener(self, &event);
        }

        if let Some(target) = &event.target {
            let path = self
                .roots()
                .map(|root| path_to(root, target))
                .find(|path| !path.is_empty())
                .unwrap_or_default();

            for id in path.iter().rev() {
                let handlers: Vec<Handler> = self
                    .handlers
                    .iter()
                    .filter(|h| h.kind == event.kind && &h.element_id == id)
                    .map(|h| Arc::clone(&h.handler))
                    .collect();
                for handler in handlers {
                    handler(self, &event);
                }
            }
        }

        for listener in self.listeners_for(event.kind, false) {
            listener(self, &event);
        }

        event.target
    }

    fn listeners_for(&self, kind: EventKind, capture: bool) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|l| l.kind == kind && l.capture == capture)
            .map(|l| Arc::clone(&l.listener))
            .collect()
    }

    /// Press and release the primary button at a point, the way a mouse click
    /// arrives from the terminal.
    pub fn click_at(&mut self, x: u16, y: u16) -> Option<String> {
        self.dispatch(Event::pointer_down(x, y));
        self.dispatch(Event::click(x, y))
    }
}
