//! Select widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use layerdom::{Document, ListenerId, MountId, Rect};

use super::config::SelectConfig;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "select-{}", self.0)
    }
}

/// Absolute position of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: i16,
    pub left: i16,
}

impl Placement {
    /// Offset up and left from the anchor's top-left corner.
    pub fn from_anchor(anchor: Rect, offset_x: i16, offset_y: i16) -> Self {
        Self {
            top: shift(anchor.y, offset_y),
            left: shift(anchor.x, offset_x),
        }
    }
}

fn shift(origin: u16, by: i16) -> i16 {
    (i32::from(origin) - i32::from(by)).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Internal state for a Select widget.
#[derive(Debug, Default)]
pub(super) struct SelectInner {
    /// List position, frozen once the trigger has been laid out
    pub(super) placement: Option<Placement>,
    /// Mount point holding the list, created on first open
    pub(super) mount: Option<MountId>,
    /// Global pointer-down listener, present while attached
    pub(super) listener: Option<ListenerId>,
}

/// A dropdown select.
///
/// `Select` keeps the state that outlives a single render: whether the list
/// is open, whether its mount point has been created, where the list sits,
/// and the handle of its global listener. Everything else arrives through
/// [`SelectProps`](super::SelectProps) on each render.
///
/// Clones share state, so handlers registered on the document act on the
/// same instance the caller holds.
///
/// # Example
///
/// ```ignore
/// let select = Select::new();
/// select.attach(&mut doc);
///
/// let trigger = select.render(
///     &mut doc,
///     SelectProps::new("b")
///         .on_select(|value, _event| log::info!("picked {value}"))
///         .option(SelectOption::new("a", "a").label("Alpha"))
///         .option(SelectOption::new("b", "b").label("Bravo")),
/// );
/// doc.set_body(Element::col().child(trigger));
/// doc.layout(viewport);
///
/// // ...dispatch events, re-render while `select.is_dirty()`...
///
/// select.detach(&mut doc);
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    /// Unique identifier for this select instance
    pub(super) id: SelectId,
    pub(super) config: Arc<SelectConfig>,
    pub(super) inner: Arc<RwLock<SelectInner>>,
    /// Whether the list is shown
    pub(super) open: Arc<AtomicBool>,
    /// Whether the mount point has been created
    pub(super) created: Arc<AtomicBool>,
    /// Dirty flag for re-render
    pub(super) dirty: Arc<AtomicBool>,
}

impl Select {
    /// Create a new select with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SelectConfig::default())
    }

    pub fn with_config(config: SelectConfig) -> Self {
        Self {
            id: SelectId::new(),
            config: Arc::new(config),
            inner: Arc::new(RwLock::new(SelectInner::default())),
            open: Arc::new(AtomicBool::new(false)),
            created: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string. This is also the trigger element's id.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Id of the list container rendered into the mount point.
    pub fn list_id(&self) -> String {
        format!("{}-list", self.id)
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Whether the list's mount point exists.
    pub fn is_created(&self) -> bool {
        self.created.load(Ordering::SeqCst)
    }

    /// Open the list, creating its mount point the first time.
    pub fn open(&self, doc: &mut Document) {
        self.resolve_placement(doc);

        if !self.created.load(Ordering::SeqCst) {
            if let Ok(mut guard) = self.inner.write()
                && guard.mount.is_none()
            {
                guard.mount = Some(doc.create_mount_point(self.id_string()));
            }
            self.created.store(true, Ordering::SeqCst);
            log::debug!("Select {} created its overlay", self.id);
        }

        if !self.open.swap(true, Ordering::SeqCst) {
            log::debug!("Select {} opened", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            log::debug!("Select {} closed", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn mount_point(&self) -> Option<MountId> {
        self.inner.read().map(|guard| guard.mount).unwrap_or(None)
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    pub fn placement(&self) -> Option<Placement> {
        self.inner
            .read()
            .map(|guard| guard.placement)
            .unwrap_or(None)
    }

    /// Read the trigger's bounding box once. Until the trigger has been laid
    /// out this does nothing; afterwards the placement never changes.
    pub(super) fn resolve_placement(&self, doc: &Document) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.placement.is_some() {
            return;
        }
        if let Some(anchor) = doc.bounding_rect(&self.id_string()) {
            let placement =
                Placement::from_anchor(anchor, self.config.offset_x, self.config.offset_y);
            log::debug!(
                "Select {} anchored at {:?}, list at {:?}",
                self.id,
                anchor,
                placement
            );
            guard.placement = Some(placement);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}
