//! Select configuration.

use layerdom::Border;

/// Which pointer-downs close an open list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DismissPolicy {
    /// Close when the pointer goes down inside the list.
    ///
    /// Option clicks close the list either way, so this only adds closing on
    /// presses that land on the list's frame or padding.
    #[default]
    InsideOverlay,
    /// Close when the pointer goes down anywhere outside the list.
    OutsideOverlay,
}

/// Per-instance select configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Glyph drawn after the selected content on the trigger.
    pub indicator: String,
    /// Cells the list is shifted left of the trigger's left edge.
    pub offset_x: i16,
    /// Cells the list is shifted up from the trigger's top edge.
    pub offset_y: i16,
    /// Global pointer-down handling while the list is open.
    pub dismiss: DismissPolicy,
    /// Stacking order of the list inside its mount point.
    pub z_index: i16,
    /// Frame drawn around the option list.
    pub border: Border,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            indicator: "▼".into(),
            offset_x: 10,
            offset_y: 10,
            dismiss: DismissPolicy::default(),
            z_index: 100,
            border: Border::Single,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(mut self, glyph: impl Into<String>) -> Self {
        self.indicator = glyph.into();
        self
    }

    /// Set how far up (`y`) and left (`x`) the list sits from the trigger.
    pub fn offset(mut self, x: i16, y: i16) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn dismiss(mut self, policy: DismissPolicy) -> Self {
        self.dismiss = policy;
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}
