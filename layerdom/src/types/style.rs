use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }

    /// Layer `other` over this style. Colors and border from `other` replace
    /// ours when set; text attributes accumulate.
    pub fn merge(self, other: Style) -> Self {
        Self {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            border: if other.border == Border::None {
                self.border
            } else {
                other.border
            },
            text_style: self.text_style.merge(other.text_style),
        }
    }
}
