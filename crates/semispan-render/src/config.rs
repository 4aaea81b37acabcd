//! Plot configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── RenderError ────────────────────────────────────────────────────

/// Errors detected during [`PlotConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A glyph is a control character and would break the grid.
    InvalidGlyph {
        /// Which setting held the glyph (`"marker"` or `"blank"`).
        role: &'static str,
        /// The rejected glyph.
        glyph: char,
    },
    /// Marker and blank are the same glyph, so the outline is invisible.
    IndistinctGlyphs {
        /// The shared glyph.
        glyph: char,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGlyph { role, glyph } => {
                write!(f, "{role} glyph {glyph:?} is a control character")
            }
            Self::IndistinctGlyphs { glyph } => {
                write!(f, "marker and blank are both {glyph:?}")
            }
        }
    }
}

impl Error for RenderError {}

// ── PlotConfig ─────────────────────────────────────────────────────

/// Glyphs used by [`render_plot`](crate::render_plot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    /// Drawn where the outline crosses a row. Default: `'*'`.
    pub marker: char,
    /// Drawn everywhere else. Default: `' '`.
    pub blank: char,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            marker: '*',
            blank: ' ',
        }
    }
}

impl PlotConfig {
    /// Check that both glyphs are printable and distinct.
    pub fn validate(&self) -> Result<(), RenderError> {
        for (role, glyph) in [("marker", self.marker), ("blank", self.blank)] {
            if glyph.is_control() {
                return Err(RenderError::InvalidGlyph { role, glyph });
            }
        }
        if self.marker == self.blank {
            return Err(RenderError::IndistinctGlyphs { glyph: self.marker });
        }
        Ok(())
    }
}
