//! Stroke-order diagrams fetched from the public KanjiVG dataset.
//!
//! A failed lookup is never an error for the caller: the diagram degrades to
//! the plain glyph.

mod client;
mod slot;

pub use client::{DEFAULT_BASE_URL, STROKE_DELAY_SECS, StrokeOrderService, resource_key};
pub use slot::{StrokeDisplay, StrokeOrderSlot, StrokeTicket};

/// Result of one stroke-order lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrokeDiagram {
    /// Animated SVG markup for the glyph.
    Available { glyph: char, svg: String },
    /// No diagram could be fetched; show the glyph as text.
    Unavailable { glyph: char },
}

impl StrokeDiagram {
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            StrokeDiagram::Available { glyph, .. } | StrokeDiagram::Unavailable { glyph } => *glyph,
        }
    }

    #[must_use]
    pub fn svg(&self) -> Option<&str> {
        match self {
            StrokeDiagram::Available { svg, .. } => Some(svg),
            StrokeDiagram::Unavailable { .. } => None,
        }
    }
}
