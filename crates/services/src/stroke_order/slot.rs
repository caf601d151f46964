use super::StrokeDiagram;

/// Handle for one outstanding lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeTicket {
    generation: u64,
    glyph: char,
}

impl StrokeTicket {
    #[must_use]
    pub fn glyph(&self) -> char {
        self.glyph
    }
}

/// What the stroke-order viewer should currently render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StrokeDisplay {
    #[default]
    Idle,
    Loading(char),
    Diagram { glyph: char, svg: String },
    Glyph(char),
}

/// Tracks the diagram for whichever glyph is on screen.
///
/// Each `request` bumps a generation counter; a lookup that resolves after a
/// newer request was made is discarded.
#[derive(Debug, Clone, Default)]
pub struct StrokeOrderSlot {
    generation: u64,
    display: StrokeDisplay,
    replays: u32,
}

impl StrokeOrderSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `glyph`; the returned ticket must accompany the result.
    pub fn request(&mut self, glyph: char) -> StrokeTicket {
        self.generation = self.generation.wrapping_add(1);
        self.display = StrokeDisplay::Loading(glyph);
        self.replays = 0;
        StrokeTicket {
            generation: self.generation,
            glyph,
        }
    }

    /// Install a finished lookup; returns false when the ticket is stale.
    pub fn resolve(&mut self, ticket: StrokeTicket, diagram: StrokeDiagram) -> bool {
        if ticket.generation != self.generation || diagram.glyph() != ticket.glyph {
            tracing::debug!(glyph = %ticket.glyph, "discarding stale stroke order lookup");
            return false;
        }
        self.display = match diagram {
            StrokeDiagram::Available { glyph, svg } => StrokeDisplay::Diagram { glyph, svg },
            StrokeDiagram::Unavailable { glyph } => StrokeDisplay::Glyph(glyph),
        };
        true
    }

    /// Forget the current glyph, invalidating any outstanding ticket.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.display = StrokeDisplay::Idle;
        self.replays = 0;
    }

    /// Restart the stroke animation. Only meaningful while a diagram is shown.
    pub fn replay(&mut self) {
        if matches!(self.display, StrokeDisplay::Diagram { .. }) {
            self.replays = self.replays.wrapping_add(1);
        }
    }

    /// Bumped by `replay`; used as a render key to restart the animation.
    #[must_use]
    pub fn replays(&self) -> u32 {
        self.replays
    }

    #[must_use]
    pub fn display(&self) -> &StrokeDisplay {
        &self.display
    }

    /// Glyph currently requested or shown.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        match &self.display {
            StrokeDisplay::Idle => None,
            StrokeDisplay::Loading(glyph) | StrokeDisplay::Glyph(glyph) => Some(*glyph),
            StrokeDisplay::Diagram { glyph, .. } => Some(*glyph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available(glyph: char) -> StrokeDiagram {
        StrokeDiagram::Available {
            glyph,
            svg: format!("<svg>{glyph}</svg>"),
        }
    }

    #[test]
    fn request_shows_loading_then_diagram() {
        let mut slot = StrokeOrderSlot::new();
        assert_eq!(slot.display(), &StrokeDisplay::Idle);

        let ticket = slot.request('日');
        assert_eq!(slot.display(), &StrokeDisplay::Loading('日'));

        assert!(slot.resolve(ticket, available('日')));
        assert_eq!(
            slot.display(),
            &StrokeDisplay::Diagram {
                glyph: '日',
                svg: "<svg>日</svg>".into()
            }
        );
    }

    #[test]
    fn late_result_for_previous_glyph_is_discarded() {
        let mut slot = StrokeOrderSlot::new();
        let first = slot.request('日');
        let second = slot.request('木');

        assert!(!slot.resolve(first, available('日')));
        assert_eq!(slot.display(), &StrokeDisplay::Loading('木'));

        assert!(slot.resolve(second, StrokeDiagram::Unavailable { glyph: '木' }));
        assert_eq!(slot.display(), &StrokeDisplay::Glyph('木'));
        assert_eq!(slot.glyph(), Some('木'));
    }

    #[test]
    fn clear_invalidates_outstanding_ticket() {
        let mut slot = StrokeOrderSlot::new();
        let ticket = slot.request('人');
        slot.clear();
        assert!(!slot.resolve(ticket, available('人')));
        assert_eq!(slot.display(), &StrokeDisplay::Idle);
    }

    #[test]
    fn replay_only_counts_with_a_diagram() {
        let mut slot = StrokeOrderSlot::new();
        let ticket = slot.request('山');
        slot.replay();
        assert_eq!(slot.replays(), 0);

        slot.resolve(ticket, available('山'));
        slot.replay();
        slot.replay();
        assert_eq!(slot.replays(), 2);

        slot.request('川');
        assert_eq!(slot.replays(), 0);
    }
}
