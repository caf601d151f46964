use std::sync::Arc;

use dioxus::prelude::*;
use kanji_core::model::{AggregateStats, CharacterRecord};
use kanji_core::{Phase, SessionState};
use services::{SessionController, StatsService, StrokeOrderService, StrokeOrderSlot};

use crate::context::AppContext;
use crate::vm::{PromptKind, SessionIntent, apply_intent};

struct HandleServices {
    stats: Arc<StatsService>,
    stroke_order: Arc<StrokeOrderService>,
}

/// Single entry point for session events raised by the views.
///
/// Besides driving the controller it persists committed statistics in the
/// background and keeps the stroke-order slot on the displayed glyph.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    controller: Signal<SessionController>,
    stroke: Signal<StrokeOrderSlot>,
    stats: Signal<AggregateStats>,
    prompt: Signal<PromptKind>,
    services: Signal<HandleServices>,
}

/// Session handle for a fresh controller at the menu.
pub fn use_session_handle(ctx: &AppContext) -> SessionHandle {
    let init = ctx.clone();
    use_session_handle_with(ctx, move || init.new_controller())
}

/// Session handle around a caller-built controller.
pub fn use_session_handle_with(
    ctx: &AppContext,
    init: impl FnOnce() -> SessionController,
) -> SessionHandle {
    let stats_service = ctx.stats();
    let stroke_order = ctx.stroke_order();

    let controller = use_signal(init);
    let stroke = use_signal(StrokeOrderSlot::new);
    let stats = use_signal(|| stats_service.snapshot());
    let prompt = use_signal(PromptKind::default);
    let services = use_signal(move || HandleServices {
        stats: stats_service,
        stroke_order,
    });

    SessionHandle {
        controller,
        stroke,
        stats,
        prompt,
        services,
    }
}

impl SessionHandle {
    /// Current session state; subscribes the caller to changes.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.controller.read().state().clone()
    }

    #[must_use]
    pub fn stats(&self) -> AggregateStats {
        *self.stats.read()
    }

    #[must_use]
    pub fn stroke(&self) -> Signal<StrokeOrderSlot> {
        self.stroke
    }

    #[must_use]
    pub fn prompt(&self) -> PromptKind {
        *self.prompt.read()
    }

    pub fn set_prompt(mut self, kind: PromptKind) {
        self.prompt.set(kind);
    }

    pub fn replay_strokes(mut self) {
        self.stroke.write().replay();
    }

    pub fn dispatch(mut self, intent: SessionIntent) {
        let before = self.controller.peek().phase();
        let outcome = apply_intent(&mut self.controller.write(), intent);
        let Ok(step) = outcome else {
            return;
        };

        if step.phase == Phase::Test && before != Phase::Test {
            self.prompt.set(PromptKind::Meaning);
        }

        if let Some(totals) = step.committed {
            self.stats.set(totals);
            let service = Arc::clone(&self.services.peek().stats);
            spawn(async move {
                // Failures are logged by the service; the in-memory totals stay.
                let _ = service.persist().await;
            });
        }

        self.sync_stroke();
    }

    fn sync_stroke(mut self) {
        let glyph = self
            .controller
            .peek()
            .state()
            .current_character()
            .map(CharacterRecord::glyph);
        let shown = self.stroke.peek().glyph();

        match glyph {
            Some(glyph) if shown != Some(glyph) => {
                let ticket = self.stroke.write().request(glyph);
                let service = Arc::clone(&self.services.peek().stroke_order);
                let mut stroke = self.stroke;
                spawn(async move {
                    let diagram = service.lookup(glyph).await;
                    stroke.write().resolve(ticket, diagram);
                });
            }
            None if shown.is_some() => self.stroke.write().clear(),
            _ => {}
        }
    }
}
