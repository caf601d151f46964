use kanji_core::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultChipVm {
    pub glyph: char,
    pub correct: bool,
}

impl ResultChipVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "chip chip-correct"
        } else {
            "chip chip-incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub perfect: bool,
    pub chips: Vec<ResultChipVm>,
}

impl SummaryVm {
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("You scored {} / {}", self.score, self.total)
    }
}

/// Summary figures for a finished test; `None` outside the summary phase.
#[must_use]
pub fn map_summary(state: &SessionState) -> Option<SummaryVm> {
    let SessionState::Summary { module, results } = state else {
        return None;
    };
    let score = state.score();
    Some(SummaryVm {
        title: module.title().to_owned(),
        score,
        total: results.len(),
        perfect: score == results.len(),
        chips: results
            .iter()
            .map(|r| ResultChipVm {
                glyph: r.glyph,
                correct: r.correct,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kanji_core::TestResult;
    use kanji_core::model::{CharacterRecord, ModuleId, StudyModule};

    use super::*;

    fn summary(grades: &[(char, bool)]) -> SessionState {
        let characters = grades
            .iter()
            .map(|(g, _)| CharacterRecord::new(*g, "おん", None, "gloss", "").unwrap())
            .collect();
        let module = StudyModule::new(ModuleId::new(1), "Pair", characters).unwrap();
        SessionState::Summary {
            module: Arc::new(module),
            results: grades
                .iter()
                .map(|&(glyph, correct)| TestResult { glyph, correct })
                .collect(),
        }
    }

    #[test]
    fn maps_score_and_chips_in_order() {
        let vm = map_summary(&summary(&[('日', true), ('木', false)])).unwrap();
        assert_eq!(vm.score_line(), "You scored 1 / 2");
        assert!(!vm.perfect);
        assert_eq!(vm.chips[1].glyph, '木');
        assert_eq!(vm.chips[1].class(), "chip chip-incorrect");
    }

    #[test]
    fn non_summary_state_has_no_vm() {
        assert!(map_summary(&SessionState::Menu).is_none());
    }
}
