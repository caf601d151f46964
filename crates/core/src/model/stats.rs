use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatsError {
    #[error("correct reviews ({correct}) exceed total reviews ({total})")]
    CorrectExceedsTotal { correct: u64, total: u64 },
}

/// Counters produced by one completed test pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDelta {
    reviews: u32,
    correct: u32,
}

impl StatsDelta {
    /// Builds a delta; `correct` is clamped to `reviews`.
    #[must_use]
    pub fn new(reviews: u32, correct: u32) -> Self {
        Self {
            reviews,
            correct: correct.min(reviews),
        }
    }

    #[must_use]
    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }
}

/// Lifetime review counters, persisted across sessions.
///
/// All three counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    total_reviews: u64,
    correct_reviews: u64,
    modules_completed: u64,
}

impl AggregateStats {
    /// Rehydrate counters from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::CorrectExceedsTotal` when the record is inconsistent.
    pub fn from_persisted(
        total_reviews: u64,
        correct_reviews: u64,
        modules_completed: u64,
    ) -> Result<Self, StatsError> {
        if correct_reviews > total_reviews {
            return Err(StatsError::CorrectExceedsTotal {
                correct: correct_reviews,
                total: total_reviews,
            });
        }

        Ok(Self {
            total_reviews,
            correct_reviews,
            modules_completed,
        })
    }

    /// Folds one completed test pass into the counters.
    #[must_use]
    pub fn apply(self, delta: StatsDelta) -> Self {
        Self {
            total_reviews: self.total_reviews.saturating_add(u64::from(delta.reviews)),
            correct_reviews: self.correct_reviews.saturating_add(u64::from(delta.correct)),
            modules_completed: self.modules_completed.saturating_add(1),
        }
    }

    #[must_use]
    pub fn total_reviews(&self) -> u64 {
        self.total_reviews
    }

    #[must_use]
    pub fn correct_reviews(&self) -> u64 {
        self.correct_reviews
    }

    #[must_use]
    pub fn modules_completed(&self) -> u64 {
        self.modules_completed
    }

    /// Rounded accuracy percentage, or `None` before the first review.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accuracy_percent(&self) -> Option<u8> {
        if self.total_reviews == 0 {
            return None;
        }
        let ratio = self.correct_reviews as f64 / self.total_reviews as f64;
        Some((ratio * 100.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let stats = AggregateStats::default();
        assert_eq!(stats.total_reviews(), 0);
        assert_eq!(stats.correct_reviews(), 0);
        assert_eq!(stats.modules_completed(), 0);
        assert_eq!(stats.accuracy_percent(), None);
    }

    #[test]
    fn apply_adds_delta_and_one_module() {
        let stats = AggregateStats::default()
            .apply(StatsDelta::new(2, 1))
            .apply(StatsDelta::new(10, 10));
        assert_eq!(stats.total_reviews(), 12);
        assert_eq!(stats.correct_reviews(), 11);
        assert_eq!(stats.modules_completed(), 2);
        assert_eq!(stats.accuracy_percent(), Some(92));
    }

    #[test]
    fn delta_clamps_correct_to_reviews() {
        let delta = StatsDelta::new(3, 9);
        assert_eq!(delta.correct(), 3);
    }

    #[test]
    fn from_persisted_rejects_inconsistent_counts() {
        let err = AggregateStats::from_persisted(1, 2, 0).unwrap_err();
        assert_eq!(
            err,
            StatsError::CorrectExceedsTotal {
                correct: 2,
                total: 1
            }
        );
        assert!(AggregateStats::from_persisted(2, 2, 1).is_ok());
    }
}
