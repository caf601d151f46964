use kanji_core::model::AggregateStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub reviews: String,
    pub accuracy: String,
    pub modules_completed: String,
}

#[must_use]
pub fn map_stats(stats: &AggregateStats) -> StatsVm {
    StatsVm {
        reviews: stats.total_reviews().to_string(),
        accuracy: stats
            .accuracy_percent()
            .map_or_else(|| "-".to_owned(), |pct| format!("{pct}%")),
        modules_completed: stats.modules_completed().to_string(),
    }
}
