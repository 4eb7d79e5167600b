use crate::core::store::StudentStore;
use crate::domain::model::ClassStatistics;
use indexmap::IndexMap;

impl StudentStore {
    /// Mean of all marks, or 0 for an empty store.
    pub fn average_marks(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f64 = self.iter().map(|record| record.marks).sum();
        total / self.len() as f64
    }

    /// Highest marks, floored at 0.
    pub fn highest_marks(&self) -> f64 {
        self.iter().map(|record| record.marks).fold(0.0, f64::max)
    }

    /// Count, mean, extremes and grade distribution in one pass. `None` when
    /// there is nothing to summarize.
    pub fn statistics(&self) -> Option<ClassStatistics> {
        let mut total = 0.0;
        let mut highest: Option<f64> = None;
        let mut lowest: Option<f64> = None;
        let mut grade_distribution: IndexMap<String, usize> = IndexMap::new();

        for record in self {
            total += record.marks;
            highest = Some(highest.map_or(record.marks, |h| h.max(record.marks)));
            lowest = Some(lowest.map_or(record.marks, |l| l.min(record.marks)));
            *grade_distribution
                .entry(record.grade.normalized())
                .or_insert(0) += 1;
        }

        let (highest, lowest) = highest.zip(lowest)?;
        let count = self.len();

        Some(ClassStatistics {
            count,
            average: total / count as f64,
            highest,
            lowest,
            grade_distribution,
        })
    }
}
