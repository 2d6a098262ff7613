use std::fmt;

use serde::Serialize;

/// Qualitative label for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    Excellent,
    Great,
    Good,
    Okay,
    NeedsWork,
}

impl PerformanceTier {
    /// Inclusive lower bounds, highest first. Anything below the last one is `NeedsWork`.
    const THRESHOLDS: [(u32, PerformanceTier); 4] = [
        (90, PerformanceTier::Excellent),
        (80, PerformanceTier::Great),
        (70, PerformanceTier::Good),
        (60, PerformanceTier::Okay),
    ];

    /// Maps a rounded percentage to its tier; first matching threshold wins.
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map_or(PerformanceTier::NeedsWork, |(_, tier)| *tier)
    }

    #[must_use]
    pub fn level(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Great => "Great",
            PerformanceTier::Good => "Good",
            PerformanceTier::Okay => "Okay",
            PerformanceTier::NeedsWork => "Needs Work",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Outstanding work!",
            PerformanceTier::Great => "Nice job!",
            PerformanceTier::Good => "Well done!",
            PerformanceTier::Okay => "Not bad!",
            PerformanceTier::NeedsWork => "Keep practicing!",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level())
    }
}
