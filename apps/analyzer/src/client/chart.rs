use serde::Serialize;
use tracing::warn;

use crate::models::AnalysisResult;

pub const MATCHING_LABEL: &str = "Matching Skills";
pub const MISSING_LABEL: &str = "Missing Skills";
pub const MATCHING_COLOR: &str = "#4CAF50";
pub const MISSING_COLOR: &str = "#FF5252";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Two-slice proportion dataset handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub matching: ChartSlice,
    pub missing: ChartSlice,
}

impl ChartData {
    pub fn slices(&self) -> [&ChartSlice; 2] {
        [&self.matching, &self.missing]
    }

    pub fn total(&self) -> f64 {
        self.matching.value + self.missing.value
    }
}

/// Projects a result's match percentage into matching/missing slices.
///
/// The percentage is clamped into [0, 100] (non-finite values count as 0), so
/// the slices are never negative and always sum to 100.
pub fn project(result: Option<&AnalysisResult>) -> Option<ChartData> {
    let raw = result?.skill_match.match_percentage;
    let matching = clamp_percentage(raw);
    if matching != raw {
        warn!("matchPercentage {raw} outside [0, 100]; charting {matching}");
    }

    Some(ChartData {
        matching: ChartSlice {
            label: MATCHING_LABEL,
            value: matching,
            color: MATCHING_COLOR,
        },
        missing: ChartSlice {
            label: MISSING_LABEL,
            value: 100.0 - matching,
            color: MISSING_COLOR,
        },
    })
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
