use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Average,
    High,
}

impl ScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
        }
    }
}

/// Cut points on the rounded 1-5 score. Scores below `low_below` are low,
/// scores above `high_above` are high, everything in between is average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub low_below: f64,
    pub high_above: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            low_below: 2.5,
            high_above: 3.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("band thresholds must satisfy 1 <= low ({low_below}) <= high ({high_above}) <= 5")]
pub struct InvalidBandThresholds {
    pub low_below: f64,
    pub high_above: f64,
}

impl BandThresholds {
    pub fn new(low_below: f64, high_above: f64) -> Result<Self, InvalidBandThresholds> {
        let in_scale = |value: f64| (1.0..=5.0).contains(&value);
        if in_scale(low_below) && in_scale(high_above) && low_below <= high_above {
            Ok(Self {
                low_below,
                high_above,
            })
        } else {
            Err(InvalidBandThresholds {
                low_below,
                high_above,
            })
        }
    }

    pub fn classify(&self, score: f64) -> ScoreBand {
        if score < self.low_below {
            ScoreBand::Low
        } else if score > self.high_above {
            ScoreBand::High
        } else {
            ScoreBand::Average
        }
    }
}
