use serde::{Deserialize, Serialize};

/// The five stages of black-and-white film development, in process order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    PreSoak,
    Developer,
    StopBath,
    Fixer,
    Wash,
}

impl Stage {
    /// All stages in the order they are performed.
    pub const ALL: [Stage; 5] = [
        Stage::PreSoak,
        Stage::Developer,
        Stage::StopBath,
        Stage::Fixer,
        Stage::Wash,
    ];

    pub fn name_en(&self) -> &'static str {
        match self {
            Stage::PreSoak => "Pre-soak",
            Stage::Developer => "Developer",
            Stage::StopBath => "Stop Bath",
            Stage::Fixer => "Fixer",
            Stage::Wash => "Wash",
        }
    }

    pub fn name_zh(&self) -> &'static str {
        match self {
            Stage::PreSoak => "预湿",
            Stage::Developer => "显影",
            Stage::StopBath => "停显",
            Stage::Fixer => "定影",
            Stage::Wash => "水洗",
        }
    }

    /// Fixed duration in seconds, or None for the Developer stage whose
    /// duration is computed from the selected film, developer, stop and
    /// bath temperature.
    pub fn fixed_seconds(&self) -> Option<u32> {
        match self {
            Stage::PreSoak => Some(60),
            Stage::Developer => None,
            Stage::StopBath => Some(60),
            Stage::Fixer => Some(300),
            Stage::Wash => Some(600),
        }
    }

    /// Cadence at which the tank must be agitated during this stage, if any.
    pub fn agitation_interval(&self) -> Option<u32> {
        match self {
            Stage::Developer => Some(30),
            Stage::Fixer => Some(60),
            _ => None,
        }
    }

    /// Only the Developer bath is time-critical with respect to temperature;
    /// the other baths are temperature-invariant.
    pub fn is_temperature_critical(&self) -> bool {
        matches!(self, Stage::Developer)
    }

    /// Position of this stage in the process order (0-based).
    pub fn index(&self) -> usize {
        match self {
            Stage::PreSoak => 0,
            Stage::Developer => 1,
            Stage::StopBath => 2,
            Stage::Fixer => 3,
            Stage::Wash => 4,
        }
    }
}

/// A resolved duration table for one darkroom run: the four fixed stage
/// durations plus the computed Developer duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePlan {
    durations: [u32; 5],
}

impl StagePlan {
    pub fn new(developer_seconds: u32) -> Self {
        let mut durations = [0u32; 5];
        for stage in Stage::ALL {
            durations[stage.index()] = stage
                .fixed_seconds()
                .unwrap_or(developer_seconds);
        }
        StagePlan { durations }
    }

    pub fn duration_of(&self, stage: Stage) -> u32 {
        self.durations[stage.index()]
    }

    pub fn developer_seconds(&self) -> u32 {
        self.duration_of(Stage::Developer)
    }
}
