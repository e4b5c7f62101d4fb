//! Contribution count to intensity level mapping.

use serde::Serialize;

/// Intensity level of a calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ContributionLevel {
    /// Hex color token for the level
    pub fn color(&self) -> &'static str {
        match self {
            ContributionLevel::None => "#ebedf0",
            ContributionLevel::Low => "#9be9a8",
            ContributionLevel::Medium => "#40c463",
            ContributionLevel::High => "#30a14e",
            ContributionLevel::VeryHigh => "#216e39",
        }
    }

    /// 0 for no contributions up to 4 for the busiest band
    pub fn index(&self) -> u8 {
        match self {
            ContributionLevel::None => 0,
            ContributionLevel::Low => 1,
            ContributionLevel::Medium => 2,
            ContributionLevel::High => 3,
            ContributionLevel::VeryHigh => 4,
        }
    }
}

/// Inclusive range of counts; `max: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionBand {
    pub min: u32,
    pub max: Option<u32>,
    pub level: ContributionLevel,
}

impl ContributionBand {
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

/// Ordered, contiguous and exhaustive over `u32`
pub const CONTRIBUTION_BANDS: [ContributionBand; 5] = [
    ContributionBand {
        min: 0,
        max: Some(0),
        level: ContributionLevel::None,
    },
    ContributionBand {
        min: 1,
        max: Some(11),
        level: ContributionLevel::Low,
    },
    ContributionBand {
        min: 12,
        max: Some(22),
        level: ContributionLevel::Medium,
    },
    ContributionBand {
        min: 23,
        max: Some(34),
        level: ContributionLevel::High,
    },
    ContributionBand {
        min: 35,
        max: None,
        level: ContributionLevel::VeryHigh,
    },
];

/// Level of the first band containing `count`
pub fn color_for(count: u32) -> ContributionLevel {
    CONTRIBUTION_BANDS
        .iter()
        .find(|band| band.contains(count))
        .map(|band| band.level)
        .unwrap_or(ContributionLevel::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous() {
        for pair in CONTRIBUTION_BANDS.windows(2) {
            let upper = pair[0].max.unwrap();
            assert_eq!(upper + 1, pair[1].min);
        }
        assert_eq!(CONTRIBUTION_BANDS[0].min, 0);
        assert!(CONTRIBUTION_BANDS[4].max.is_none());
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(color_for(1), ContributionLevel::Low);
        assert_eq!(color_for(12), ContributionLevel::Medium);
        assert_eq!(color_for(22), ContributionLevel::Medium);
        assert_eq!(color_for(23), ContributionLevel::High);
        assert_eq!(color_for(34), ContributionLevel::High);
        assert_eq!(color_for(u32::MAX), ContributionLevel::VeryHigh);
    }
}
