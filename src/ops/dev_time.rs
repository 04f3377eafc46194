use crate::types::catalog::DevTimes;

/// Reference bath temperature the tabulated times assume.
pub const REFERENCE_TEMP_C: f64 = 20.0;
/// Seconds added per degree below the reference (subtracted per degree above).
pub const SECONDS_PER_DEGREE: f64 = 15.0;
/// Hard floor on the Developer duration, however warm the bath.
pub const MIN_DEVELOP_SECONDS: f64 = 240.0;
/// Fallback Developer duration in minutes when a film/developer pair has no
/// tabulated times at all.
pub const FALLBACK_MINUTES: f64 = 7.0;

const PULL_TWO_FACTOR: f64 = 0.7;
const PULL_TWO_FLOOR_MINUTES: f64 = 4.0;
const PUSH_TWO_FACTOR: f64 = 1.5;
const PUSH_TWO_CEILING_MINUTES: f64 = 15.0;

/// A whole-stop exposure adjustment. Only -1/0/+1 are backed by tabulated
/// times; the extremes are extrapolated from the standard time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoStop {
    PullTwo,
    PullOne,
    BoxSpeed,
    PushOne,
    PushTwo,
}

impl IsoStop {
    pub const ALL: [IsoStop; 5] = [
        IsoStop::PullTwo,
        IsoStop::PullOne,
        IsoStop::BoxSpeed,
        IsoStop::PushOne,
        IsoStop::PushTwo,
    ];

    /// Signed number of stops, -2..=+2.
    pub fn stops(&self) -> i32 {
        match self {
            IsoStop::PullTwo => -2,
            IsoStop::PullOne => -1,
            IsoStop::BoxSpeed => 0,
            IsoStop::PushOne => 1,
            IsoStop::PushTwo => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IsoStop::PullTwo => "-2",
            IsoStop::PullOne => "-1",
            IsoStop::BoxSpeed => "0",
            IsoStop::PushOne => "+1",
            IsoStop::PushTwo => "+2",
        }
    }
}

/// Development time in minutes for a given stop, or None when the
/// film/developer pair has no tabulated times. -1/0/+1 read the table
/// directly; ±2 extrapolate from the standard time, bounded so extreme
/// push/pull never produces an unrealistic duration.
pub fn duration_for_stop(times: Option<&DevTimes>, stop: IsoStop) -> Option<f64> {
    let times = times?;
    let minutes = match stop {
        IsoStop::PullTwo => (times.standard_minutes * PULL_TWO_FACTOR).max(PULL_TWO_FLOOR_MINUTES),
        IsoStop::PullOne => times.pull_one_minutes,
        IsoStop::BoxSpeed => times.standard_minutes,
        IsoStop::PushOne => times.push_one_minutes,
        IsoStop::PushTwo => (times.standard_minutes * PUSH_TWO_FACTOR).min(PUSH_TWO_CEILING_MINUTES),
    };
    Some(minutes)
}

/// Developer duration in seconds, compensated for bath temperature:
/// 15 seconds per degree below 20°C added, per degree above subtracted,
/// floored at 240 seconds. Out-of-range temperatures are extrapolated,
/// not rejected.
pub fn temperature_adjusted_seconds(base_minutes: f64, bath_temp_c: f64) -> f64 {
    let adjustment = (REFERENCE_TEMP_C - bath_temp_c) * SECONDS_PER_DEGREE;
    (base_minutes * 60.0 + adjustment).max(MIN_DEVELOP_SECONDS)
}

/// Effective film sensitivity after pushing/pulling. Display value only;
/// development durations come from the tabulated times, not from this.
pub fn effective_iso(base_iso: u32, stop: IsoStop) -> u32 {
    let stops = stop.stops();
    if stops >= 0 {
        base_iso << stops as u32
    } else {
        base_iso >> (-stops) as u32
    }
}

/// Format a second count as m:ss for display.
pub fn format_mmss(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(standard: f64, pull_one: f64, push_one: f64) -> DevTimes {
        DevTimes {
            standard_minutes: standard,
            pull_one_minutes: pull_one,
            push_one_minutes: push_one,
        }
    }

    #[test]
    fn test_tabulated_stops_read_the_table() {
        let t = times(7.5, 6.0, 9.0);
        assert_eq!(duration_for_stop(Some(&t), IsoStop::BoxSpeed), Some(7.5));
        assert_eq!(duration_for_stop(Some(&t), IsoStop::PullOne), Some(6.0));
        assert_eq!(duration_for_stop(Some(&t), IsoStop::PushOne), Some(9.0));
    }

    #[test]
    fn test_extreme_stops_are_extrapolated() {
        let t = times(10.0, 8.0, 13.0);
        assert_eq!(duration_for_stop(Some(&t), IsoStop::PullTwo), Some(7.0));
        assert_eq!(duration_for_stop(Some(&t), IsoStop::PushTwo), Some(15.0));
    }

    #[test]
    fn test_extrapolation_bounds() {
        // 0.7 * 5 = 3.5 would be below the 4-minute floor
        let short = times(5.0, 4.5, 6.0);
        assert_eq!(duration_for_stop(Some(&short), IsoStop::PullTwo), Some(4.0));
        // 1.5 * 15 = 22.5 would exceed the 15-minute ceiling
        let long = times(15.0, 12.0, 18.0);
        assert_eq!(duration_for_stop(Some(&long), IsoStop::PushTwo), Some(15.0));
    }

    #[test]
    fn test_stop_ordering_for_valid_data() {
        let t = times(7.0, 6.0, 9.0);
        let pull = duration_for_stop(Some(&t), IsoStop::PullOne).unwrap();
        let base = duration_for_stop(Some(&t), IsoStop::BoxSpeed).unwrap();
        let push = duration_for_stop(Some(&t), IsoStop::PushOne).unwrap();
        assert!(pull < base);
        assert!(base < push);
    }

    #[test]
    fn test_missing_pair_yields_none() {
        for stop in IsoStop::ALL {
            assert_eq!(duration_for_stop(None, stop), None);
        }
    }

    #[test]
    fn test_temperature_baseline_is_unadjusted() {
        assert_eq!(temperature_adjusted_seconds(7.0, 20.0), 420.0);
    }

    #[test]
    fn test_cold_bath_extends_development() {
        assert_eq!(temperature_adjusted_seconds(7.0, 18.0), 450.0);
    }

    #[test]
    fn test_warm_bath_shortens_development() {
        assert_eq!(temperature_adjusted_seconds(7.0, 22.0), 390.0);
    }

    #[test]
    fn test_warm_bath_floors_at_four_minutes() {
        // 60 - 75 = -15 seconds, clamped up to the floor
        assert_eq!(temperature_adjusted_seconds(1.0, 25.0), 240.0);
    }

    #[test]
    fn test_out_of_range_temperature_extrapolates() {
        // 10°C is outside the darkroom range but still computes
        assert_eq!(temperature_adjusted_seconds(7.0, 10.0), 420.0 + 150.0);
    }

    #[test]
    fn test_effective_iso() {
        assert_eq!(effective_iso(400, IsoStop::PushTwo), 1600);
        assert_eq!(effective_iso(400, IsoStop::PushOne), 800);
        assert_eq!(effective_iso(400, IsoStop::BoxSpeed), 400);
        assert_eq!(effective_iso(400, IsoStop::PullOne), 200);
        assert_eq!(effective_iso(400, IsoStop::PullTwo), 100);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "0:00");
        assert_eq!(format_mmss(59), "0:59");
        assert_eq!(format_mmss(450), "7:30");
        assert_eq!(format_mmss(600), "10:00");
    }
}
