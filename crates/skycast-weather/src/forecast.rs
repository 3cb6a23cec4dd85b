//! Reduction of the dense 3-hourly forecast series to display series.
//!
//! The provider returns one sample every three hours for about five days.
//! The multi-day panel wants one representative sample per future calendar
//! day; the trend panel wants the next few samples as-is.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};

use crate::types::ForecastSample;

/// How many leading samples the 24h temperature trend shows (3h spacing).
pub const TREND_POINTS: usize = 8;

/// Select one representative sample per future calendar day.
///
/// Samples are bucketed by their calendar date in the time zone of `now`.
/// The current day is excluded entirely. Within a day the sample whose
/// local hour is nearest to noon wins; on equal distance the earlier sample
/// is kept. At most `max_days` days are emitted, in chronological order.
///
/// The input is expected to be ordered by ascending timestamp (the provider
/// guarantees this). The function is total: an empty input, or one with no
/// future days, yields an empty output.
pub fn select_daily_representatives<Tz: TimeZone>(
    samples: &[ForecastSample],
    max_days: usize,
    now: &DateTime<Tz>,
) -> Vec<ForecastSample> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut selected: Vec<ForecastSample> = Vec::with_capacity(max_days.min(samples.len()));
    let mut current_date: Option<NaiveDate> = None;
    let mut best_distance: u32 = u32::MAX;

    for sample in samples {
        let local = sample.timestamp.with_timezone(&tz);
        let date = local.date_naive();
        if date <= today {
            continue;
        }

        let distance = local.hour().abs_diff(12);
        match current_date {
            Some(d) if d == date => {
                // Strict comparison keeps the first sample on ties.
                if distance < best_distance {
                    if let Some(slot) = selected.last_mut() {
                        *slot = sample.clone();
                    }
                    best_distance = distance;
                }
            }
            _ => {
                if selected.len() == max_days {
                    break;
                }
                selected.push(sample.clone());
                current_date = Some(date);
                best_distance = distance;
            }
        }
    }

    selected
}

/// [`select_daily_representatives`] evaluated against the local wall clock.
pub fn daily_forecast(samples: &[ForecastSample], max_days: usize) -> Vec<ForecastSample> {
    select_daily_representatives(samples, max_days, &Local::now())
}

/// The leading samples of the series, for the short-term temperature trend.
pub fn short_term_trend(samples: &[ForecastSample], points: usize) -> &[ForecastSample] {
    &samples[..points.min(samples.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, NaiveDate, Utc};
    use std::collections::HashSet;

    fn sample(y: i32, m: u32, d: u32, hour: u32) -> ForecastSample {
        let timestamp = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc();
        ForecastSample {
            timestamp,
            temp: hour as f64,
            feels_like: hour as f64,
            humidity: 50,
            condition_code: 800,
            wind_speed: Some(3.0),
        }
    }

    fn utc_now() -> DateTime<Utc> {
        // Mid-afternoon on the "current" day
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_full_day_picks_noon() {
        let samples: Vec<_> = [0, 3, 6, 9, 12, 15, 18, 21]
            .iter()
            .map(|&h| sample(2024, 6, 2, h))
            .collect();
        let picked = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].timestamp.hour(), 12);
    }

    #[test]
    fn test_equidistant_hours_first_wins() {
        // 9 and 15 are both three hours from noon; stability keeps 9
        let samples = vec![sample(2024, 6, 2, 9), sample(2024, 6, 2, 15)];
        let picked = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].timestamp.hour(), 9);
    }

    #[test]
    fn test_gap_day_nearest_hour_still_wins() {
        // No sample anywhere near noon; 3 beats 0 on hour distance
        let samples = vec![sample(2024, 6, 2, 0), sample(2024, 6, 2, 3)];
        let picked = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].timestamp.hour(), 3);
    }

    #[test]
    fn test_empty_input() {
        let picked = select_daily_representatives(&[], 5, &utc_now());
        assert!(picked.is_empty());
    }

    #[test]
    fn test_today_is_excluded() {
        let samples = vec![
            sample(2024, 5, 31, 12),
            sample(2024, 6, 1, 12),
            sample(2024, 6, 2, 12),
        ];
        let picked = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].timestamp.date_naive().day(), 2);
    }

    #[test]
    fn test_max_days_keeps_earliest_dates() {
        let samples: Vec<_> = (2..=11).map(|d| sample(2024, 6, d, 12)).collect();
        let picked = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(picked.len(), 5);
        let days: Vec<_> = picked.iter().map(|s| s.timestamp.day()).collect();
        assert_eq!(days, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_one_sample_per_date_strictly_increasing() {
        let mut samples = Vec::new();
        for d in 2..=5 {
            for h in [2, 5, 8, 11, 14, 17, 20, 23] {
                samples.push(sample(2024, 6, d, h));
            }
        }
        let picked = select_daily_representatives(&samples, 10, &utc_now());
        assert_eq!(picked.len(), 4);

        let dates: Vec<_> = picked.iter().map(|s| s.timestamp.date_naive()).collect();
        let unique: HashSet<_> = dates.iter().collect();
        assert_eq!(unique.len(), dates.len());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        // 11 is one hour from noon; nothing closer exists
        assert!(picked.iter().all(|s| s.timestamp.hour() == 11));
    }

    #[test]
    fn test_zero_max_days() {
        let samples = vec![sample(2024, 6, 2, 12)];
        let picked = select_daily_representatives(&samples, 0, &utc_now());
        assert!(picked.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let samples = vec![sample(2024, 6, 2, 9), sample(2024, 6, 2, 12)];
        let before = samples.clone();
        let _ = select_daily_representatives(&samples, 5, &utc_now());
        assert_eq!(samples, before);
    }

    #[test]
    fn test_dates_follow_reference_time_zone() {
        // 20:00 UTC on June 1 is already June 2 at UTC+5:45 (Kathmandu)
        let tz = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
        let now = utc_now().with_timezone(&tz);
        let samples = vec![sample(2024, 6, 1, 20)];

        let picked = select_daily_representatives(&samples, 5, &now);
        assert_eq!(picked.len(), 1);

        // Under UTC the same sample still belongs to "today" and is dropped
        let picked_utc = select_daily_representatives(&samples, 5, &utc_now());
        assert!(picked_utc.is_empty());
    }

    #[test]
    fn test_trend_slice() {
        let samples: Vec<_> = (0..12).map(|i| sample(2024, 6, 2, (i * 2) as u32)).collect();
        assert_eq!(short_term_trend(&samples, TREND_POINTS).len(), 8);
        assert_eq!(short_term_trend(&samples[..3], TREND_POINTS).len(), 3);
        assert!(short_term_trend(&[], TREND_POINTS).is_empty());
    }
}
