// Reduce raw samples to the one-minute display cadence
use crate::domain::flux::{RawSample, ResampledPoint};
use crate::domain::time_range::TIME_FORMAT;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

const BUCKET_SECONDS: i64 = 60;

#[derive(Default)]
struct Accumulator {
    sum_a: f64,
    count_a: usize,
    sum_b: f64,
    count_b: usize,
}

impl Accumulator {
    fn add(&mut self, sample: &RawSample) {
        // NAN marks a missing channel reading; it never contributes to a mean.
        if sample.xrsa.is_finite() {
            self.sum_a += sample.xrsa;
            self.count_a += 1;
        }
        if sample.xrsb.is_finite() {
            self.sum_b += sample.xrsb;
            self.count_b += 1;
        }
    }

    fn mean_a(&self) -> f64 {
        if self.count_a == 0 {
            f64::NAN
        } else {
            self.sum_a / self.count_a as f64
        }
    }

    fn mean_b(&self) -> f64 {
        if self.count_b == 0 {
            f64::NAN
        } else {
            self.sum_b / self.count_b as f64
        }
    }
}

/// Average samples into one-minute buckets keyed by truncating each
/// timestamp to the minute. Buckets with no samples are skipped, so the
/// output is sparse; points come out ascending by bucket. The ordered map
/// absorbs duplicate and out-of-order input timestamps.
pub fn resample_minutely(samples: &[RawSample]) -> Vec<ResampledPoint> {
    let mut buckets: BTreeMap<i64, Accumulator> = BTreeMap::new();

    for sample in samples {
        let key = sample.timestamp.timestamp().div_euclid(BUCKET_SECONDS);
        buckets.entry(key).or_default().add(sample);
    }

    buckets
        .into_iter()
        .map(|(key, acc)| {
            let timestamp = bucket_start(key);
            ResampledPoint {
                timestamp,
                xrsa: acc.mean_a(),
                xrsb: acc.mean_b(),
                time_str: timestamp.format(TIME_FORMAT).to_string(),
            }
        })
        .collect()
}

fn bucket_start(key: i64) -> DateTime<Utc> {
    // Keys are truncated valid timestamps, always representable.
    Utc.timestamp_opt(key * BUCKET_SECONDS, 0).unwrap()
}
