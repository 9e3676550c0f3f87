// GOES X-ray archive repository over HTTP/JSON
use crate::application::flux_repository::FluxRepository;
use crate::domain::flux::RawSample;
use crate::domain::time_range::TimeRange;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

const XRSA_ENERGY: &str = "0.05-0.4nm";
const XRSB_ENERGY: &str = "0.1-0.8nm";

/// The archive serves one row per channel reading; the two channels are
/// merged by timestamp into RawSamples here.
#[derive(Debug, Deserialize)]
struct ArchiveRow {
    time_tag: String,
    #[serde(default)]
    flux: Option<f64>,
    energy: String,
}

#[derive(Debug, Clone)]
pub struct ArchiveRepository {
    host: String,
    client: reqwest::Client,
}

impl ArchiveRepository {
    pub fn new(host: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build archive HTTP client")?;
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_query_url(&self, range: &TimeRange) -> String {
        let start = range.start().to_rfc3339();
        let end = range.end().to_rfc3339();
        format!(
            "{}/xrays?start={}&end={}",
            self.host,
            urlencoding::encode(&start),
            urlencoding::encode(&end)
        )
    }

    async fn execute_query(&self, range: &TimeRange) -> Result<Vec<ArchiveRow>> {
        let url = self.build_query_url(range);
        tracing::debug!("Executing archive query: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to flux archive")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Archive query failed with status {}: {}", status, body);
        }

        response
            .json::<Vec<ArchiveRow>>()
            .await
            .context("Failed to parse archive response")
    }

    fn merge_rows(rows: Vec<ArchiveRow>, range: &TimeRange) -> Vec<RawSample> {
        // Keyed by timestamp so rows arriving per-channel (and possibly out
        // of order) collapse into one sample each.
        let mut merged: BTreeMap<DateTime<Utc>, (f64, f64)> = BTreeMap::new();

        for row in rows {
            let Ok(timestamp) = DateTime::parse_from_rfc3339(&row.time_tag) else {
                tracing::warn!("Skipping archive row with bad time_tag: {}", row.time_tag);
                continue;
            };
            let timestamp = timestamp.with_timezone(&Utc);
            if !range.contains(timestamp) {
                continue;
            }

            let flux = row.flux.filter(|f| f.is_finite()).unwrap_or(f64::NAN);
            let entry = merged.entry(timestamp).or_insert((f64::NAN, f64::NAN));
            match row.energy.as_str() {
                XRSA_ENERGY => entry.0 = flux,
                XRSB_ENERGY => entry.1 = flux,
                other => {
                    tracing::warn!("Skipping archive row with unknown energy band: {}", other);
                }
            }
        }

        merged
            .into_iter()
            .map(|(timestamp, (xrsa, xrsb))| RawSample::new(timestamp, xrsa, xrsb))
            .collect()
    }
}

#[async_trait]
impl FluxRepository for ArchiveRepository {
    async fn fetch_range(&self, range: &TimeRange) -> Result<Vec<RawSample>> {
        let rows = self.execute_query(range).await?;
        let samples = Self::merge_rows(rows, range);
        tracing::debug!(
            "Archive returned {} merged samples for {} .. {}",
            samples.len(),
            range.start(),
            range.end()
        );
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_range::parse_time;

    fn row(time_tag: &str, flux: Option<f64>, energy: &str) -> ArchiveRow {
        ArchiveRow {
            time_tag: time_tag.to_string(),
            flux,
            energy: energy.to_string(),
        }
    }

    fn window() -> TimeRange {
        TimeRange::new(
            parse_time("2011-06-07 00:00").unwrap(),
            parse_time("2011-06-07 12:00").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_channels_merge_by_timestamp() {
        let rows = vec![
            row("2011-06-07T00:00:00Z", Some(1e-7), XRSA_ENERGY),
            row("2011-06-07T00:00:00Z", Some(3e-6), XRSB_ENERGY),
        ];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert_eq!(samples.len(), 1);
        assert!((samples[0].xrsa - 1e-7).abs() < 1e-18);
        assert!((samples[0].xrsb - 3e-6).abs() < 1e-18);
    }

    #[test]
    fn test_missing_channel_carries_nan() {
        let rows = vec![row("2011-06-07T00:00:00Z", Some(3e-6), XRSB_ENERGY)];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert_eq!(samples.len(), 1);
        assert!(samples[0].xrsa.is_nan());
    }

    #[test]
    fn test_null_flux_becomes_nan() {
        let rows = vec![row("2011-06-07T00:00:00Z", None, XRSA_ENERGY)];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert!(samples[0].xrsa.is_nan());
    }

    #[test]
    fn test_rows_outside_window_are_dropped() {
        let rows = vec![
            row("2011-06-06T23:59:58Z", Some(1e-7), XRSA_ENERGY),
            row("2011-06-07T12:00:00Z", Some(1e-7), XRSA_ENERGY),
            row("2011-06-07T06:00:00Z", Some(1e-7), XRSA_ENERGY),
        ];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_bad_rows_are_skipped_not_fatal() {
        let rows = vec![
            row("garbage", Some(1e-7), XRSA_ENERGY),
            row("2011-06-07T06:00:00Z", Some(1e-7), "9-12nm"),
            row("2011-06-07T06:00:00Z", Some(1e-7), XRSA_ENERGY),
        ];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_samples_come_out_ascending() {
        let rows = vec![
            row("2011-06-07T06:00:00Z", Some(2e-7), XRSA_ENERGY),
            row("2011-06-07T00:00:00Z", Some(1e-7), XRSA_ENERGY),
        ];
        let samples = ArchiveRepository::merge_rows(rows, &window());
        assert!(samples[0].timestamp < samples[1].timestamp);
    }
}
