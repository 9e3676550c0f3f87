// Column-oriented chart dataset handed to the rendering layer
use crate::domain::flux::ResampledPoint;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The structure consumed by the chart: a time index, the two flux columns,
/// and a display-timestamp column for the hover tool. Non-finite fluxes
/// serialize as JSON null, which the chart renders as a gap.
#[derive(Debug, Clone, Serialize)]
pub struct ChartDataset {
    pub index: Vec<DateTime<Utc>>,
    pub xrsa: Vec<f64>,
    pub xrsb: Vec<f64>,
    pub time_str: Vec<String>,
}

impl ChartDataset {
    pub fn from_points(points: &[ResampledPoint]) -> Self {
        let mut dataset = Self {
            index: Vec::with_capacity(points.len()),
            xrsa: Vec::with_capacity(points.len()),
            xrsb: Vec::with_capacity(points.len()),
            time_str: Vec::with_capacity(points.len()),
        };
        for point in points {
            dataset.index.push(point.timestamp);
            dataset.xrsa.push(point.xrsa);
            dataset.xrsb.push(point.xrsb);
            dataset.time_str.push(point.time_str.clone());
        }
        dataset
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// The live view plus a decoupled snapshot. The renderer may annotate the
/// live view; the static copy stays the baseline for a clean re-render.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetPair {
    pub source: ChartDataset,
    pub source_static: ChartDataset,
}

impl DatasetPair {
    pub fn from_points(points: &[ResampledPoint]) -> Self {
        let source = ChartDataset::from_points(points);
        let source_static = source.clone();
        Self {
            source,
            source_static,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(minute: u32, xrsa: f64, xrsb: f64) -> ResampledPoint {
        let timestamp = Utc.with_ymd_and_hms(2011, 6, 7, 0, minute, 0).unwrap();
        ResampledPoint {
            timestamp,
            xrsa,
            xrsb,
            time_str: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    #[test]
    fn test_columns_have_equal_length() {
        let points = vec![point(0, 1e-7, 2e-6), point(1, 3e-7, 4e-6)];
        let dataset = ChartDataset::from_points(&points);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.index.len(), dataset.xrsa.len());
        assert_eq!(dataset.xrsa.len(), dataset.xrsb.len());
        assert_eq!(dataset.xrsb.len(), dataset.time_str.len());
    }

    #[test]
    fn test_empty_points_yield_empty_dataset() {
        let dataset = ChartDataset::from_points(&[]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_static_copy_survives_live_mutation() {
        let points = vec![point(0, 1e-7, 2e-6)];
        let mut pair = DatasetPair::from_points(&points);
        pair.source.xrsa[0] = 9.9;
        assert!((pair.source_static.xrsa[0] - 1e-7).abs() < 1e-18);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let dataset = ChartDataset::from_points(&[point(0, f64::NAN, 2e-6)]);
        let json = serde_json::to_value(&dataset).unwrap();
        assert!(json["xrsa"][0].is_null());
        assert!(json["xrsb"][0].is_number());
    }
}
