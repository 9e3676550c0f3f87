// X-ray flux sample domain models
use chrono::{DateTime, Utc};

/// One measurement at native instrument cadence. Flux values are W/m^2;
/// a channel with no measurement carries NAN as the no-data sentinel.
#[derive(Debug, Clone, Copy)]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    /// XRS-A, short wavelength (0.5-4.0 Angstrom).
    pub xrsa: f64,
    /// XRS-B, long wavelength (1-8 Angstrom).
    pub xrsb: f64,
}

impl RawSample {
    pub fn new(timestamp: DateTime<Utc>, xrsa: f64, xrsb: f64) -> Self {
        Self {
            timestamp,
            xrsa,
            xrsb,
        }
    }
}

/// One point at display cadence: per-channel bucket means plus a rendered
/// timestamp used by the hover tool.
#[derive(Debug, Clone)]
pub struct ResampledPoint {
    pub timestamp: DateTime<Utc>,
    pub xrsa: f64,
    pub xrsb: f64,
    pub time_str: String,
}
