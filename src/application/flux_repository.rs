// Repository trait for raw flux data access
use crate::domain::flux::RawSample;
use crate::domain::time_range::TimeRange;
use async_trait::async_trait;

/// Boundary to the external GOES archive. Returns samples whose timestamps
/// lie within [start, end), ascending; an empty window is not an error.
#[async_trait]
pub trait FluxRepository: Send + Sync {
    async fn fetch_range(&self, range: &TimeRange) -> anyhow::Result<Vec<RawSample>>;
}
