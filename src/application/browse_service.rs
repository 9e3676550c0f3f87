// Browse service - the full window-navigation and data-preparation pipeline
use crate::application::flux_repository::FluxRepository;
use crate::domain::dataset::DatasetPair;
use crate::domain::error::BrowseError;
use crate::domain::navigation::NavCommands;
use crate::domain::resample::resample_minutely;
use crate::domain::time_range::{TimeRange, format_time, parse_time};
use std::sync::Arc;

/// One browse request: the currently displayed window (absent bounds fall
/// back to the configured defaults) plus the navigation flags.
#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub commands: NavCommands,
}

/// What the rendering layer gets back: the resolved bounds for the
/// navigation controls and the live/static dataset pair.
#[derive(Debug, Clone)]
pub struct BrowsePage {
    pub from: String,
    pub to: String,
    pub datasets: DatasetPair,
}

#[derive(Clone)]
pub struct BrowseService {
    repository: Arc<dyn FluxRepository>,
    default_from: String,
    default_to: String,
}

impl BrowseService {
    pub fn new(
        repository: Arc<dyn FluxRepository>,
        default_from: String,
        default_to: String,
    ) -> Self {
        Self {
            repository,
            default_from,
            default_to,
        }
    }

    /// Resolve the window, apply navigation, fetch, resample, assemble.
    /// Each request computes independently; no state is carried across calls.
    pub async fn browse(&self, request: BrowseRequest) -> Result<BrowsePage, BrowseError> {
        let from = request.from.as_deref().unwrap_or(&self.default_from);
        let to = request.to.as_deref().unwrap_or(&self.default_to);

        let tr = TimeRange::new(parse_time(from)?, parse_time(to)?)?;
        let tr = request.commands.apply(tr);

        let samples = self
            .repository
            .fetch_range(&tr)
            .await
            .map_err(BrowseError::DataSource)?;
        tracing::debug!(
            "fetched {} raw samples for {} .. {}",
            samples.len(),
            tr.start(),
            tr.end()
        );

        let points = resample_minutely(&samples);
        Ok(BrowsePage {
            from: format_time(tr.start()),
            to: format_time(tr.end()),
            datasets: DatasetPair::from_points(&points),
        })
    }
}
