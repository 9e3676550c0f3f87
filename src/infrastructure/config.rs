use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveConfig {
    pub archive: ArchiveSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveSettings {
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowseConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_from")]
    pub default_from: String,
    #[serde(default = "default_to")]
    pub default_to: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

// Seed window: the 2011-06-07 M2.5 flare day, a well-populated stretch
// of the archive.
fn default_from() -> String {
    "2011-06-07 00:00".to_string()
}

fn default_to() -> String {
    "2011-06-07 12:00".to_string()
}

pub fn load_archive_config() -> anyhow::Result<ArchiveConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/archive"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_browse_config() -> anyhow::Result<BrowseConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/browse"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
