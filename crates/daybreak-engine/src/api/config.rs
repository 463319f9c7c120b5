use serde::Deserialize;

/// Population sizes and seeding for the ambient background.
/// Loaded from JSON; every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackgroundConfig {
    /// Stars drawn in night mode (default: 80).
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    /// Clouds drawn in both modes (default: 5).
    #[serde(default = "default_cloud_count")]
    pub cloud_count: usize,
    /// Birds drawn in day mode (default: 6).
    #[serde(default = "default_bird_count")]
    pub bird_count: usize,
    /// Fixed RNG seed. When absent the host picks a fresh one per mount.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_star_count() -> usize {
    80
}

fn default_cloud_count() -> usize {
    5
}

fn default_bird_count() -> usize {
    6
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            cloud_count: default_cloud_count(),
            bird_count: default_bird_count(),
            seed: None,
        }
    }
}

impl BackgroundConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
