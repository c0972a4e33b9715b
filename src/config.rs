use std::time::Duration;

/// Host of the shelter's MongoDB deployment.
pub const DEFAULT_HOST: &str = "nv-desktop-services.apporto.com";
/// Port of the shelter's MongoDB deployment.
pub const DEFAULT_PORT: u16 = 32966;
/// Database holding the shelter data.
pub const DEFAULT_DATABASE: &str = "aac";
/// The one collection this crate operates on.
pub const DEFAULT_COLLECTION: &str = "animals";

/// Connection parameters for the shelter deployment.
///
/// [`Default`] yields the production constants above. Overriding the fields
/// lets tests point the access object at a local or throwaway deployment;
/// credentials stay separate and are passed at construction.
#[derive(Debug, Clone)]
pub struct ShelterConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    /// Overrides the driver's server selection timeout when set. Useful for
    /// tests against unreachable deployments; `None` keeps the driver default.
    pub server_selection_timeout: Option<Duration>,
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            server_selection_timeout: None,
        }
    }
}
