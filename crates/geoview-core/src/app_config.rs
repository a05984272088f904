use crate::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which trail directory schema the trail source speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailAdapterKind {
    /// Keyed-map schema with per-activity metadata (the active adapter).
    TrailApi,
    /// Flat list schema with string coordinates (kept as a reference adapter).
    PrescriptionTrails,
}

impl std::fmt::Display for TrailAdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailAdapterKind::TrailApi => write!(f, "trailapi"),
            TrailAdapterKind::PrescriptionTrails => write!(f, "prescription"),
        }
    }
}

/// Radius and result cap sent to one upstream. Units follow the upstream:
/// kilometres for the webcam directory, miles for the trail directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLimits {
    pub radius: u32,
    pub limit: u32,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub webcam_api_key: Option<String>,
    pub webcam_base_url: Option<String>,
    pub webcam_limits: SourceLimits,
    pub trail_adapter: TrailAdapterKind,
    pub trail_api_key: Option<String>,
    pub trail_api_host: Option<String>,
    pub trail_base_url: Option<String>,
    pub trail_limits: SourceLimits,
    pub default_coordinate: Coordinate,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "webcam_api_key",
                &self.webcam_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("webcam_base_url", &self.webcam_base_url)
            .field("webcam_limits", &self.webcam_limits)
            .field("trail_adapter", &self.trail_adapter)
            .field(
                "trail_api_key",
                &self.trail_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("trail_api_host", &self.trail_api_host)
            .field("trail_base_url", &self.trail_base_url)
            .field("trail_limits", &self.trail_limits)
            .field("default_coordinate", &self.default_coordinate)
            .finish()
    }
}
