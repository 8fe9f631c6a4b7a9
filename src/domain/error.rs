// Dashboard error taxonomy
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A configured item has no registered provider
    #[error("could not find {0} in list of valid providers")]
    UnknownProviderIdentifier(String),

    /// A provider's snapshot key is absent, null or empty
    #[error("snapshot field {0} is missing")]
    MissingSnapshotField(&'static str),

    #[error("no TeslaFi api key set in config file")]
    InvalidCredential,

    #[error("no telemetry received yet")]
    NoDataYet,
}
