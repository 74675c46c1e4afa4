#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Unknown district: {0}")]
    UnknownDistrict(String),

    #[error("District is not interactive: {0}")]
    InactiveDistrict(String),

    #[error("Station {station} does not belong to district {district}")]
    StationOutsideDistrict { station: String, district: String },

    #[error("No district selected")]
    NoDistrictSelected,

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
