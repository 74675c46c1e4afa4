use crate::models::district::LatLng;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// OpenStreetMap Mapnik tiles
    pub const MAP_TILE_URL: &'static str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

    pub const MAP_ATTRIBUTION: &'static str = "&copy; OpenStreetMap";

    /// Viewport covering the whole city grid
    pub const CITY_CENTER: LatLng = (22.65, 114.15);
    pub const CITY_ZOOM: f64 = 10.0;
    pub const DISTRICT_ZOOM: f64 = 13.0;
    pub const MIN_ZOOM: f64 = 9.0;
    pub const MAX_ZOOM: f64 = 18.0;

    /// Duration of viewport fly-to animations in seconds
    pub const FLY_DURATION_SECS: f64 = 1.0;

    /// Share of city-wide totals attributed to a single district
    pub const DISTRICT_SCALE: f64 = 0.2;

    /// Load percentage above which a district counts as overloaded
    pub const OVERLOAD_THRESHOLD: u32 = 80;

    /// Header clock refresh interval in milliseconds
    pub const CLOCK_INTERVAL_MS: u32 = 1_000;

    /// Timeline playback step interval in milliseconds
    pub const PLAYBACK_INTERVAL_MS: u32 = 1_000;

    /// Delay before charts and map react to window resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Points per generated chart series (one per hour)
    pub const SERIES_POINTS: usize = 24;

    /// Quarter-hour slots on the timeline, inclusive upper bound
    pub const TIMELINE_SLOTS: u32 = 96;

    /// Initial timeline position (12:00)
    pub const TIMELINE_DEFAULT: u32 = 48;
}
