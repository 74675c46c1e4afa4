pub mod use_clock;
pub mod use_navigation;
pub mod use_timeline;
