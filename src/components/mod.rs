pub mod chart;
pub mod classification_selector;
pub mod header;
pub mod left_panel;
pub mod map_view;
pub mod pile_table;
pub mod right_panel;
pub mod stat_card;
pub mod timeline;

pub use header::Header;
pub use left_panel::LeftPanel;
pub use map_view::MapView;
pub use right_panel::RightPanel;
pub use timeline::TimelineBar;
