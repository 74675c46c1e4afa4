pub mod district;
pub mod error;
pub mod series;
pub mod station;
pub mod timeline;
pub mod view;
