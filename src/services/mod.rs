pub mod catalog;
pub mod leaflet;
pub mod map_scene;
pub mod panels;
pub mod series;
