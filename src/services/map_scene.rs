use std::rc::Rc;

use crate::config::Config;
use crate::models::district::{District, LatLng, RevenueRank, TimeMode};
use crate::models::station::Station;
use crate::models::view::{ViewLevel, ViewState};
use crate::services::catalog;

const OUTLINE_STROKE: &str = "#1e293b";
const FOCUS_STROKE: &str = "#38bdf8";

/// Interaction a map shape hands back to navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    SelectDistrict(String),
    SelectStation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub color: &'static str,
    pub weight: u32,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub dash_array: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub coordinates: Vec<LatLng>,
    pub style: PolygonStyle,
    /// Style applied while the pointer is over the shape
    pub hover_style: Option<PolygonStyle>,
    pub on_click: Option<MapAction>,
}

impl PolygonShape {
    pub const fn is_interactive(&self) -> bool {
        self.on_click.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    pub position: LatLng,
    pub icon_html: String,
    /// Icon box in pixels, anchored at its center; `None` for zero-size labels
    pub icon_size: Option<(u32, u32)>,
    pub z_offset: i32,
    pub on_click: Option<MapAction>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
    pub duration_secs: f64,
}

/// Everything the map draws for one navigation state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapScene {
    pub polygons: Vec<PolygonShape>,
    pub markers: Vec<MarkerShape>,
}

/// Heat classification of a district for a time mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatClass {
    /// Historical playback, gray scale
    Muted,
    /// Current load above threshold
    Hot,
    Normal,
    /// Predicted load above threshold
    Overload,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatStyle {
    pub class: HeatClass,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

/// Fill color and opacity of an active district.
pub fn heat_style(capacity: u32, mode: TimeMode) -> HeatStyle {
    let overloaded = capacity > Config::OVERLOAD_THRESHOLD;
    let scaled_opacity = 0.4 + f64::from(capacity) / 200.0;

    match mode {
        TimeMode::History => HeatStyle {
            class: HeatClass::Muted,
            fill_color: "#475569",
            fill_opacity: scaled_opacity,
        },
        TimeMode::Current if overloaded => HeatStyle {
            class: HeatClass::Hot,
            fill_color: "#06b6d4",
            fill_opacity: scaled_opacity,
        },
        TimeMode::Prediction if overloaded => HeatStyle {
            class: HeatClass::Overload,
            fill_color: "#ef4444",
            fill_opacity: 0.6,
        },
        TimeMode::Current => HeatStyle {
            class: HeatClass::Normal,
            fill_color: "#3b82f6",
            fill_opacity: scaled_opacity,
        },
        TimeMode::Prediction => HeatStyle {
            class: HeatClass::Normal,
            fill_color: "#3b82f6",
            fill_opacity: 0.6,
        },
    }
}

/// Where the camera should be for a navigation state.
pub fn viewport_for(view: &ViewState) -> Viewport {
    let focused = view.selected_district_id().and_then(catalog::find_district);
    match focused {
        Some(district) => Viewport {
            center: district.center,
            zoom: Config::DISTRICT_ZOOM,
            duration_secs: Config::FLY_DURATION_SECS,
        },
        None => Viewport {
            center: Config::CITY_CENTER,
            zoom: Config::CITY_ZOOM,
            duration_secs: Config::FLY_DURATION_SECS,
        },
    }
}

/// Builds the scene for the current view.
///
/// At city level every district is drawn and only active ones are
/// clickable. Below city level the focused outline and the station markers
/// are drawn; markers are clickable only while no station is open.
pub fn build_scene(view: &ViewState, mode: TimeMode, stations: &[Rc<Station>]) -> MapScene {
    match view {
        ViewState::City => city_scene(mode),
        ViewState::District { district_id } => focus_scene(district_id, None, stations),
        ViewState::Station {
            district_id,
            station,
        } => focus_scene(district_id, Some(station.id.as_str()), stations),
    }
}

fn city_scene(mode: TimeMode) -> MapScene {
    let mut scene = MapScene::default();
    for district in catalog::list_districts() {
        if !district.is_active {
            scene.polygons.push(background_polygon(district));
            continue;
        }

        let capacity = district.capacity(mode);
        let heat = heat_style(capacity, mode);
        let style = PolygonStyle {
            color: OUTLINE_STROKE,
            weight: 1,
            fill_color: heat.fill_color,
            fill_opacity: heat.fill_opacity,
            dash_array: None,
        };
        scene.polygons.push(PolygonShape {
            coordinates: district.coordinates.to_vec(),
            hover_style: Some(PolygonStyle {
                color: "#ffffff",
                weight: 2,
                fill_opacity: 0.8,
                ..style.clone()
            }),
            style,
            on_click: Some(MapAction::SelectDistrict(district.id.to_string())),
        });
        scene.markers.push(district_label(district, capacity, heat.class));
    }
    scene
}

fn background_polygon(district: &District) -> PolygonShape {
    PolygonShape {
        coordinates: district.coordinates.to_vec(),
        style: PolygonStyle {
            color: "#334155",
            weight: 1,
            fill_color: "#0f172a",
            fill_opacity: 0.6,
            dash_array: Some("5, 5"),
        },
        hover_style: None,
        on_click: None,
    }
}

fn district_label(district: &District, capacity: u32, class: HeatClass) -> MarkerShape {
    let tone = if class == HeatClass::Overload {
        "label-load overload"
    } else {
        "label-load"
    };
    MarkerShape {
        position: district.center,
        icon_html: format!(
            r#"<div class="district-label">{}<br/><span class="{tone}">负载: {capacity}%</span></div>"#,
            district.name
        ),
        icon_size: None,
        z_offset: 0,
        on_click: None,
    }
}

fn focus_scene(district_id: &str, selected: Option<&str>, stations: &[Rc<Station>]) -> MapScene {
    let mut scene = MapScene::default();
    if let Some(district) = catalog::find_district(district_id) {
        scene.polygons.push(PolygonShape {
            coordinates: district.coordinates.to_vec(),
            style: PolygonStyle {
                color: FOCUS_STROKE,
                weight: 3,
                fill_color: "#000000",
                fill_opacity: 0.1,
                dash_array: None,
            },
            hover_style: None,
            on_click: None,
        });
    }

    scene.markers = stations
        .iter()
        .filter(|s| s.district_id == district_id)
        .map(|station| {
            let is_selected = selected == Some(station.id.as_str());
            MarkerShape {
                position: station.position,
                icon_html: station_icon(station.revenue_level, is_selected),
                icon_size: Some((20, 20)),
                z_offset: if is_selected { 1000 } else { 0 },
                on_click: selected
                    .is_none()
                    .then(|| MapAction::SelectStation(station.id.clone())),
            }
        })
        .collect();
    scene
}

fn station_icon(rank: RevenueRank, is_selected: bool) -> String {
    let color = rank.color();
    let (pulse, scale) = if is_selected {
        (r#"<div class="marker-pulse"></div>"#, 1.5)
    } else {
        ("", 1.0)
    };
    format!(
        r#"<div class="station-marker">{pulse}<div class="marker-dot" style="background-color: {color}; transform: scale({scale}); box-shadow: 0 0 10px {color};">{rank}</div></div>"#
    )
}

/// One swatch of the map legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: &'static str,
    pub round: bool,
}

/// Legend title and entries for the current view.
pub fn legend(level: ViewLevel, mode: TimeMode) -> (&'static str, Vec<LegendEntry>) {
    let square = |color, label| LegendEntry {
        color,
        label,
        round: false,
    };

    match (level, mode) {
        (ViewLevel::City, TimeMode::Prediction) => (
            "容量/负载图例",
            vec![
                square("#ef4444", "预测过载 (大于80%)"),
                square("#3b82f6", "预测正常"),
            ],
        ),
        (ViewLevel::City, _) => (
            "容量/负载图例",
            vec![square("#22d3ee", "高负载区域"), square("#3b82f6", "正常区域")],
        ),
        _ => (
            "营收等级图例",
            RevenueRank::all()
                .iter()
                .map(|rank| LegendEntry {
                    color: rank.color(),
                    label: rank.label(),
                    round: true,
                })
                .collect(),
        ),
    }
}

/// Drawing backend for a [`MapScene`].
pub trait MapSurface {
    /// Removes every shape drawn by earlier scenes.
    fn clear(&mut self);

    fn add_polygon(&mut self, shape: &PolygonShape, on_click: Option<Box<dyn Fn()>>);

    fn add_marker(&mut self, shape: &MarkerShape, on_click: Option<Box<dyn Fn()>>);

    fn fly_to(&mut self, viewport: Viewport);
}

/// Redraws `scene` on `surface`, routing clicks to `dispatch`.
///
/// Shapes without an action get no handler at all.
pub fn apply_scene<S: MapSurface + ?Sized>(
    surface: &mut S,
    scene: &MapScene,
    dispatch: &Rc<dyn Fn(MapAction)>,
) {
    let handler = |action: &Option<MapAction>| -> Option<Box<dyn Fn()>> {
        action.clone().map(|action| {
            let dispatch = Rc::clone(dispatch);
            Box::new(move || dispatch(action.clone())) as Box<dyn Fn()>
        })
    };

    surface.clear();
    for polygon in &scene.polygons {
        surface.add_polygon(polygon, handler(&polygon.on_click));
    }
    for marker in &scene.markers {
        surface.add_marker(marker, handler(&marker.on_click));
    }
}
