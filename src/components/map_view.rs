use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::district::TimeMode;
use crate::models::station::Station;
use crate::models::view::{ViewLevel, ViewState};
use crate::services::leaflet::LeafletSurface;
use crate::services::map_scene::{
    MapAction, MapSurface, apply_scene, build_scene, legend, viewport_for,
};
use crate::utils::debounce::debounced_resize_listener;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub view: ViewState,
    pub stations: Rc<Vec<Rc<Station>>>,
    pub time_mode: TimeMode,
    pub on_time_mode: Callback<TimeMode>,
    pub on_action: Callback<MapAction>,
    pub on_back: Callback<()>,
}

/// Leaflet map with the time-mode switcher, back button and legend overlays
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let surface: Rc<RefCell<Option<LeafletSurface>>> = use_mut_ref(|| None);

    // Effect: mount the map once; dropping the surface removes it
    {
        let surface = surface.clone();
        use_effect_with(container_ref.clone(), move |container_ref| {
            let mut listener = None;
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                match LeafletSurface::mount(&container) {
                    Ok(mounted) => {
                        *surface.borrow_mut() = Some(mounted);
                        let surface = surface.clone();
                        listener = debounced_resize_listener(
                            move || {
                                if let Some(map) = surface.borrow().as_ref() {
                                    map.refresh_size();
                                }
                            },
                            Config::RESIZE_DEBOUNCE_MS,
                        );
                    }
                    Err(e) => web_sys::console::error_1(&e.to_string().into()),
                }
            }

            move || {
                drop(listener);
                surface.borrow_mut().take();
            }
        });
    }

    // Effect: redraw shapes whenever the selection, mode or stations change
    {
        let surface = surface.clone();
        let on_action = props.on_action.clone();
        use_effect_with(
            (props.view.clone(), props.time_mode, props.stations.clone()),
            move |(view, mode, stations)| {
                if let Some(map) = surface.borrow_mut().as_mut() {
                    let scene = build_scene(view, *mode, stations);
                    let dispatch: Rc<dyn Fn(MapAction)> = Rc::new(move |action: MapAction| on_action.emit(action));
                    apply_scene(map, &scene, &dispatch);
                }
                || ()
            },
        );
    }

    // Effect: fly to the focused area on every level or district change
    {
        let surface = surface.clone();
        let focus = (
            props.view.level(),
            props.view.selected_district_id().map(str::to_string),
        );
        let viewport = viewport_for(&props.view);
        use_effect_with(focus, move |_| {
            if let Some(map) = surface.borrow_mut().as_mut() {
                map.fly_to(viewport);
            }
            || ()
        });
    }

    let level = props.view.level();

    html! {
        <div class="map-view">
            <div class="map-canvas" ref={container_ref} />

            <TimeSwitcher mode={props.time_mode} on_change={props.on_time_mode.clone()} />

            if level != ViewLevel::City {
                <button
                    class="map-back"
                    onclick={props.on_back.reform(|_: MouseEvent| ())}
                >
                    {"← 返回上一级"}
                </button>
            }

            <MapLegend {level} mode={props.time_mode} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeSwitcherProps {
    pub mode: TimeMode,
    pub on_change: Callback<TimeMode>,
}

#[function_component(TimeSwitcher)]
pub fn time_switcher(props: &TimeSwitcherProps) -> Html {
    html! {
        <div class="time-switcher">
            {
                TimeMode::all().iter().map(|mode| {
                    let mode = *mode;
                    let class = classes!("mode-button", (mode == props.mode).then_some("active"));
                    let onclick = props.on_change.reform(move |_: MouseEvent| mode);
                    html! {
                        <button key={mode.code()} {class} {onclick}>{mode.label()}</button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MapLegendProps {
    pub level: ViewLevel,
    pub mode: TimeMode,
}

#[function_component(MapLegend)]
pub fn map_legend(props: &MapLegendProps) -> Html {
    let (title, entries) = legend(props.level, props.mode);

    html! {
        <div class="map-legend">
            <h4>{"▤ "}{title}</h4>
            { for entries.iter().map(|entry| {
                let class = classes!("swatch", entry.round.then_some("round"));
                let style = format!("background-color: {};", entry.color);
                html! {
                    <div class="legend-row">
                        <span {class} {style} />
                        {entry.label}
                    </div>
                }
            }) }
        </div>
    }
}
