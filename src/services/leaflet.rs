use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::Config;
use crate::models::district::LatLng;
use crate::models::error::AppError;
use crate::services::map_scene::{MapSurface, MarkerShape, PolygonShape, PolygonStyle, Viewport};

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[derive(Clone)]
    type Layer;

    #[wasm_bindgen(extends = Layer)]
    type LayerGroup;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = polygon)]
    fn polygon(latlngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(latlng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["L", "DomEvent"], js_name = stopPropagation)]
    fn stop_propagation(event: &JsValue);

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap);

    #[wasm_bindgen(method)]
    fn on(this: &Layer, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = setStyle)]
    fn set_style(this: &Layer, style: &JsValue);

    #[wasm_bindgen(method, js_name = bringToFront)]
    fn bring_to_front(this: &Layer);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Layer);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);
}

type Handler = Closure<dyn FnMut(JsValue)>;

/// Small builder over a plain JS object used for Leaflet options.
struct Options(Object);

impl Options {
    fn new() -> Self {
        Self(Object::new())
    }

    fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), &value.into());
        self
    }

    fn build(self) -> JsValue {
        self.0.into()
    }
}

fn lat_lng((lat, lng): LatLng) -> JsValue {
    Array::of2(&lat.into(), &lng.into()).into()
}

fn pair(a: u32, b: u32) -> JsValue {
    Array::of2(&a.into(), &b.into()).into()
}

fn path_options(style: &PolygonStyle) -> Options {
    let options = Options::new()
        .set("color", style.color)
        .set("weight", style.weight)
        .set("fillColor", style.fill_color)
        .set("fillOpacity", style.fill_opacity);
    match style.dash_array {
        Some(dash) => options.set("dashArray", dash),
        None => options,
    }
}

/// Leaflet map mounted on a container element.
///
/// Shapes live in a single layer group that is cleared on every redraw.
/// The JS closures wired to those shapes are owned here so they stay valid
/// exactly as long as the shapes do.
pub struct LeafletSurface {
    map: LeafletMap,
    shapes: LayerGroup,
    handlers: Vec<Handler>,
}

impl LeafletSurface {
    pub fn mount(container: &HtmlElement) -> Result<Self, AppError> {
        let options = Options::new()
            .set("center", lat_lng(Config::CITY_CENTER))
            .set("zoom", Config::CITY_ZOOM)
            .set("minZoom", Config::MIN_ZOOM)
            .set("zoomControl", false)
            .set("attributionControl", false)
            .build();
        let map = create_map(container, &options)
            .map_err(|e| AppError::RenderError(format!("Leaflet init failed: {e:?}")))?;

        let tiles = Options::new()
            .set("maxZoom", Config::MAX_ZOOM)
            .set("attribution", Config::MAP_ATTRIBUTION)
            .build();
        tile_layer(Config::MAP_TILE_URL, &tiles).add_to(&map);

        let shapes = layer_group();
        shapes.add_to(&map);

        Ok(Self {
            map,
            shapes,
            handlers: Vec::new(),
        })
    }

    /// Re-measures the container after a layout change.
    pub fn refresh_size(&self) {
        self.map.invalidate_size();
    }

    fn on_click(&mut self, layer: &Layer, on_click: Box<dyn Fn()>) {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            stop_propagation(&event);
            on_click();
        });
        layer.on("click", handler.as_ref().unchecked_ref());
        self.handlers.push(handler);
    }
}

impl MapSurface for LeafletSurface {
    fn clear(&mut self) {
        self.shapes.clear_layers();
        self.handlers.clear();
    }

    fn add_polygon(&mut self, shape: &PolygonShape, on_click: Option<Box<dyn Fn()>>) {
        let coordinates: Array = shape.coordinates.iter().copied().map(lat_lng).collect();
        let options = path_options(&shape.style)
            .set("interactive", on_click.is_some())
            .build();
        let layer = polygon(&coordinates, &options);

        if let Some(hover) = &shape.hover_style {
            let hover = path_options(hover).build();
            let rest = path_options(&shape.style).build();

            let target = layer.clone();
            let enter = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
                target.set_style(&hover);
                target.bring_to_front();
            });
            let target = layer.clone();
            let leave = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| target.set_style(&rest));

            layer.on("mouseover", enter.as_ref().unchecked_ref());
            layer.on("mouseout", leave.as_ref().unchecked_ref());
            self.handlers.extend([enter, leave]);
        }

        if let Some(on_click) = on_click {
            self.on_click(&layer, on_click);
        }
        self.shapes.add_layer(&layer);
    }

    fn add_marker(&mut self, shape: &MarkerShape, on_click: Option<Box<dyn Fn()>>) {
        let (width, height) = shape.icon_size.unwrap_or((0, 0));
        let icon = div_icon(
            &Options::new()
                .set("className", "map-icon")
                .set("html", shape.icon_html.as_str())
                .set("iconSize", pair(width, height))
                .set("iconAnchor", pair(width / 2, height / 2))
                .build(),
        );
        let options = Options::new()
            .set("icon", icon)
            .set("interactive", on_click.is_some())
            .set("zIndexOffset", shape.z_offset)
            .build();
        let layer = marker(&lat_lng(shape.position), &options);

        if let Some(on_click) = on_click {
            self.on_click(&layer, on_click);
        }
        self.shapes.add_layer(&layer);
    }

    fn fly_to(&mut self, viewport: Viewport) {
        let options = Options::new()
            .set("duration", viewport.duration_secs)
            .build();
        self.map
            .fly_to(&lat_lng(viewport.center), viewport.zoom, &options);
    }
}

impl Drop for LeafletSurface {
    fn drop(&mut self) {
        self.map.remove();
    }
}
