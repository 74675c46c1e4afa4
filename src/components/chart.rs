use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle,
        LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::series::{ChartSeriesPoint, Column, column, labels, rounded};
use crate::services::panels::{COLORS, PieSlice};
use crate::utils::debounce::debounced_resize_listener;

const AXIS_COLOR: &str = "#64748b";
const GRID_COLOR: &str = "#334155";
const LEGEND_COLOR: &str = "#94a3b8";

type Points = Rc<Vec<ChartSeriesPoint>>;

/// What a chart panel draws. Each variant maps to one fixed chart layout.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Revenue area, with the dashed trend overlay when forecasting
    Revenue { points: Points, forecast: bool },
    /// Charging and queued users as grouped bars
    Activity { points: Points },
    /// Utilization bars with the queue length line of one station
    ServiceCapability { points: Points },
    /// Load area against the flat capacity line
    PowerCapacity { points: Points },
    PriceCarbon { price: Points, carbon: Points },
    /// Carbon reduction area from the secondary column
    CarbonReduction { points: Points },
    Donut {
        slices: &'static [PieSlice],
        inner: &'static str,
        outer: &'static str,
    },
}

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id the renderer draws into; must be unique on the page
    pub id: AttrValue,
    pub spec: ChartSpec,
    #[prop_or(AttrValue::Static("chart-container"))]
    pub class: AttrValue,
}

#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let id = props.id.clone();

        use_effect_with(
            (props.spec.clone(), container_ref),
            move |(spec, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, &id, spec);

                    let spec = spec.clone();
                    debounced_resize_listener(
                        move || render_chart(&container, &id, &spec),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class={props.class.clone()} ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, spec: &ChartSpec) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(spec);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error in {id}: {e:?}").into());
    }
}

/// Builds the chart for a spec.
pub fn build_chart(spec: &ChartSpec) -> Chart {
    match spec {
        ChartSpec::Revenue { points, forecast } => {
            let chart = cartesian(points).series(
                Line::new()
                    .name("营收额")
                    .data(rounded(column(points, Column::Primary)))
                    .smooth(true)
                    .show_symbol(false)
                    .line_style(LineStyle::new().color("#10b981").width(2))
                    .area_style(AreaStyle::new().color("rgba(16, 185, 129, 0.2)")),
            );
            if *forecast {
                chart.series(
                    Line::new()
                        .name("预测营收")
                        .data(rounded(column(points, Column::Tertiary)))
                        .smooth(true)
                        .show_symbol(false)
                        .line_style(
                            LineStyle::new()
                                .color("#a855f7")
                                .type_(LineStyleType::Dashed),
                        ),
                )
            } else {
                chart
            }
        }
        ChartSpec::Activity { points } => cartesian(points)
            .legend(legend(vec!["在桩人数", "排队人数"]))
            .series(bar("在桩人数", column(points, Column::Primary), "#3b82f6"))
            .series(bar("排队人数", column(points, Column::Secondary), "#f59e0b")),
        ChartSpec::ServiceCapability { points } => cartesian(points)
            .legend(legend(vec!["利用率 (%)", "可用桩数", "排队长度"]))
            .series(bar("利用率 (%)", column(points, Column::Primary), "#06b6d4"))
            .series(line("可用桩数", column(points, Column::Secondary), "#22c55e"))
            .series(line("排队长度", column(points, Column::Tertiary), "#f43f5e")),
        ChartSpec::PowerCapacity { points } => cartesian(points)
            .legend(legend(vec!["实时负荷 (kW)", "变压器容量 (kW)"]))
            .series(
                line("实时负荷 (kW)", column(points, Column::Primary), "#f59e0b")
                    .area_style(AreaStyle::new().color("rgba(245, 158, 11, 0.15)")),
            )
            .series(
                Line::new()
                    .name("变压器容量 (kW)")
                    .data(column(points, Column::Secondary))
                    .show_symbol(false)
                    .line_style(
                        LineStyle::new()
                            .color("#ef4444")
                            .type_(LineStyleType::Dashed),
                    ),
            ),
        ChartSpec::PriceCarbon { price, carbon } => cartesian(price)
            .legend(legend(vec!["现货电价 (元/kWh)", "碳排因子 (kg/kWh)"]))
            .series(line("现货电价 (元/kWh)", column(price, Column::Primary), "#eab308").smooth(false))
            .series(line("碳排因子 (kg/kWh)", column(carbon, Column::Primary), "#22c55e")),
        ChartSpec::CarbonReduction { points } => cartesian(points).series(
            line("碳减排量", rounded(column(points, Column::Secondary)), "#22c55e")
                .area_style(AreaStyle::new().color("rgba(34, 197, 94, 0.2)")),
        ),
        ChartSpec::Donut {
            slices,
            inner,
            outer,
        } => Chart::new()
            .color(COLORS.iter().map(|c| Color::from(*c)).collect())
            .tooltip(Tooltip::new().trigger(Trigger::Item))
            .series(
                Pie::new()
                    .radius(vec![*inner, *outer])
                    .data(slices.iter().map(|s| (s.value, s.name)).collect()),
            ),
    }
}

/// Shared category-axis frame for the 24h series charts.
fn cartesian(points: &[ChartSeriesPoint]) -> Chart {
    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("2%")
                .right("4%")
                .top("18%")
                .bottom("4%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels(points))
                .axis_label(AxisLabel::new().color(AXIS_COLOR).interval(5)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
}

fn legend(names: Vec<&str>) -> Legend {
    Legend::new()
        .data(names)
        .top(0)
        .text_style(TextStyle::new().color(LEGEND_COLOR).font_size(10))
}

fn line(name: &str, data: Vec<f64>, color: &str) -> Line {
    Line::new()
        .name(name)
        .data(data)
        .smooth(true)
        .show_symbol(false)
        .line_style(LineStyle::new().color(color).width(2))
}

fn bar(name: &str, data: Vec<f64>, color: &str) -> Bar {
    Bar::new()
        .name(name)
        .data(data)
        .bar_width("30%")
        .item_style(ItemStyle::new().color(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::panels::{COST_STRUCTURE, Classification};
    use crate::services::series::{order_series, spot_price_series, carbon_factor_series, time_series};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    #[test]
    fn test_revenue_forecast_overlay_only_when_predicting() {
        let points = Rc::new(time_series(24, 120.0, 5.0, &mut rng()));
        let plain = build_chart(&ChartSpec::Revenue {
            points: points.clone(),
            forecast: false,
        })
        .to_string();
        let forecast = build_chart(&ChartSpec::Revenue {
            points,
            forecast: true,
        })
        .to_string();

        assert!(plain.contains("营收额"));
        assert!(!plain.contains("预测营收"));
        assert!(forecast.contains("预测营收"));
    }

    #[test]
    fn test_activity_chart_has_both_bars() {
        let points = Rc::new(order_series(24, 40.0, 15.0, &mut rng()));
        let json = build_chart(&ChartSpec::Activity { points }).to_string();
        assert!(json.contains("在桩人数"));
        assert!(json.contains("排队人数"));
        assert!(json.contains("23:00"));
    }

    #[test]
    fn test_price_carbon_chart() {
        let mut rng = rng();
        let json = build_chart(&ChartSpec::PriceCarbon {
            price: Rc::new(spot_price_series(&mut rng)),
            carbon: Rc::new(carbon_factor_series(&mut rng)),
        })
        .to_string();
        assert!(json.contains("现货电价"));
        assert!(json.contains("碳排因子"));
    }

    #[test]
    fn test_donut_uses_slice_names() {
        let json = build_chart(&ChartSpec::Donut {
            slices: Classification::L2Grid.slices(),
            inner: "40%",
            outer: "65%",
        })
        .to_string();
        assert!(json.contains("居住密集网格"));

        let json = build_chart(&ChartSpec::Donut {
            slices: COST_STRUCTURE,
            inner: "25%",
            outer: "60%",
        })
        .to_string();
        assert!(json.contains("平台服务费"));
    }
}
