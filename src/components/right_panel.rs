use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::{ChartPanel, ChartSpec};
use crate::config::Config;
use crate::models::district::TimeMode;
use crate::models::series::ChartSeriesPoint;
use crate::models::view::{ViewLevel, ViewState};
use crate::services::panels::{analysis_profile, analysis_titles, assessment_tags, capacity_kw};
use crate::services::series::{
    carbon_factor_series, order_series, power_capacity_series, service_capability_series,
    spot_price_series, time_series,
};

#[derive(Properties, PartialEq)]
pub struct RightPanelProps {
    pub view: ViewState,
    pub time_mode: TimeMode,
}

/// Series behind the right panel, generated once per selection and mode.
struct AnalysisSeries {
    main: Rc<Vec<ChartSeriesPoint>>,
    /// Orders for a region, service capability for a station
    activity: Rc<Vec<ChartSeriesPoint>>,
    power: Rc<Vec<ChartSeriesPoint>>,
    price: Rc<Vec<ChartSeriesPoint>>,
    carbon: Rc<Vec<ChartSeriesPoint>>,
}

fn generate(view: &ViewState, mode: TimeMode) -> AnalysisSeries {
    let mut rng = rand::thread_rng();
    let points = Config::SERIES_POINTS;
    let profile = analysis_profile(mode);

    let activity = match view.selected_station() {
        Some(station) => service_capability_series(points, station.piles.len(), &mut rng),
        None => order_series(points, 40.0, 15.0, &mut rng),
    };

    AnalysisSeries {
        main: Rc::new(time_series(points, profile.base, profile.variance, &mut rng)),
        activity: Rc::new(activity),
        power: Rc::new(power_capacity_series(points, capacity_kw(view), &mut rng)),
        price: Rc::new(spot_price_series(&mut rng)),
        carbon: Rc::new(carbon_factor_series(&mut rng)),
    }
}

/// Dynamic analysis charts for the current selection
#[function_component(RightPanel)]
pub fn right_panel(props: &RightPanelProps) -> Html {
    let level = props.view.level();
    let is_station = level == ViewLevel::Station;
    let titles = analysis_titles(level);

    // Keyed on the selection, not the whole view, so unrelated re-renders
    // keep the same curves
    let selection = (
        props.view.selected_district_id().map(str::to_string),
        props.view.selected_station().map(|s| s.id.clone()),
        props.time_mode,
    );
    let series = {
        let view = props.view.clone();
        use_memo(selection, move |(_, _, mode)| generate(&view, *mode))
    };

    let activity_spec = if is_station {
        ChartSpec::ServiceCapability {
            points: series.activity.clone(),
        }
    } else {
        ChartSpec::Activity {
            points: series.activity.clone(),
        }
    };

    html! {
        <div class="panel-column">
            <div class="panel-heading">
                <h2 class="panel-title">{titles.panel}</h2>
                <span class={classes!("mode-badge", props.time_mode.css_class())}>
                    {props.time_mode.badge()}
                </span>
            </div>

            if is_station {
                <div class="panel-block diagnosis">
                    <h3>{"智能经营诊断"}</h3>
                    { for assessment_tags().iter().map(|tag| html! {
                        <div class="tag-row">
                            <span class={classes!("tag", tag.kind.css_class())}>
                                {tag.kind.icon()}{" "}{tag.label}
                            </span>
                            <span class="evidence">{tag.evidence}</span>
                        </div>
                    }) }
                </div>
            }

            <div class="panel-block grow">
                <h3>{titles.main_chart}</h3>
                <ChartPanel
                    id="main-chart"
                    spec={ChartSpec::Revenue {
                        points: series.main.clone(),
                        forecast: props.time_mode == TimeMode::Prediction,
                    }}
                />
            </div>

            <div class="panel-block grow">
                <h3>{titles.activity_chart}</h3>
                <ChartPanel id="activity-chart" spec={activity_spec} />
            </div>

            <div class="panel-block grow">
                <h3>{"负荷与容量"}</h3>
                <ChartPanel id="power-chart" spec={ChartSpec::PowerCapacity { points: series.power.clone() }} />
            </div>

            <div class="panel-block grow">
                <h3>{"现货电价与碳排因子"}</h3>
                <ChartPanel
                    id="price-carbon-chart"
                    spec={ChartSpec::PriceCarbon { price: series.price.clone(), carbon: series.carbon.clone() }}
                />
            </div>

            <div class="panel-block fixed">
                <h3>{"碳减排趋势 (kg)"}</h3>
                <ChartPanel id="carbon-chart" spec={ChartSpec::CarbonReduction { points: series.main.clone() }} />
            </div>
        </div>
    }
}
