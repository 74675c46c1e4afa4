use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::{ChartPanel, ChartSpec};
use crate::components::classification_selector::ClassificationSelector;
use crate::components::pile_table::PileTable;
use crate::components::stat_card::StatGrid;
use crate::models::station::Station;
use crate::models::view::ViewState;
use crate::services::panels::{
    COST_STRUCTURE, Classification, PieSlice, SAFE_OPERATION_DAYS, TERMINAL_STATUS,
    palette_color, region_scale, region_stats, region_title,
};

#[derive(Properties, PartialEq)]
pub struct LeftPanelProps {
    pub view: ViewState,
}

/// Aggregate statistics for city and district, full detail for a station
#[function_component(LeftPanel)]
pub fn left_panel(props: &LeftPanelProps) -> Html {
    match props.view.selected_station() {
        Some(station) => html! { <StationDetail station={Rc::clone(station)} /> },
        None => html! { <RegionSummary view={props.view.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct RegionSummaryProps {
    view: ViewState,
}

#[function_component(RegionSummary)]
fn region_summary(props: &RegionSummaryProps) -> Html {
    let classification = use_state(Classification::default);
    let on_classification = {
        let classification = classification.clone();
        Callback::from(move |c| classification.set(c))
    };

    html! {
        <div class="panel-column">
            <h2 class="panel-title">{region_title(&props.view)}</h2>

            <StatGrid cards={region_stats(region_scale(&props.view))} />

            <div class="panel-block grow">
                <div class="block-header">
                    <h3>{"多维分类统计"}</h3>
                    <ClassificationSelector
                        classification={*classification}
                        on_change={on_classification}
                    />
                </div>
                <div class="pie-row">
                    <ChartPanel
                        id="classification-pie"
                        class="pie-container"
                        spec={ChartSpec::Donut { slices: classification.slices(), inner: "45%", outer: "75%" }}
                    />
                    <SliceLegend slices={classification.slices()} suffix="" />
                </div>
            </div>

            <div class="panel-block">
                <h3>{"⚡ 实时终端状态监控"}</h3>
                <div class="status-bars">
                    { for TERMINAL_STATUS.iter().map(|share| html! {
                        <div class="status-row">
                            <span class="status-label">{share.label}</span>
                            <div class="status-track">
                                <div
                                    class={classes!("status-fill", share.css_class)}
                                    style={format!("width: {}%;", share.percent)}
                                />
                            </div>
                            <span class="status-value">{format!("{}%", share.percent)}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SliceLegendProps {
    slices: &'static [PieSlice],
    suffix: &'static str,
}

#[function_component(SliceLegend)]
fn slice_legend(props: &SliceLegendProps) -> Html {
    html! {
        <div class="slice-legend">
            { for props.slices.iter().enumerate().map(|(i, slice)| html! {
                <div class="slice-row" title={slice.name}>
                    <span class="slice-name">
                        <span class="slice-dot" style={format!("background-color: {};", palette_color(i))} />
                        {slice.name}
                    </span>
                    <span class="mono">{format!("{}{}", slice.value, props.suffix)}</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StationDetailProps {
    station: Rc<Station>,
}

#[function_component(StationDetail)]
fn station_detail(props: &StationDetailProps) -> Html {
    let station = &props.station;
    let rank = station.revenue_level;

    html! {
        <div class="panel-column">
            <div class="station-header">
                <div>
                    <h2>
                        {&station.name}
                        <span class={classes!("rank-badge", rank.css_class())}>{format!("{rank}级站")}</span>
                    </h2>
                    <div class="station-ids mono">
                        <span>{format!("ID: {}", station.id)}</span>
                        <span>{format!("区域: {}", station.district_id.to_uppercase())}</span>
                    </div>
                    <div class="station-meta">
                        {format!("{} · {}", station.location_label, station.operating_type.label())}
                    </div>
                </div>
                <div class="safe-days">
                    <div class="caption">{"🛡 安全运行"}</div>
                    <div class="days mono">{format_thousands(SAFE_OPERATION_DAYS)}<span>{"天"}</span></div>
                </div>
            </div>

            <div class="panel-scroll">
                <div class="card-pair">
                    <div class="mini-card">
                        <div class="caption">{"年度运营成本"}</div>
                        <div class="mono big">{station.operational_cost.to_string()}<span class="unit">{"万元"}</span></div>
                        <div class="meter"><div class="meter-fill" /></div>
                    </div>
                    <div class="mini-card">
                        <div class="caption">{"人员配置"}</div>
                        <div class="split-row">
                            <span class="mono big">{station.staff_count().to_string()}<span class="unit">{"人"}</span></span>
                            <span class="muted">{format!("¥{}/月", station.avg_staff_salary())}</span>
                        </div>
                    </div>
                </div>

                <div class="panel-block">
                    <h3>{"人员编制"}</h3>
                    <table class="staff-table">
                        <tbody>
                            { for station.staff.iter().map(|role| html! {
                                <tr>
                                    <td>{role.role}</td>
                                    <td class="mono">{format!("{}人", role.count)}</td>
                                    <td class="mono muted">{format!("¥{}", role.salary)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <div class="panel-block">
                    <h3>{"详细成本结构分布"}</h3>
                    <div class="pie-row compact">
                        <ChartPanel
                            id="cost-structure-pie"
                            class="pie-container"
                            spec={ChartSpec::Donut { slices: COST_STRUCTURE, inner: "30%", outer: "70%" }}
                        />
                        <SliceLegend slices={COST_STRUCTURE} suffix="%" />
                    </div>
                </div>

                <div class="panel-block">
                    <div class="fee-grid">
                        <div class="fee"><span>{"停车费"}</span><span class="mono">{format!("¥{}/h", station.parking_fee)}</span></div>
                        <div class="fee"><span>{"服务费"}</span><span class="mono">{format!("¥{}/kWh", station.service_fee)}</span></div>
                    </div>
                    <div class="lock-row">
                        <span>{"🔒 智能地锁"}</span>
                        if station.has_ground_lock {
                            <span class="ok">{"已安装"}</span>
                            <span class="coverage mono">{format!("{}% 覆盖", station.ground_lock_coverage)}</span>
                        } else {
                            <span class="muted">{"无"}</span>
                        }
                    </div>
                    <div class="feature-tags">
                        { for station.features.iter().map(|tag| html! { <span class="feature-tag">{*tag}</span> }) }
                    </div>
                </div>

                <PileTable station={Rc::clone(station)} />
            </div>
        </div>
    }
}

/// `1245` → `1,245`
fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
