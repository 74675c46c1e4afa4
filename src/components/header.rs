use yew::prelude::*;

use crate::hooks::use_clock::use_clock;

/// Title bar with the live badge, weather and the ticking clock.
///
/// The clock lives here so its one-second re-render stays local.
#[function_component(Header)]
pub fn header() -> Html {
    let now = use_clock();

    html! {
        <header class="app-header">
            <div class="header-brand">
                <div class="brand-icon">{"⚡"}</div>
                <div>
                    <h1>{"场站服务能力评估平台"}</h1>
                    <div class="subtitle">{"Station Service Capability Assessment"}</div>
                </div>
                <div class="live-badge">
                    <span class="live-dot" />
                    {"实时在线"}
                </div>
            </div>

            <div class="header-status">
                <span class="weather">{"☀ 深圳市 28°C 晴"}</span>
                <span class="divider" />
                <span>{now.format("%Y/%-m/%-d").to_string()}</span>
                <span class="clock">{now.format("%H:%M:%S").to_string()}</span>
                <span class="divider" />
                <span class="latency">
                    <span class="latency-dot" />
                    {"数据延迟: 30ms"}
                </span>
            </div>
        </header>
    }
}
