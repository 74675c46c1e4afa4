use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_timeline::TimelineHandle;
use crate::models::timeline::{TimelineAction, format_slot, tick_slots};

#[derive(Properties, PartialEq)]
pub struct TimelineBarProps {
    pub handle: TimelineHandle,
}

/// Bottom slider over the day in quarter-hour slots
#[function_component(TimelineBar)]
pub fn timeline_bar(props: &TimelineBarProps) -> Html {
    let timeline = props.handle.timeline;
    let dispatch = &props.handle.dispatch;

    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(slot) = input.value().parse::<u32>() {
                dispatch.emit(TimelineAction::Seek(slot));
            }
        })
    };
    let step = |action: TimelineAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(action))
    };

    let progress = format!("width: {:.2}%;", timeline.progress_percent());
    let thumb = format!("left: {:.2}%;", timeline.progress_percent());

    html! {
        <div class="timeline">
            <div class="timeline-controls">
                <div class="timeline-buttons">
                    <button onclick={step(TimelineAction::StepHours(-1))} title="后退一小时">{"⏮"}</button>
                    <button class="play" onclick={step(TimelineAction::TogglePlay)}>
                        { if timeline.playing { "⏸" } else { "▶" } }
                    </button>
                    <button onclick={step(TimelineAction::StepHours(1))} title="前进一小时">{"⏭"}</button>
                    <span class="timeline-caption">{"时间轴控制"}</span>
                </div>
                <div class="timeline-readout">
                    <span class="timeline-caption">{"当前选定时间"}</span>
                    <span class="timeline-time">{format_slot(timeline.slot)}</span>
                </div>
            </div>

            <div class="timeline-track">
                <div class="timeline-ticks">
                    { for tick_slots().map(|tick| html! {
                        <div class="tick">
                            <span class="tick-mark" />
                            <span class="tick-label">{format_slot(tick)}</span>
                        </div>
                    }) }
                </div>
                <div class="track-bg" />
                <div class="track-fill" style={progress} />
                <input
                    type="range"
                    min="0"
                    max={Config::TIMELINE_SLOTS.to_string()}
                    value={timeline.slot.to_string()}
                    oninput={on_input}
                    aria-label="时间轴"
                />
                <div class="track-thumb" style={thumb} />
            </div>
        </div>
    }
}
