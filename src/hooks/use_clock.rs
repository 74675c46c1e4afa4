use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::Config;

/// Wall-clock time refreshed every second while the caller is mounted
#[hook]
pub fn use_clock() -> DateTime<Local> {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(Config::CLOCK_INTERVAL_MS, move || now.set(Local::now()));
            move || drop(interval)
        });
    }

    *now
}
