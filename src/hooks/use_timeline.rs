use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::timeline::{Timeline, TimelineAction};

#[derive(Debug, Clone, PartialEq)]
struct TimelineState(Timeline);

impl Reducible for TimelineState {
    type Action = TimelineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// Handle returned by `use_timeline` hook
#[derive(Clone, PartialEq)]
pub struct TimelineHandle {
    pub timeline: Timeline,
    pub dispatch: Callback<TimelineAction>,
}

/// Timeline position with play/pause driven by a one-slot-per-second interval
#[hook]
pub fn use_timeline() -> TimelineHandle {
    let state = use_reducer(|| TimelineState(Timeline::default()));
    let playing = state.0.playing;

    // Effect: tick while playing; dropping the interval stops it
    {
        let dispatcher = state.dispatcher();
        use_effect_with(playing, move |playing| {
            let interval = playing.then(|| {
                Interval::new(Config::PLAYBACK_INTERVAL_MS, move || {
                    dispatcher.dispatch(TimelineAction::Tick);
                })
            });
            move || drop(interval)
        });
    }

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action| dispatcher.dispatch(action))
    };

    TimelineHandle {
        timeline: state.0,
        dispatch,
    }
}
