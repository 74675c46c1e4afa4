use crate::config::Config;

const SLOTS_PER_HOUR: u32 = 4;

/// Formats a quarter-hour slot as `HH:MM`; slot 96 reads `24:00`.
pub fn format_slot(slot: u32) -> String {
    format!(
        "{:02}:{:02}",
        slot / SLOTS_PER_HOUR,
        (slot % SLOTS_PER_HOUR) * 15
    )
}

/// Tick marks under the slider: every six hours, both ends included.
pub fn tick_slots() -> impl Iterator<Item = u32> {
    (0..=Config::TIMELINE_SLOTS).step_by(24)
}

/// Playback position on the 24h timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub slot: u32,
    pub playing: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            slot: Config::TIMELINE_DEFAULT,
            playing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAction {
    /// Advance one slot, wrapping past the end of the day
    Tick,
    Seek(u32),
    /// Jump by whole hours, clamped to the day
    StepHours(i32),
    TogglePlay,
}

impl Timeline {
    pub fn apply(self, action: TimelineAction) -> Self {
        match action {
            TimelineAction::Tick => Self {
                slot: (self.slot + 1) % (Config::TIMELINE_SLOTS + 1),
                ..self
            },
            TimelineAction::Seek(slot) => Self {
                slot: slot.min(Config::TIMELINE_SLOTS),
                ..self
            },
            TimelineAction::StepHours(hours) => {
                let target = i64::from(self.slot) + i64::from(hours) * i64::from(SLOTS_PER_HOUR);
                Self {
                    slot: target.clamp(0, i64::from(Config::TIMELINE_SLOTS)) as u32,
                    ..self
                }
            }
            TimelineAction::TogglePlay => Self {
                playing: !self.playing,
                ..self
            },
        }
    }

    /// Filled share of the slider track, in percent.
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.slot) / f64::from(Config::TIMELINE_SLOTS) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_slot() {
        assert_eq!(format_slot(0), "00:00");
        assert_eq!(format_slot(48), "12:00");
        assert_eq!(format_slot(53), "13:15");
        assert_eq!(format_slot(96), "24:00");
    }

    #[test]
    fn test_ticks() {
        assert_eq!(tick_slots().collect::<Vec<_>>(), vec![0, 24, 48, 72, 96]);
    }

    #[test]
    fn test_default_is_noon_paused() {
        let timeline = Timeline::default();
        assert_eq!(timeline.slot, 48);
        assert!(!timeline.playing);
        assert_eq!(timeline.progress_percent(), 50.0);
    }

    #[test]
    fn test_tick_wraps_after_last_slot() {
        let end = Timeline::default().apply(TimelineAction::Seek(96));
        assert_eq!(end.apply(TimelineAction::Tick).slot, 0);
    }

    #[test]
    fn test_step_hours_clamps() {
        let t = Timeline::default();
        assert_eq!(t.apply(TimelineAction::StepHours(1)).slot, 52);
        assert_eq!(t.apply(TimelineAction::StepHours(-20)).slot, 0);
        assert_eq!(t.apply(TimelineAction::StepHours(20)).slot, 96);
    }

    #[test]
    fn test_seek_clamps_and_keeps_playing() {
        let t = Timeline::default()
            .apply(TimelineAction::TogglePlay)
            .apply(TimelineAction::Seek(500));
        assert_eq!(t.slot, 96);
        assert!(t.playing);
    }
}
