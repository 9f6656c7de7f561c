//! Page-level trackers. Each owns its window listeners and removes them when
//! the owning component is torn down; consumers only ever see read signals.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use crate::dom;
use crate::models::SpringConfig;
use crate::motion::{
    chain_has_marker, follower_enabled, CursorPosition, FollowerFrame, FollowerSpring, RangeMap,
    HOVER_TRIGGER,
};

/// Normalised document scroll progress in `[0, 1]`.
#[derive(Clone, Copy)]
pub struct ScrollProgress(ReadSignal<f64>);

impl ScrollProgress {
    /// Derived value following `range` as the page scrolls
    pub fn map(self, range: RangeMap) -> Signal<f64> {
        Signal::derive(move || range.map(self.0.get()))
    }
}

pub fn use_scroll_progress() -> ScrollProgress {
    let (progress, set_progress) = signal(0.0);

    let refresh = move || match dom::read_scroll_progress() {
        Ok(p) => set_progress.set(p),
        Err(e) => tracing::debug!(error = %e, "scroll progress unavailable"),
    };

    // Effects only run in the browser; this picks up a restored scroll position.
    Effect::new(move |_| refresh());

    let on_scroll = window_event_listener(ev::scroll, move |_| refresh());
    let on_resize = window_event_listener(ev::resize, move |_| refresh());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    ScrollProgress(progress)
}

/// Keeps `value` alive until the current owner is cleaned up, then drops it.
pub fn keep_until_cleanup<T: 'static>(value: T) {
    let slot = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        slot.try_update_value(Option::take);
    });
}

/// Follower frame period
const TICK: Duration = Duration::from_millis(16);

#[derive(Clone, Copy)]
pub struct PointerTracker {
    /// Spring-eased corner and scale of the follower dot
    pub frame: ReadSignal<FollowerFrame>,
    /// False at or below the mobile breakpoint
    pub enabled: ReadSignal<bool>,
}

/// Tracks the pointer and eases the follower towards it. The frame ticker
/// only runs while the follower is in motion.
pub fn use_pointer_tracker(spring: SpringConfig) -> PointerTracker {
    let (position, set_position) = signal(CursorPosition::default());
    let follower = StoredValue::new(FollowerSpring::new(spring, CursorPosition::default()));
    let (frame, set_frame) = signal(follower.with_value(FollowerSpring::frame));
    let (enabled, set_enabled) = signal(true);

    let on_move = window_event_listener(ev::mousemove, move |e| {
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        set_position.update(|p| *p = p.moved_to(x, y));
    });
    let on_over = window_event_listener(ev::mouseover, move |e| {
        let target = event_target::<leptos::web_sys::Element>(&e);
        let chain = dom::class_chain(target);
        let hovering = chain_has_marker(chain.iter().map(String::as_str), HOVER_TRIGGER);
        set_position.update(|p| *p = p.with_hover(hovering));
    });

    let refresh_enabled = move || match dom::viewport_width() {
        Ok(width) => set_enabled.set(follower_enabled(width)),
        Err(e) => tracing::debug!(error = %e, "viewport width unavailable"),
    };
    let on_resize = window_event_listener(ev::resize, move |_| refresh_enabled());
    Effect::new(move |_| refresh_enabled());

    let ticker = StoredValue::new(None::<IntervalHandle>);
    let stop = move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };
    let step = move || {
        let Some((next, settled)) = follower.try_update_value(|f| f.advance(TICK.as_secs_f64()))
        else {
            return;
        };
        set_frame.set(next);
        if settled {
            stop();
        }
    };

    Effect::new(move |_| {
        let cursor = position.get();
        follower.update_value(|f| f.retarget(cursor));
        let idle = ticker.with_value(Option::is_none);
        if idle && !follower.with_value(FollowerSpring::is_at_rest) {
            match set_interval_with_handle(step, TICK) {
                Ok(handle) => ticker.set_value(Some(handle)),
                Err(e) => tracing::debug!(error = ?e, "pointer follower ticker unavailable"),
            }
        }
    });

    on_cleanup(move || {
        on_move.remove();
        on_over.remove();
        on_resize.remove();
        stop();
    });

    PointerTracker { frame, enabled }
}
