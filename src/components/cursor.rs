use leptos::prelude::*;

use crate::hooks::use_pointer_tracker;
use crate::models::SpringConfig;
use crate::motion::{FOLLOWER_SIZE_PX, MOBILE_BREAKPOINT_PX};

/// Orange dot that trails the pointer and swells over hover triggers.
#[component]
pub fn PointerFollower(#[prop(default = SpringConfig::follower())] spring: SpringConfig) -> impl IntoView {
    let tracker = use_pointer_tracker(spring);

    let position = move || {
        let (x, y) = tracker.frame.get().origin;
        format!("transform: translate3d({x}px, {y}px, 0);")
    };
    let dot = move || {
        let scale = tracker.frame.get().scale;
        format!("width: {FOLLOWER_SIZE_PX}px; height: {FOLLOWER_SIZE_PX}px; transform: scale({scale});")
    };

    view! {
        <Show when=move || tracker.enabled.get()>
            <div
                class="pointer-follower fixed top-0 left-0 pointer-events-none z-[9999] mix-blend-difference"
                style=position
            >
                <div class="bg-orange-500 rounded-full" style=dot/>
            </div>
        </Show>
        <style>{cursor_stylesheet()}</style>
    }
}

/// Global rules hiding the system cursor, undone at the mobile breakpoint.
pub fn cursor_stylesheet() -> String {
    format!(
        "* {{ cursor: none !important; }} \
         @media (max-width: {MOBILE_BREAKPOINT_PX}px) {{ \
         * {{ cursor: auto !important; }} \
         .pointer-follower {{ display: none !important; }} }}"
    )
}
