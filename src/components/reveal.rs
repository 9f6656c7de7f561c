use leptos::html::Div;
use leptos::prelude::*;

use crate::models::RevealConfig;
use crate::motion::RevealLatch;

/// Fades/slides its children in the first time they scroll into view.
/// Once revealed the content stays put.
#[component]
pub fn Reveal(
    config: RevealConfig,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new());

    #[allow(unused_variables)]
    let on_intersect = move |intersecting: bool| {
        let mut fired = false;
        latch.update_value(|l| fired = l.observe(intersecting));
        if fired {
            set_revealed.set(true);
        }
        fired
    };

    // The observer is owned by the effect run and disconnected on unmount.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let Some(el) = node.get() else { return };
        if latch.with_value(RevealLatch::is_revealed) {
            return;
        }
        match crate::dom::observe_until(&el, on_intersect) {
            Ok(observer) => crate::hooks::keep_until_cleanup(observer),
            Err(e) => {
                tracing::debug!(error = %e, "reveal observer unavailable, showing content");
                set_revealed.set(true);
            }
        }
    });

    view! {
        <div node_ref=node class=class style=move || config.style(revealed.get())>
            {children()}
        </div>
    }
}
