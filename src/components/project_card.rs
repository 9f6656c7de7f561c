use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::{HoverConfig, ProjectEntry, RevealConfig};

/// Clickable portfolio tile: slides in once, grayscale until hovered.
#[component]
pub fn ProjectCard(
    entry: ProjectEntry,
    /// Entry slide distance in pixels
    #[prop(default = 60.0)]
    rise: f64,
    #[prop(default = HoverConfig::new(1.04, 1.4))] hover: HoverConfig,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let reveal = RevealConfig::card(rise, entry.reveal_delay);

    view! {
        <Reveal config=reveal class="group mb-32">
            <div class="relative aspect-[16/9] overflow-hidden bg-zinc-200">
                <img
                    src=entry.image_url
                    alt=entry.title
                    class="h-full w-full object-cover grayscale group-hover:grayscale-0 transition-[filter] duration-700"
                    style=move || hover.style(hovered.get())
                    on:mouseenter=move |_| set_hovered.set(true)
                    on:mouseleave=move |_| set_hovered.set(false)
                />
            </div>

            <div class="mt-6 flex justify-between items-start border-t border-black/10 pt-4">
                <div>
                    <span class="text-[10px] uppercase tracking-[0.35em] text-zinc-400">
                        {entry.category}
                    </span>
                    <h3 class="text-2xl mt-1 font-light">{entry.title}</h3>
                </div>
                <div class="h-10 w-10 rounded-full border border-black/10 flex items-center justify-center group-hover:bg-black group-hover:text-white transition">
                    "↗"
                </div>
            </div>
        </Reveal>
    }
}

/// Works-grid tile for the kinetic page; the whole tile is a hover trigger.
#[component]
pub fn WorkTile(
    entry: ProjectEntry,
    #[prop(into)] layout: String,
    #[prop(into)] aspect: String,
) -> impl IntoView {
    view! {
        <Reveal
            config=RevealConfig::slide_up().with_delay(entry.reveal_delay)
            class=format!("{layout} group hover-trigger cursor-pointer")
        >
            <div class=format!("relative overflow-hidden mb-6 {aspect} bg-zinc-900")>
                <img
                    src=entry.image_url
                    alt=entry.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-1000"
                />
                {entry.badge.map(|badge| view! {
                    <div class="absolute top-4 left-4 bg-orange-500 text-black px-3 py-1 text-xs font-bold italic">
                        {badge}
                    </div>
                })}
            </div>
            <h3 class="text-4xl font-bold tracking-tighter uppercase italic">{entry.title}</h3>
            <p class="text-zinc-500 text-sm mt-2 tracking-widest uppercase">{entry.category}</p>
        </Reveal>
    }
}
