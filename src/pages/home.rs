use leptos::prelude::*;

use crate::components::{
    CallToAction, DetailsQuote, Nav, Parallax, ProjectCard, ScrollTransform, Statement,
};
use crate::content::{CLOSING_SPACE, HOME_HERO, HOME_PROJECTS, STUDIO_EMAIL};
use crate::hooks::use_scroll_progress;
use crate::models::RevealConfig;
use crate::motion::RangeMap;

/// Hero copy drifts left over the first quarter of the page.
pub fn hero_drift() -> RangeMap {
    RangeMap::linear((0.0, 0.25), (0.0, -120.0))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let progress = use_scroll_progress();

    view! {
        <div class="bg-[#EEEDE9] text-[#111] overflow-hidden font-sans">
            <Nav brand="Studio / Arch" items=&["Menu"]/>

            <section class="min-h-screen grid grid-cols-1 md:grid-cols-12">
                <div class="md:col-span-7 relative h-[70vh] md:h-auto">
                    <img src=HOME_HERO.src alt=HOME_HERO.alt class="absolute inset-0 h-full w-full object-cover"/>
                </div>

                <Parallax
                    progress=progress
                    range=hero_drift()
                    transform=ScrollTransform::TranslateX
                    class="md:col-span-5 flex flex-col justify-center px-8 md:px-16"
                >
                    <h1 class="font-serif text-[clamp(3rem,6vw,5rem)] leading-[1.05]">
                        "Silent" <br/> "Space"
                    </h1>
                    <p class="mt-6 text-lg text-[#444] max-w-md">
                        "Architecture and interiors shaped with restraint, "
                        "clarity, and material honesty."
                    </p>
                </Parallax>
            </section>

            <Statement
                config=RevealConfig::settle()
                body="Space, light, and structure are treated as one system — never decoration, always intention."
            />

            <section class="px-8 md:px-40 py-32">
                <span class="text-[10px] uppercase tracking-[0.5em] text-zinc-400 block mb-20">
                    "Selected Works"
                </span>
                {HOME_PROJECTS
                    .iter()
                    .map(|entry| view! { <ProjectCard entry=*entry/> })
                    .collect_view()}
            </section>

            <DetailsQuote attribution="— Mies van der Rohe"/>

            <CallToAction picture=CLOSING_SPACE config=RevealConfig::settle() contact=STUDIO_EMAIL/>

            <footer class="p-10 flex justify-between items-center text-[10px] uppercase tracking-[0.5em] opacity-40">
                <span>"EST. 2026"</span>
                <span>"New York"</span>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_drift_matches_layout() {
        let drift = hero_drift();
        assert_eq!(drift.map(0.0), 0.0);
        assert_eq!(drift.map(0.25), -120.0);
        assert_eq!(drift.map(0.9), -120.0);
    }
}
