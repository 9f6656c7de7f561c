use leptos::prelude::*;
use leptos_meta::Link;

use crate::components::{
    ContactAnchor, DetailsQuote, Looping, Nav, Parallax, ProjectCard, ScrollTransform,
};
use crate::content::{GRAIN_TEXTURE, PORTFOLIO_EMAIL, PORTFOLIO_HERO, PORTFOLIO_PROJECTS};
use crate::hooks::use_scroll_progress;
use crate::models::{HoverConfig, LoopConfig};
use crate::motion::RangeMap;

const SERIF_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Instrument+Serif:ital@1&display=swap";

pub fn title_drift() -> RangeMap {
    RangeMap::linear((0.0, 0.2), (0.0, -100.0))
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let progress = use_scroll_progress();

    view! {
        <Link rel="stylesheet" href=SERIF_FONT/>
        <div class="bg-[#FAF9F6] text-[#1A1A1A] font-sans selection:bg-zinc-800 selection:text-white">
            <div
                class="fixed inset-0 pointer-events-none z-50 opacity-[0.03] mix-blend-multiply"
                style=format!("background-image: url('{GRAIN_TEXTURE}');")
            ></div>

            <Nav brand="Studio / Ar—ch" items=&["Menu"]/>

            <section class="relative min-h-screen flex flex-col justify-end p-8 md:p-20 overflow-hidden">
                <div class="absolute top-20 right-20 w-1/3 aspect-[3/4] z-0 opacity-20 md:opacity-100">
                    <img src=PORTFOLIO_HERO.src alt=PORTFOLIO_HERO.alt class="w-full h-full object-cover"/>
                </div>

                <Parallax
                    progress=progress
                    range=title_drift()
                    transform=ScrollTransform::TranslateX
                    class="relative z-10"
                >
                    <h1 class="text-[15vw] leading-[0.8] font-light tracking-tighter inline-block">
                        "SILENT " <br/>
                        <span class="italic ml-[10vw]" style="font-family: 'Instrument Serif', serif;">
                            "SPACE"
                        </span>
                    </h1>
                </Parallax>

                <div class="flex flex-col md:flex-row justify-between items-end mt-20 gap-8">
                    <p class="max-w-sm text-sm leading-relaxed text-zinc-500 uppercase tracking-wider">
                        "Specializing in luxury residential architecture and bespoke interior curation. "
                        "Every line has a purpose."
                    </p>
                    <div class="flex flex-col items-end">
                        <span class="text-[10px] uppercase tracking-[0.5em] mb-4">"Explore Work"</span>
                        <Looping animation=LoopConfig::scroll_cue() class="w-[1px] h-20 bg-black/20">
                            ""
                        </Looping>
                    </div>
                </div>
            </section>

            <section class="px-8 md:px-40 py-20">
                <div class="mb-40">
                    <span class="text-[10px] uppercase tracking-[0.5em] text-zinc-400 block mb-10">
                        "Selected Works 2024—2026"
                    </span>
                    {PORTFOLIO_PROJECTS
                        .iter()
                        .map(|entry| view! {
                            <ProjectCard entry=*entry rise=50.0 hover=HoverConfig::new(1.05, 1.5)/>
                        })
                        .collect_view()}
                </div>
            </section>

            <DetailsQuote attribution="— Ludwig Mies van der Rohe"/>

            <footer class="p-10 flex justify-between items-center text-[10px] uppercase tracking-[0.5em] opacity-40">
                <span>"EST. 2026"</span>
                <ContactAnchor
                    link=PORTFOLIO_EMAIL
                    label="Get in touch"
                    class="hover:opacity-100 transition-opacity underline decoration-zinc-300 underline-offset-8"
                />
                <span>"Based in NY"</span>
            </footer>
        </div>
    }
}
