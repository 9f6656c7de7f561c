use leptos::prelude::*;
use leptos_meta::Link;

use crate::components::{
    ContactAnchor, Looping, Nav, NavStyle, Parallax, PointerFollower, ScrollTransform, WorkTile,
};
use crate::content::{
    marquee_text, KINETIC_EMAIL, KINETIC_HERO, KINETIC_PHONE, KINETIC_SOCIALS, KINETIC_WORKS,
    MARQUEE_WORDS,
};
use crate::hooks::use_scroll_progress;
use crate::models::LoopConfig;
use crate::motion::RangeMap;

const GROTESK_FONT: &str =
    "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;700&display=swap";

const PAGE_CSS: &str = "body { margin: 0; font-family: 'Space Grotesk', sans-serif; background-color: #0f0f0f; } \
    ::-webkit-scrollbar { width: 5px; } \
    ::-webkit-scrollbar-track { background: #0f0f0f; } \
    ::-webkit-scrollbar-thumb { background: #ff5e00; }";

/// Image window turns up to 20 degrees across the whole page.
pub fn window_tilt() -> RangeMap {
    RangeMap::linear((0.0, 1.0), (0.0, 20.0))
}

/// Headline shrinks to 80% over the first fifth.
pub fn headline_shrink() -> RangeMap {
    RangeMap::linear((0.0, 0.2), (1.0, 0.8))
}

#[component]
pub fn KineticPage() -> impl IntoView {
    let progress = use_scroll_progress();
    let [first, second] = KINETIC_WORKS;

    view! {
        <Link rel="stylesheet" href=GROTESK_FONT/>
        <style>{PAGE_CSS}</style>

        <div class="bg-[#0f0f0f] text-[#e0e0e0] font-sans overflow-x-hidden selection:bg-orange-500">
            <PointerFollower/>

            <Nav brand="ARCH.STUDIO" items=&["Work", "About", "Contact"] variant=NavStyle::Kinetic/>

            <section class="relative h-[200vh] w-full">
                <div class="sticky top-0 h-screen w-full flex flex-col md:flex-row overflow-hidden">
                    <div class="w-full md:w-1/2 h-full flex items-center justify-center p-12 border-r border-white/10">
                        <Parallax progress=progress range=headline_shrink() transform=ScrollTransform::Scale>
                            <h1 class="text-[12vw] md:text-[8vw] font-black leading-none tracking-tighter uppercase italic">
                                "Raw" <br/>
                                <span class="text-orange-500 not-italic">"Form"</span> <br/>
                                "2026"
                            </h1>
                        </Parallax>
                    </div>

                    <div class="w-full md:w-1/2 h-full relative p-12 flex items-center justify-center">
                        <Parallax
                            progress=progress
                            range=window_tilt()
                            transform=ScrollTransform::Rotate
                            class="relative w-full aspect-[3/4] md:w-[70%] bg-zinc-800 overflow-hidden rounded-sm shadow-2xl"
                        >
                            <img
                                src=KINETIC_HERO.src
                                alt=KINETIC_HERO.alt
                                class="w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-700"
                            />
                        </Parallax>

                        <div class="absolute bottom-20 left-10 max-w-xs">
                            <p class="text-xs uppercase tracking-widest text-zinc-500 leading-relaxed">
                                "Brutalism meets modern warmth." <br/>
                                "We design spaces that demand presence."
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-20 border-y border-white/10 overflow-hidden whitespace-nowrap bg-white text-black">
                <Looping animation=LoopConfig::marquee() class="text-[10vw] font-black uppercase tracking-tighter">
                    {marquee_text(MARQUEE_WORDS)}
                </Looping>
            </section>

            <section class="py-40 px-8 max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-12 gap-12">
                    <WorkTile entry=first layout="md:col-span-7" aspect="aspect-video"/>
                    <WorkTile entry=second layout="md:col-span-4 md:col-start-9 md:mt-40" aspect="aspect-[4/5]"/>
                </div>
            </section>

            <footer class="bg-orange-500 text-black py-40 px-8">
                <div class="max-w-7xl mx-auto flex flex-col items-center text-center">
                    <h2 class="text-[12vw] font-black leading-none uppercase tracking-tighter italic mb-20 hover-trigger">
                        "Let's" <br/> "Build."
                    </h2>
                    <div class="w-full flex flex-col md:flex-row justify-between items-end gap-10">
                        <div class="text-left flex flex-col gap-2">
                            <p class="text-xs uppercase tracking-[0.3em] font-bold mb-4">"Contact Studio"</p>
                            <ContactAnchor link=KINETIC_EMAIL class="text-4xl font-light hover-trigger"/>
                            <ContactAnchor link=KINETIC_PHONE class="text-xl font-light hover-trigger"/>
                        </div>
                        <div class="text-right flex gap-8 font-black uppercase tracking-widest italic">
                            {KINETIC_SOCIALS
                                .iter()
                                .map(|social| view! { <span class="hover-trigger">{*social}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_transforms() {
        assert_eq!(window_tilt().map(0.5), 10.0);
        assert_eq!(window_tilt().map(1.0), 20.0);
        assert_eq!(headline_shrink().map(0.0), 1.0);
        assert_eq!(headline_shrink().map(0.5), 0.8);
    }
}
