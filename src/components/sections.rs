//! Content blocks shared between page variants.

use leptos::prelude::*;

use crate::components::{ContactAnchor, Reveal};
use crate::models::{ContactLink, LoopConfig, Picture, RevealConfig};

/// Dark two-column "Design that feels inevitable" block
#[component]
pub fn Statement(config: RevealConfig, body: &'static str) -> impl IntoView {
    view! {
        <section class="py-32 bg-[#111] text-[#EEEDE9]">
            <Reveal config=config class="max-w-6xl mx-auto px-6 grid grid-cols-1 md:grid-cols-2 gap-16">
                <h2 class="font-serif text-4xl leading-tight">
                    "Design that feels" <br/> "inevitable"
                </h2>
                <p class="text-lg text-gray-400 leading-relaxed">{body}</p>
            </Reveal>
        </section>
    }
}

/// Mies van der Rohe quote on black
#[component]
pub fn DetailsQuote(attribution: &'static str) -> impl IntoView {
    view! {
        <section class="bg-black text-white py-40 px-8 text-center">
            <Reveal config=RevealConfig::fade() class="max-w-3xl mx-auto">
                <h2 class="text-4xl md:text-6xl font-extralight leading-tight mb-10">
                    "“God is in the "
                    <span class="italic font-serif text-zinc-400">"details"</span>
                    ".”"
                </h2>
                <p class="text-zinc-500 uppercase tracking-[0.3em] text-xs">{attribution}</p>
            </Reveal>
        </section>
    }
}

/// Full-bleed closing image with the studio's email over it
#[component]
pub fn CallToAction(picture: Picture, config: RevealConfig, contact: ContactLink) -> impl IntoView {
    view! {
        <section class="relative h-[80vh]">
            <img src=picture.src alt=picture.alt class="absolute inset-0 h-full w-full object-cover"/>
            <div class="absolute inset-0 bg-black/40"></div>

            <Reveal
                config=config
                class="absolute inset-0 flex flex-col items-center justify-center text-white text-center px-6"
            >
                <h2 class="font-serif text-4xl mb-6">"Let’s Build" <br/> "Something Timeless"</h2>
                <ContactAnchor
                    link=contact
                    class="border border-white px-6 py-3 text-sm tracking-widest hover:bg-white hover:text-black transition"
                />
            </Reveal>
        </section>
    }
}

/// Children animated forever by a keyframe loop
#[component]
pub fn Looping(
    animation: LoopConfig,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <style>{animation.keyframes_css()}</style>
        <div class=class style=animation.animation_css()>
            {children()}
        </div>
    }
}
