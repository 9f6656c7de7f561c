use leptos::prelude::*;

use crate::components::{CallToAction, Reveal, Statement};
use crate::content::{STUDIO_CLOSING, STUDIO_EMAIL, STUDIO_HERO, STUDIO_LIVING, STUDIO_MOSAIC};
use crate::models::RevealConfig;

#[component]
pub fn StudioPage() -> impl IntoView {
    let reveal = RevealConfig::gentle();

    view! {
        <div class="bg-[#EEEDE9] text-[#111] overflow-hidden">
            <section class="min-h-screen grid grid-cols-1 md:grid-cols-12">
                <div class="md:col-span-7 relative h-[70vh] md:h-auto">
                    <img src=STUDIO_HERO.src alt=STUDIO_HERO.alt class="absolute inset-0 h-full w-full object-cover"/>
                </div>

                <Reveal config=reveal class="md:col-span-5 flex flex-col justify-center px-8 md:px-16">
                    <h1 class="font-serif text-[clamp(3rem,5vw,4.5rem)] leading-tight">
                        "Architecture" <br/> "& Interior Design"
                    </h1>
                    <p class="mt-6 text-lg text-[#444]">
                        "Calm, material-driven spaces designed with clarity, restraint, and purpose."
                    </p>
                </Reveal>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-12">
                {STUDIO_MOSAIC
                    .iter()
                    .map(|picture| view! {
                        <div class="md:col-span-4 relative h-[420px]">
                            <img src=picture.src alt=picture.alt class="absolute inset-0 h-full w-full object-cover"/>
                        </div>
                    })
                    .collect_view()}
            </section>

            <Statement
                config=reveal
                body="We approach architecture and interiors as one continuous process — where space, light, and material work together quietly."
            />

            <section class="py-40 bg-[#EEEDE9]">
                <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-12 gap-12 items-center">
                    <Reveal config=reveal class="md:col-span-5 relative h-[520px]">
                        <img
                            src=STUDIO_LIVING.src
                            alt=STUDIO_LIVING.alt
                            class="absolute inset-0 h-full w-full object-cover"
                        />
                    </Reveal>

                    <Reveal config=reveal class="md:col-span-6 md:col-start-7">
                        <h3 class="font-serif text-3xl mb-6">"Interior & Execution"</h3>
                        <p class="text-[#444] text-lg leading-relaxed">
                            "From structure to finishes, every decision is considered as part of a whole — not as isolated elements."
                        </p>
                    </Reveal>
                </div>
            </section>

            <CallToAction picture=STUDIO_CLOSING config=reveal contact=STUDIO_EMAIL/>
        </div>
    }
}
