use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed header styling per page family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavStyle {
    /// Difference-blended labels over imagery
    Overlay,
    /// Bold brand plus hover-trigger labels for the pointer follower
    Kinetic,
}

#[component]
pub fn Nav(
    brand: &'static str,
    items: &'static [&'static str],
    #[prop(default = NavStyle::Overlay)] variant: NavStyle,
) -> impl IntoView {
    match variant {
        NavStyle::Overlay => view! {
            <nav class="fixed top-0 w-full z-40 flex justify-between p-8 mix-blend-difference text-white">
                <A href="/" attr:class="font-medium tracking-[0.4em] text-xs uppercase">{brand}</A>
                <div class="flex gap-8">
                    {items
                        .iter()
                        .map(|item| view! {
                            <span class="font-medium tracking-[0.4em] text-xs uppercase">{*item}</span>
                        })
                        .collect_view()}
                </div>
            </nav>
        }
        .into_any(),
        NavStyle::Kinetic => view! {
            <nav class="fixed top-0 w-full z-50 flex justify-between p-8 items-center pointer-events-none">
                <A
                    href="/"
                    attr:class="text-xl font-bold tracking-tighter pointer-events-auto hover-trigger cursor-pointer"
                >
                    {brand}
                </A>
                <div class="flex gap-12 text-[10px] tracking-[0.3em] font-medium pointer-events-auto uppercase">
                    {items
                        .iter()
                        .map(|item| view! {
                            <span class="hover-trigger cursor-pointer hover:text-orange-500 transition">
                                {*item}
                            </span>
                        })
                        .collect_view()}
                </div>
            </nav>
        }
        .into_any(),
    }
}
