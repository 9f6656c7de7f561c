use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/studio_arch.css"/>
        <Title text="Studio / Arch - Architecture & Interiors"/>
        <Meta name="description" content="Architecture and interiors shaped with restraint, clarity, and material honesty"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/page1") view=StudioPage/>
                    <Route path=path!("/page2") view=PortfolioPage/>
                    <Route path=path!("/sample") view=KineticPage/>
                </Routes>
            </main>
        </Router>
    }
}
