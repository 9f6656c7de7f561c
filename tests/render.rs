#![cfg(feature = "ssr")]

use std::sync::Arc;

use hydration_context::SsrSharedContext;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_router::location::RequestUrl;

use studio_arch::components::{ContactAnchor, ProjectCard, Reveal};
use studio_arch::content::{KINETIC_EMAIL, KINETIC_PHONE};
use studio_arch::models::{ProjectEntry, RevealConfig};
use studio_arch::App;

fn render<V: RenderHtml + 'static>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html()).replace("<!>", "")
}

/// Server-renders the whole app for a request to `path`.
fn render_route(path: &str) -> String {
    let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
    owner
        .with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App/> }.to_html()
        })
        .replace("<!>", "")
}

#[test]
fn project_card_shows_title_and_category_once() {
    let entry = ProjectEntry::new(
        "Quiet Courtyard House",
        "Residential Oslo",
        "https://images.example.com/courtyard.jpg",
        0.2,
    );
    let html = render(move || view! { <ProjectCard entry=entry/> });

    assert_eq!(html.matches(">Quiet Courtyard House<").count(), 1, "{html}");
    assert_eq!(html.matches(">Residential Oslo<").count(), 1, "{html}");
    assert!(html.contains(r#"src="https://images.example.com/courtyard.jpg""#));
}

#[test]
fn project_card_starts_hidden() {
    let entry = ProjectEntry::new("Atrium", "Interior Rome", "https://images.example.com/a.jpg", 0.3);
    let html = render(move || view! { <ProjectCard entry=entry/> });

    assert!(html.contains("opacity: 0;"), "{html}");
    assert!(html.contains("translateY(60px)"), "{html}");
}

#[test]
fn reveal_wraps_children_with_hidden_style() {
    let html = render(|| {
        view! {
            <Reveal config=RevealConfig::fade() class="quote">
                <p>"details"</p>
            </Reveal>
        }
    });

    assert!(html.contains(r#"class="quote""#), "{html}");
    assert!(html.contains("<p>details</p>"), "{html}");
    assert!(html.contains("opacity 1.5s ease-out 0s"), "{html}");
}

#[test]
fn contact_links_are_literal() {
    let html = render(|| {
        view! {
            <ContactAnchor link=KINETIC_EMAIL/>
            <ContactAnchor link=KINETIC_PHONE/>
        }
    });

    assert!(html.contains(r#"href="mailto:contact@gautam.com""#), "{html}");
    assert!(html.contains(r#"href="tel:+919876543210""#), "{html}");
    assert!(html.contains(">contact@gautam.com<"), "{html}");
}

#[test]
fn contact_label_overrides_text() {
    let html = render(|| {
        view! { <ContactAnchor link=KINETIC_EMAIL label="Get in touch"/> }
    });

    assert!(html.contains(">Get in touch<"), "{html}");
    assert!(!html.contains(">contact@gautam.com<"), "{html}");
}

#[test]
fn home_route_renders_home_page() {
    let html = render_route("/");

    assert!(html.contains("clarity, and material honesty."), "{html}");
    assert!(html.contains(r#"href="mailto:studio@email.com""#), "{html}");
    assert!(!html.contains("404 - Page Not Found"), "{html}");
    assert!(!html.contains("pointer-follower"), "{html}");
}

#[test]
fn studio_route_renders_studio_page() {
    let html = render_route("/page1");

    assert!(html.contains("Calm, material-driven spaces"), "{html}");
    assert!(html.contains(r#"href="mailto:studio@email.com""#), "{html}");
    assert!(!html.contains("pointer-follower"), "{html}");
}

#[test]
fn portfolio_route_renders_portfolio_page() {
    let html = render_route("/page2");

    assert!(html.contains(r#"href="mailto:contact@studio.com""#), "{html}");
    assert!(html.contains(">Get in touch<"), "{html}");
    assert!(!html.contains("mailto:studio@email.com"), "{html}");
    assert!(!html.contains("pointer-follower"), "{html}");
}

#[test]
fn kinetic_route_has_follower_and_contact() {
    let html = render_route("/sample");

    assert!(html.contains(r#"class="pointer-follower"#), "{html}");
    assert!(html.contains("cursor: none !important"), "{html}");
    assert!(html.contains(r#"href="mailto:contact@gautam.com""#), "{html}");
    assert!(html.contains(r#"href="tel:+919876543210""#), "{html}");
    assert!(html.contains(">IG<"), "{html}");
}

#[test]
fn unknown_route_falls_back_to_not_found() {
    let html = render_route("/nope");

    assert!(html.contains("404 - Page Not Found"), "{html}");
    assert!(!html.contains("mailto:"), "{html}");
}
