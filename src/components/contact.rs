use leptos::prelude::*;

use crate::models::ContactLink;

/// `mailto:`/`tel:` anchor showing the literal address or number.
#[component]
pub fn ContactAnchor(
    link: ContactLink,
    #[prop(optional, into)] class: String,
    /// Visible text; defaults to the address itself
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <a href=link.href() class=class>
            {label.unwrap_or(link.text())}
        </a>
    }
}
