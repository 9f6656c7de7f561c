use leptos::prelude::*;

use crate::hooks::ScrollProgress;
use crate::motion::RangeMap;

/// Which transform a scroll-mapped value drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTransform {
    /// Horizontal offset in px
    TranslateX,
    /// Degrees
    Rotate,
    Scale,
}

impl ScrollTransform {
    pub fn style(self, value: f64) -> String {
        match self {
            ScrollTransform::TranslateX => format!("transform: translateX({value}px);"),
            ScrollTransform::Rotate => format!("transform: rotate({value}deg);"),
            ScrollTransform::Scale => format!("transform: scale({value});"),
        }
    }
}

#[component]
pub fn Parallax(
    progress: ScrollProgress,
    range: RangeMap,
    transform: ScrollTransform,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let value = progress.map(range);

    view! {
        <div class=class style=move || transform.style(value.get())>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_render_units() {
        assert_eq!(ScrollTransform::TranslateX.style(-120.0), "transform: translateX(-120px);");
        assert_eq!(ScrollTransform::Rotate.style(20.0), "transform: rotate(20deg);");
        assert_eq!(ScrollTransform::Scale.style(0.8), "transform: scale(0.8);");
    }
}
