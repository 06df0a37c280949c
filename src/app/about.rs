use leptos::prelude::*;

use crate::content::ABOUT;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div id="about" class="max-w-4xl mx-auto px-4">
            <SectionBadge text="About Me" />
            <h2 class="text-3xl sm:text-4xl font-bold text-white mb-6">
                "A bit about " <span class="text-purple-500">"me"</span>
            </h2>
            {ABOUT
                .into_iter()
                .map(|p| view! { <p class="text-base text-gray-300 mb-4 leading-relaxed">{p}</p> })
                .collect_view()}
        </div>
    }
}

/// Pill shown above each section heading.
#[component]
pub fn SectionBadge(text: &'static str, #[prop(optional)] blue: bool) -> impl IntoView {
    let (dot, label) = if blue {
        ("bg-blue-500", "text-blue-400")
    } else {
        ("bg-purple-500", "text-purple-400")
    };
    view! {
        <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-gray-800 mb-4">
            <div class=format!("h-2 w-2 rounded-full {dot} animate-pulse") />
            <span class=format!("text-sm font-medium {label}")>{text}</span>
        </div>
    }
}
