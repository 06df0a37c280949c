use chrono::DateTime;
use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default();

    view! {
        <footer class="border-t border-gray-800 py-8 px-4 text-center text-sm text-gray-500">
            <div class="flex justify-center gap-4 mb-3">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-white text-xl"
                                aria-label=link.label
                            >
                                <i class=link.icon />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p>{format!("© {OWNER_NAME}. Thanks for stopping by.")}</p>
            <p class="mt-1">"Last built " {built}</p>
        </footer>
    }
}
