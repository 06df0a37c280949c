use leptos::prelude::*;

use super::about::SectionBadge;
use crate::content::TIMELINE;

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section id="timeline" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12">
                    <SectionBadge text="Journey" />
                    <h2 class="text-3xl sm:text-4xl font-bold text-white">
                        "Milestones " <span class="text-purple-500">"so far"</span>
                    </h2>
                </div>
                <ol class="relative border-l border-gray-700 ml-4">
                    {TIMELINE
                        .iter()
                        .map(|m| {
                            view! {
                                <li class="mb-10 ml-6">
                                    <span class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-purple-500 border border-black" />
                                    <time class="text-sm font-mono text-purple-400">{m.period}</time>
                                    <h3 class="text-lg font-semibold text-white">{m.title}</h3>
                                    <p class="text-gray-400">{m.detail}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
