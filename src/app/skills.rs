use leptos::prelude::*;

use super::about::SectionBadge;
use crate::content::{SkillCategory, CERTIFICATIONS};

#[component]
pub fn Skills() -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::default());

    view! {
        <div id="skills" class="py-12 sm:py-20 px-4 sm:px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-10 sm:mb-16">
                    <SectionBadge text="Technical Expertise" />
                    <h2 class="text-2xl sm:text-4xl font-bold text-white mb-2 sm:mb-4">
                        "My " <span class="text-purple-500">"Technology"</span> " Stack"
                    </h2>
                    <p class="text-sm sm:text-base text-gray-400 max-w-2xl mx-auto">
                        "Skills I've mastered to build innovative solutions"
                    </p>
                </div>

                <div class="flex overflow-x-auto pb-2 sm:pb-0 sm:flex-wrap sm:justify-center gap-2 sm:gap-3 mb-6 sm:mb-10 hide-scrollbar">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let (head, tail) = category.split_label();
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == category {
                                            "flex-shrink-0 px-3 sm:px-5 py-1.5 sm:py-2 rounded-full text-xs sm:text-sm font-medium transition-all bg-gradient-to-r from-purple-600 to-blue-600 text-white"
                                        } else {
                                            "flex-shrink-0 px-3 sm:px-5 py-1.5 sm:py-2 rounded-full text-xs sm:text-sm font-medium transition-all bg-gray-800 text-gray-300 hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| set_active.set(category)
                                >
                                    {head}
                                    <span class="hidden sm:inline">" " {tail}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3 sm:gap-6 mb-12 sm:mb-20">
                    {move || {
                        active
                            .get()
                            .skills()
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="bg-gradient-to-br from-gray-900 to-black rounded-lg sm:rounded-xl border border-gray-800 p-3 sm:p-5 hover:border-purple-500/30 hover:-translate-y-1 transition-all">
                                        <div class="flex items-center gap-2 sm:gap-3 mb-2 sm:mb-4">
                                            <div class="bg-gray-800 p-1 sm:p-2 rounded-md sm:rounded-lg text-2xl">
                                                <i class=format!("{} colored", skill.icon) />
                                            </div>
                                            <h3 class="font-bold text-white text-sm sm:text-base">
                                                {skill.name}
                                            </h3>
                                        </div>
                                        <p class="text-gray-400 text-xs sm:text-sm mb-2 sm:mb-4">
                                            {skill.info}
                                        </p>
                                        <div class="w-full bg-gray-800 rounded-full h-1.5 sm:h-2 mb-1">
                                            <div
                                                class="bg-gradient-to-r from-purple-500 to-blue-500 h-full rounded-full"
                                                style=format!("width: {}%", skill.level)
                                            />
                                        </div>
                                        <p class="text-gray-500 text-xs text-right">
                                            {format!("{}%", skill.level)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="text-center mb-8 sm:mb-10">
                    <SectionBadge text="Certifications" blue=true />
                    <h2 class="text-xl sm:text-3xl font-bold text-white mb-2 sm:mb-4">
                        "Professional " <span class="text-blue-400">"Credentials"</span>
                    </h2>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="bg-gradient-to-br from-gray-900 to-black rounded-xl border border-gray-800 p-4 sm:p-6">
                                    <div class="flex justify-between items-start mb-3 sm:mb-4">
                                        <div>
                                            <h3 class="font-bold sm:text-xl text-white">{cert.title}</h3>
                                            <p class="text-gray-500 text-xs sm:text-sm">
                                                {format!("{} | {}", cert.issuer, cert.date)}
                                            </p>
                                        </div>
                                        <div class="bg-blue-900/30 px-2 sm:px-3 py-0.5 sm:py-1 rounded-full text-blue-400 text-xs sm:text-sm">
                                            "Verified"
                                        </div>
                                    </div>
                                    <p class="text-gray-400 text-sm sm:text-base mb-3 sm:mb-6">
                                        {cert.description}
                                    </p>
                                    <h4 class="text-white font-medium text-sm sm:text-base mb-1 sm:mb-2">
                                        "Skills:"
                                    </h4>
                                    <div class="flex flex-wrap gap-1 sm:gap-2">
                                        {cert
                                            .skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="px-2 sm:px-3 py-0.5 sm:py-1 text-xs sm:text-sm bg-gray-800 rounded-full text-gray-300">
                                                        {*s}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
