use leptos::prelude::*;
use leptos_use::{
    use_mouse, use_window_size, UseMouseReturn, UseMouseSourceType, UseWindowSizeReturn,
};

use crate::{
    content::{HERO_ROLES, HERO_TAGLINE, HERO_TAGS, OWNER_NAME},
    motion::spotlight,
};

#[component]
pub fn Hero() -> impl IntoView {
    let UseMouseReturn {
        x, y, source_type, ..
    } = use_mouse();
    let UseWindowSizeReturn { width, height, .. } = use_window_size();

    let background = move || {
        let pointer = (!matches!(source_type.get(), UseMouseSourceType::Unset))
            .then(|| (x.get(), y.get()));
        let (bg_x, bg_y) = spotlight(pointer, width.get(), height.get());
        format!(
            "background: radial-gradient(circle at {bg_x:.1}% {bg_y:.1}%, rgba(70, 20, 120, 0.15), rgba(0, 0, 0, 0.95))"
        )
    };

    view! {
        <section
            id="hero"
            class="relative flex items-center justify-center min-h-screen overflow-hidden mt-4"
            style=background
        >
            <div class="absolute inset-0">
                <div class="absolute top-1/4 left-1/4 w-80 h-80 rounded-full bg-purple-800/10 blur-[100px] animate-float-slow" />
                <div class="absolute bottom-1/3 right-1/4 w-64 h-64 rounded-full bg-blue-700/10 blur-[80px] animate-float-medium" />
                <div class="absolute top-1/3 right-1/3 w-48 h-48 rounded-full bg-purple-500/15 blur-[60px] animate-float-fast" />
            </div>

            <div class="relative z-10 text-center px-4 w-full max-w-4xl mt-5">
                <div class="mb-8 fade-up">
                    <span class="inline-block px-4 py-1.5 text-xs font-mono text-purple-400 rounded-full bg-purple-900/30 border border-purple-500/20 mb-4">
                        {HERO_ROLES}
                    </span>
                </div>
                <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold tracking-tight mb-6 fade-up">
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-blue-400">
                        {OWNER_NAME}
                    </span>
                </h1>
                <p class="text-lg text-gray-300 mb-10 max-w-2xl mx-auto leading-relaxed fade-in">
                    {HERO_TAGLINE}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4 fade-in">
                    <a
                        href="#skills"
                        class="relative group px-6 py-3.5 rounded-xl bg-gradient-to-r from-purple-600 to-blue-600 text-white font-medium hover:shadow-xl transition-all"
                    >
                        <span class="relative z-10 flex items-center gap-2">"View Work →"</span>
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3.5 rounded-xl border border-white/10 text-white font-medium hover:bg-white/5 transition-all"
                    >
                        "Let's Talk"
                    </a>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mt-12 fade-in">
                    {HERO_TAGS
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs font-mono rounded-full bg-white/5 text-white/80 border border-white/5">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 flex flex-col items-center fade-up">
                <div class="w-px h-16 bg-gradient-to-t from-purple-500/30 to-transparent" />
                <span class="mt-2 text-xs text-white/50">"Explore more"</span>
            </div>
        </section>
    }
}
