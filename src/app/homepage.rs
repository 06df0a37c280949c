use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, footer::Footer, hero::Hero, skills::Skills,
    timeline::Timeline,
};
use crate::content::LOADING_DELAY;

#[component]
pub fn HomePage() -> impl IntoView {
    let (show_content, set_show_content) = signal(false);

    // effects only run in the browser, so the server renders the overlay
    Effect::new(move |_| {
        set_timeout(move || set_show_content.set(true), LOADING_DELAY);
    });

    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen overflow-hidden">
            <div class="fixed inset-0 z-0 pointer-events-none grid-backdrop"></div>
            <main class="relative z-10">
                <Show when=move || !show_content.get()>
                    <div class="fixed inset-0 flex items-center justify-center bg-black z-50">
                        <div class="text-white text-2xl animate-pulse">"Loading..."</div>
                    </div>
                </Show>
                <div class=move || {
                    if show_content.get() {
                        "transition-opacity duration-1000 opacity-100"
                    } else {
                        "transition-opacity duration-1000 opacity-0"
                    }
                }>
                    <Hero />
                    <section class="container mx-auto py-12 relative z-20">
                        <About />
                    </section>
                    <div class="relative z-20">
                        <div class="bg-black/80 backdrop-blur-sm">
                            <Skills />
                        </div>
                        <Timeline />
                        <Contact />
                        <Footer />
                    </div>
                </div>
            </main>
        </div>
    }
}
