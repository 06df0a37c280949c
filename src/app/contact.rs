use leptos::{ev, prelude::*, task::spawn_local};
use leptos_use::{use_clipboard, UseClipboardReturn};

use super::{about::SectionBadge, tilt::TiltCard};
use crate::{
    contact::{
        copy, relay::ServerRelay, BrowserTimer, Clipboard, ClipboardError, ContactConfig,
        Feedback, Field, FormData, FormState, Presenter, SubmissionCoordinator, ToastKind,
    },
    content::{CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-900/50 border border-gray-700 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500 transition-all";

#[derive(Clone)]
struct BrowserClipboard<F> {
    supported: Signal<bool>,
    write: F,
}

impl<F: Fn(&str)> Clipboard for BrowserClipboard<F> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.supported.get_untracked() {
            return Err(ClipboardError::Unsupported);
        }
        (self.write)(text);
        Ok(())
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form_data = RwSignal::new(FormData::default());
    let feedback = RwSignal::new(Feedback::default());
    let form = FormState::new(form_data);
    let presenter = Presenter::new(feedback, BrowserTimer);
    let coordinator = StoredValue::new(SubmissionCoordinator::new(
        ContactConfig::from_build_env(),
        ServerRelay,
    ));

    let UseClipboardReturn {
        is_supported,
        copy: write,
        ..
    } = use_clipboard();
    let clipboard = BrowserClipboard {
        supported: is_supported,
        write,
    };
    let on_copy = move |text: &str, tag: &str| copy(&clipboard, &presenter, text, tag);

    let value_of = move |field: Field| move || form_data.with(|d| d.get(field).to_string());
    let on_input =
        move |field: Field| move |ev: ev::Event| form.set_field(field, event_target_value(&ev));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if presenter.submit_disabled() {
            return;
        }
        let coordinator = coordinator.get_value();
        spawn_local(async move {
            coordinator.submit(&form, &presenter).await;
        });
    };

    let sending = move || feedback.with(Feedback::submit_disabled);

    view! {
        <section id="contact" class="py-20 bg-gradient-to-b from-black via-gray-900 to-black px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <SectionBadge text="Get In Touch" />
                    <h2 class="text-4xl sm:text-5xl font-bold text-white mb-4">
                        "Let's " <span class="text-purple-500">"Collaborate"</span>
                    </h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Have a project in mind or want to discuss opportunities? I'd love to hear from you."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <TiltCard>
                        <div class="bg-gradient-to-br from-gray-900 to-black rounded-xl border border-gray-800 p-8 h-full">
                            <h3 class="text-2xl font-semibold text-white mb-6">"Send Me a Message"</h3>
                            <form on:submit=on_submit class="space-y-4">
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    <input
                                        type="text"
                                        name=Field::Name.name()
                                        aria-label=Field::Name.label()
                                        placeholder="Your Name"
                                        class=INPUT_CLASS
                                        required=true
                                        prop:value=value_of(Field::Name)
                                        on:input=on_input(Field::Name)
                                    />
                                    <input
                                        type="email"
                                        name=Field::Email.name()
                                        aria-label=Field::Email.label()
                                        placeholder="Your Email"
                                        class=INPUT_CLASS
                                        required=true
                                        prop:value=value_of(Field::Email)
                                        on:input=on_input(Field::Email)
                                    />
                                </div>
                                <input
                                    type="tel"
                                    name=Field::Phone.name()
                                    aria-label=Field::Phone.label()
                                    placeholder="Phone Number (Optional)"
                                    class=INPUT_CLASS
                                    prop:value=value_of(Field::Phone)
                                    on:input=on_input(Field::Phone)
                                />
                                <textarea
                                    name=Field::Message.name()
                                    aria-label=Field::Message.label()
                                    placeholder="Tell me about your project..."
                                    rows=4
                                    class=INPUT_CLASS
                                    required=true
                                    prop:value=value_of(Field::Message)
                                    on:input=on_input(Field::Message)
                                ></textarea>
                                <button
                                    type="submit"
                                    disabled=sending
                                    class=move || {
                                        if sending() {
                                            "w-full py-3 px-6 rounded-lg text-white font-medium flex items-center justify-center gap-2 transition-all bg-gray-700 cursor-not-allowed"
                                        } else {
                                            "w-full py-3 px-6 rounded-lg text-white font-medium flex items-center justify-center gap-2 transition-all hover:shadow-lg bg-gradient-to-r from-purple-600 to-blue-600"
                                        }
                                    }
                                >
                                    <Show when=sending>
                                        <span class="animate-spin -ml-1 mr-2 h-4 w-4 rounded-full border-2 border-white/25 border-t-white" />
                                    </Show>
                                    {move || feedback.with(|f| f.submit_label())}
                                </button>
                            </form>
                        </div>
                    </TiltCard>

                    <TiltCard>
                        <div class="bg-gradient-to-br from-gray-900 to-black rounded-xl border border-gray-800 p-8 h-full">
                            <h3 class="text-2xl font-semibold text-white mb-6">"Contact Information"</h3>
                            <div class="space-y-4 mb-8">
                                {[("email", "Email", CONTACT_EMAIL), ("phone", "Phone", CONTACT_PHONE)]
                                    .into_iter()
                                    .map(|(tag, label, value)| {
                                        let on_copy = on_copy.clone();
                                        view! {
                                            <div
                                                on:click=move |_| on_copy(value, tag)
                                                class="p-4 rounded-lg bg-gray-800/50 border border-gray-700 flex items-center justify-between cursor-pointer group hover:translate-x-1 transition-all"
                                            >
                                                <div>
                                                    <p class="text-sm text-gray-400">{label}</p>
                                                    <p class="text-white">{value}</p>
                                                </div>
                                                {move || {
                                                    let (class, glyph) = if feedback.with(|f| f.is_copied(tag)) {
                                                        ("text-green-500", "✓")
                                                    } else {
                                                        ("text-gray-500 group-hover:text-purple-500", "⧉")
                                                    };
                                                    view! { <span class=class>{glyph}</span> }
                                                }}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <h4 class="text-lg font-medium text-white mb-4">"Connect With Me"</h4>
                            <div class="flex flex-wrap gap-3">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-4 py-2.5 rounded-lg border border-gray-700 hover:-translate-y-1 transition-all"
                                            >
                                                <i class=link.icon />
                                                <span class="text-sm text-white">{link.label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </TiltCard>
                </div>
            </div>

            {move || {
                feedback
                    .with(|f| f.visible_toast().cloned())
                    .map(|toast| {
                        let (class, icon) = match toast.kind {
                            ToastKind::Success => ("bg-gray-900 border-green-500/30", "✓"),
                            ToastKind::Error => ("bg-red-900/80 border-red-500/30", "✗"),
                        };
                        view! {
                            <div
                                role="status"
                                class=format!(
                                    "fixed bottom-4 right-4 px-6 py-3 rounded-lg shadow-xl z-50 flex items-center space-x-2 border text-white toast-enter {class}",
                                )
                            >
                                <span>{icon}</span>
                                <span>{toast.message}</span>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
