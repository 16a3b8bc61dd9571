use leptos::prelude::*;

use crate::{
    content::{
        OWNER_NAME, OWNER_PITCH, OWNER_ROLE, PORTRAIT, RESUME_FILE_NAME, RESUME_PATH,
        SOCIAL_LINKS,
    },
    motion::{Hover, HERO_IMAGE, HERO_TEXT},
};

use super::{navbar::scroll_to, reveal::Reveal, use_theme};

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section
            id="home"
            class="scroll-mt-20 min-h-screen flex items-center pt-20 px-4 sm:px-6 lg:px-8"
        >
            <div class="mx-auto max-w-6xl w-full grid md:grid-cols-2 gap-12 items-center">
                <Reveal motion=HERO_TEXT class="order-2 md:order-1">
                    <p class="text-cyan-400 font-medium mb-2">"Hello, I'm"</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold mb-4">{OWNER_NAME}</h1>
                    <h2 class=move || {
                        format!(
                            "text-2xl md:text-3xl font-semibold mb-6 {}",
                            theme.get().pick("text-gray-300", "text-gray-700"),
                        )
                    }>{OWNER_ROLE}</h2>
                    <p class=move || {
                        format!(
                            "max-w-xl mb-8 leading-relaxed {}",
                            theme.get().pick("text-gray-400", "text-gray-600"),
                        )
                    }>
                        {OWNER_PITCH}
                    </p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        <a
                            href=RESUME_PATH
                            download=RESUME_FILE_NAME
                            class=format!(
                                "px-6 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-cyan-500 to-blue-600 {}",
                                Hover::Lift.class(),
                            )
                        >
                            "Download Resume"
                        </a>
                        <button
                            class=format!(
                                "px-6 py-3 rounded-lg font-semibold border-2 border-cyan-500 text-cyan-400 {}",
                                Hover::Lift.class(),
                            )
                            on:click=move |_| scroll_to("contact")
                        >
                            "Contact Me"
                        </button>
                    </div>
                    <div class="flex gap-4 text-3xl">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label
                                        class=format!("hover:text-cyan-400 {}", Hover::Grow.class())
                                    >
                                        <i class=s.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal motion=HERO_IMAGE class="order-1 md:order-2 flex justify-center">
                    <div class="relative">
                        <div class="absolute -inset-2 rounded-full bg-gradient-to-r from-cyan-400 to-blue-600 blur-lg opacity-60 animate-pulse"></div>
                        <img
                            src=PORTRAIT
                            alt=OWNER_NAME
                            class="relative w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-cyan-400"
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
