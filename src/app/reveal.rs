use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Motion, SECTION_HEADING};

/// Plays `motion` the first time the wrapped content scrolls into view.
#[component]
pub fn Reveal(
    motion: Motion,
    /// Position within a list, used for staggering.
    #[prop(optional)]
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });
    let motion = motion.staggered(index);

    view! {
        <div node_ref=target class=class style=move || motion.style(revealed.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let theme = super::use_theme();
    view! {
        <Reveal motion=SECTION_HEADING class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-3">
                <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <p class=move || theme.get().pick("text-gray-400", "text-gray-600")>{subtitle}</p>
            <div class="mx-auto mt-4 h-1 w-20 rounded-full bg-gradient-to-r from-cyan-400 to-blue-500"></div>
        </Reveal>
    }
}
