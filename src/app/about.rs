use leptos::prelude::*;

use crate::{
    content::OWNER_NAME,
    motion::{Hover, Motion, Transition, CARD},
};

use super::{
    reveal::{Reveal, SectionHeading},
    use_theme,
};

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "What I enjoy:",
        "Building full-stack applications with clean, efficient code and intuitive user interfaces. I particularly love working with React and Node.js.",
    ),
    (
        "Beyond coding:",
        "When I'm not programming, you can find me playing cricket, reading tech blogs, or exploring new hiking trails. I'm also passionate about photography and graphic design.",
    ),
    (
        "My approach:",
        "I believe in continuous learning and staying updated with industry trends. I enjoy collaborating with others and contributing to open-source projects.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let text = move || theme.get().pick("text-gray-300", "text-gray-700");
    view! {
        <section id="about" class="scroll-mt-20 py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <SectionHeading title="About Me" subtitle="A little about my journey" />
                <Reveal
                    motion=Motion::new(Transition::SlideRight)
                    class="space-y-4 leading-relaxed mb-10"
                >
                    <p class=move || format!("text-lg {}", text())>
                        "I'm "
                        <span class="font-semibold text-cyan-400">{OWNER_NAME}</span>
                        ", a passionate developer from Bangladesh."
                    </p>
                    <p class=text>
                        "My journey in web development began in 2018 when I built my first website using HTML and CSS. Since then, I've evolved into a full-stack developer with expertise in modern JavaScript frameworks and cloud technologies."
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-6">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, desc))| {
                            view! {
                                <Reveal
                                    motion=CARD
                                    index=i
                                    class=format!(
                                        "p-5 rounded-xl border border-cyan-500/30 {}",
                                        Hover::Glow.class(),
                                    )
                                >
                                    <h3 class="text-lg font-semibold text-cyan-400 mb-2">{*title}</h3>
                                    <p class=text>{*desc}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
