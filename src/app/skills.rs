use leptos::prelude::*;

use crate::{
    content::{SkillCategory, SKILL_CATEGORIES},
    motion::{Hover, CARD, SKILL_BADGE},
};

use super::{
    reveal::{Reveal, SectionHeading},
    use_theme,
};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="scroll-mt-20 py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-6xl">
                <SectionHeading title="Skills" subtitle="Technologies I work with" />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <CategoryCard category=*category index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, index: usize) -> impl IntoView {
    let theme = use_theme();
    view! {
        <Reveal
            motion=CARD
            index=index
            class=format!("rounded-2xl p-6 shadow-lg {}", Hover::Lift.class())
        >
            <div class=move || {
                format!(
                    "h-full rounded-2xl p-6 {}",
                    theme.get().pick("bg-gray-900 border border-gray-800", "bg-white border border-gray-200"),
                )
            }>
                <h3 class="text-xl font-bold mb-6 text-cyan-400">{category.name}</h3>
                <ul class="grid grid-cols-2 gap-4">
                    {category
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <li>
                                    <Reveal
                                        motion=SKILL_BADGE
                                        index=i
                                        class=format!("flex items-center gap-2 {}", Hover::Grow.class())
                                    >
                                        <i class=format!("{} text-2xl", skill.icon)></i>
                                        <span>{skill.name}</span>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
