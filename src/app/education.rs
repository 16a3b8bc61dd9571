use leptos::prelude::*;

use crate::{
    content::{Education, EDUCATION},
    motion::TIMELINE_ITEM,
};

use super::{
    reveal::{Reveal, SectionHeading},
    use_theme,
};

#[component]
pub fn EducationTimeline() -> impl IntoView {
    view! {
        <section id="education" class="scroll-mt-20 py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-4xl">
                <SectionHeading title="Education" subtitle="Where I learned what I know" />
                <EducationList entries=EDUCATION />
            </div>
        </section>
    }
}

/// Entries are drawn top to bottom exactly as supplied.
#[component]
fn EducationList(entries: &'static [Education]) -> impl IntoView {
    let theme = use_theme();
    view! {
        <ol class="relative border-l-2 border-cyan-500/40 ml-4">
            {entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    view! {
                        <li class="mb-12 ml-8">
                            <span class="absolute -left-5 flex items-center justify-center w-10 h-10 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 text-white">
                                <span aria-hidden="true">{entry.icon}</span>
                            </span>
                            <Reveal motion=TIMELINE_ITEM index=i>
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-xl shadow-md {}",
                                        theme
                                            .get()
                                            .pick(
                                                "bg-gray-900 border border-gray-800",
                                                "bg-white border border-gray-200",
                                            ),
                                    )
                                }>
                                    <time class="inline-block mb-2 px-3 py-1 text-sm rounded-full bg-cyan-500/10 text-cyan-400">
                                        {entry.year}
                                    </time>
                                    <h3 class="text-xl font-semibold">{entry.degree}</h3>
                                    <p class="font-medium text-blue-400 mb-2">{entry.institution}</p>
                                    <p class=move || {
                                        theme.get().pick("text-gray-400", "text-gray-600")
                                    }>{entry.description}</p>
                                </div>
                            </Reveal>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::provide_theme;

    #[test]
    fn entries_render_in_supplied_order() {
        let owner = Owner::new();
        owner.set();
        provide_theme();

        let entries: &'static [Education] = &[
            Education {
                degree: "Second",
                institution: "B",
                year: "Ongoing",
                description: "",
                icon: "",
            },
            Education {
                degree: "First",
                institution: "A",
                year: "2019",
                description: "",
                icon: "",
            },
            Education {
                degree: "Third",
                institution: "C",
                year: "2023",
                description: "",
                icon: "",
            },
        ];
        let html = view! { <EducationList entries /> }.to_html();

        let second = html.find("Second").expect("Second rendered");
        let first = html.find("First").expect("First rendered");
        let third = html.find("Third").expect("Third rendered");
        assert!(second < first && first < third);
        assert!(html.contains("Ongoing"));
    }
}
