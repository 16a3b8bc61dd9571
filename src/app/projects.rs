use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    motion::{Hover, CARD},
};

use super::{
    reveal::{Reveal, SectionHeading},
    use_theme,
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="scroll-mt-20 py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-6xl">
                <SectionHeading title="Projects" subtitle="Things I have built recently" />
                <ProjectGrid projects=PROJECTS />
            </div>
        </section>
    }
}

#[component]
fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .iter()
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let theme = use_theme();
    let (details_open, set_details_open) = signal(false);
    let muted = move || theme.get().pick("text-gray-400", "text-gray-600");

    view! {
        <Reveal motion=CARD index=index class=Hover::Lift.class()>
            <article class=move || {
                format!(
                    "h-full flex flex-col rounded-2xl overflow-hidden shadow-lg {} {}",
                    theme.get().pick("bg-gray-900 border border-gray-800", "bg-white border border-gray-200"),
                    Hover::Glow.class(),
                )
            }>
                <div class="overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-48 object-cover transition-transform duration-500 hover:scale-105"
                    />
                </div>
                <div class="flex flex-col flex-1 p-6">
                    <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                    <p class=move || format!("text-sm mb-4 {}", muted())>{project.description}</p>
                    <ul class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tech_stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <li class="px-2 py-1 text-xs rounded-md bg-cyan-500/10 text-cyan-400">
                                        {*tech}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Show when=move || details_open.get()>
                        <div class=move || format!("text-sm space-y-2 mb-4 {}", muted())>
                            <p>
                                <span class="font-semibold text-cyan-400">"Challenges: "</span>
                                {project.challenges}
                            </p>
                            <p>
                                <span class="font-semibold text-cyan-400">"Future plans: "</span>
                                {project.future_plans}
                            </p>
                        </div>
                    </Show>
                    <div class="mt-auto flex flex-wrap items-center gap-3">
                        <a
                            href=project.live_link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-lg text-sm font-semibold text-white bg-gradient-to-r from-cyan-500 to-blue-600"
                        >
                            "Live Demo"
                        </a>
                        {project
                            .client_repo
                            .map(|href| view! { <RepoLink href label="Client" /> })}
                        {project
                            .server_repo
                            .map(|href| view! { <RepoLink href label="Server" /> })}
                        <button
                            class="ml-auto text-sm text-cyan-400 hover:underline"
                            aria-expanded=move || details_open.get().to_string()
                            on:click=move |_| set_details_open.update(|o| *o = !*o)
                        >
                            {move || if details_open.get() { "Hide details" } else { "Details" }}
                        </button>
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
fn RepoLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-1 px-3 py-2 rounded-lg text-sm border border-cyan-500/40 hover:bg-cyan-500/10"
        >
            <i class="devicon-github-original"></i>
            {label}
        </a>
    }
}
