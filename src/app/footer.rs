use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};
use crate::motion::Hover;

use super::use_theme;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn copyright_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|d| d.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let year = copyright_year(BUILD_TIME)
        .map(|y| y.to_string())
        .unwrap_or_default();
    view! {
        <footer class=move || {
            format!(
                "py-10 px-4 border-t {}",
                theme.get().pick("border-gray-800 bg-gray-950", "border-gray-200 bg-gray-100"),
            )
        }>
            <div class="mx-auto max-w-6xl flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                <div class="flex gap-4 text-2xl">
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
            </div>
        </footer>
    }
}
