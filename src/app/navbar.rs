use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use crate::{
    content::OWNER_NAME,
    scroll_spy::{active_section, SectionBounds, NAV_ANCHORS, NAV_OFFSET},
};

use super::use_theme;

/// Smoothly scrolls the viewport to the element with `id`.
pub fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn measure_sections() -> Vec<SectionBounds> {
    let doc = document();
    let scroll_y = window().scroll_y().unwrap_or_default();
    NAV_ANCHORS
        .iter()
        .filter_map(|(id, _)| {
            let rect = doc.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds::new(*id, rect.top() + scroll_y, rect.height()))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    // Starts empty so server markup and the hydrating client agree; the
    // effect only runs in the browser, after mount.
    let (active, set_active) = signal(None::<String>);
    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = measure_sections();
        let next = active_section(&bounds, y, NAV_OFFSET).map(str::to_string);
        if active.get_untracked() != next {
            set_active.set(next);
        }
    });

    let nav_class = move || {
        let t = theme.get();
        let base = "fixed top-0 inset-x-0 z-40 transition-all duration-300";
        if scroll_y.get() > 10.0 {
            format!(
                "{base} backdrop-blur-md shadow-lg {}",
                t.pick("bg-gray-900/80", "bg-white/80"),
            )
        } else {
            format!("{base} bg-transparent")
        }
    };

    let link = move |id: &'static str, label: &'static str| {
        let on_click = move |ev: MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to(id);
        };
        view! {
            <li>
                <a
                    href=format!("#{id}")
                    on:click=on_click
                    aria-current=move || (active.get().as_deref() == Some(id)).then_some("page")
                    class=move || {
                        if active.get().as_deref() == Some(id) {
                            "px-3 py-2 rounded-md font-medium text-cyan-400 bg-cyan-500/10"
                        } else {
                            theme
                                .get()
                                .pick(
                                    "px-3 py-2 rounded-md font-medium text-gray-300 hover:text-cyan-400",
                                    "px-3 py-2 rounded-md font-medium text-gray-700 hover:text-cyan-600",
                                )
                        }
                    }
                >
                    {label}
                </a>
            </li>
        }
    };

    let theme_button = move || {
        view! {
            <button
                class="p-2 rounded-full text-xl transition-transform duration-300 hover:rotate-12"
                aria-label=move || theme.get().label()
                aria-pressed=move || theme.get().is_dark().to_string()
                title=move || theme.get().label()
                on:click=move |_| theme.toggle()
            >
                {move || theme.get().pick("☀", "☾")}
            </button>
        }
    };

    view! {
        <nav class=nav_class>
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-2xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        scroll_to("home");
                    }
                >
                    {OWNER_NAME}
                </a>
                <div class="hidden md:flex items-center gap-2">
                    <ul class="flex items-center gap-1">
                        {NAV_ANCHORS.iter().map(|&(id, label)| link(id, label)).collect_view()}
                    </ul>
                    {theme_button()}
                </div>
                <div class="flex md:hidden items-center gap-2">
                    {theme_button()}
                    <button
                        class="p-2 text-2xl"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <ul class=move || {
                    format!(
                        "md:hidden flex flex-col gap-1 px-4 pb-4 {}",
                        theme.get().pick("bg-gray-900/95", "bg-white/95"),
                    )
                }>{NAV_ANCHORS.iter().map(|&(id, label)| link(id, label)).collect_view()}</ul>
            </Show>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::provide_theme;

    #[test]
    fn server_markup_marks_no_entry_active() {
        let owner = Owner::new();
        owner.set();
        provide_theme();

        let html = view! { <Navbar /> }.to_html();

        for (id, label) in NAV_ANCHORS {
            assert!(html.contains(&format!("href=\"#{id}\"")), "{id} missing");
            assert!(html.contains(label));
        }
        assert!(!html.contains("aria-current"));
        assert!(html.contains("aria-pressed=\"true\""));
    }
}
