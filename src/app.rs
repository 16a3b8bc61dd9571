mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod theme;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::Theme;

use about::About;
use contact::Contact;
use education::EducationTimeline;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use toaster::ToastSurface;

pub use theme::{provide_theme, use_theme, ThemeStore};
pub use toaster::{provide_toaster, use_toaster, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=Theme::default().root_class().unwrap_or_default()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("{} - {title}", crate::content::OWNER_NAME) />
        <Meta
            name="description"
            content="Portfolio of a full-stack web developer: projects, skills and contact."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Every section of the page in display order.
#[component]
fn HomePage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!(
                "min-h-screen transition-colors duration-500 {}",
                theme.get().pick("bg-gray-950 text-gray-100", "bg-gray-50 text-gray-900"),
            )
        }>
            <Navbar />
            <main class="flex flex-col w-full">
                <Hero />
                <About />
                <Skills />
                <EducationTimeline />
                <Projects />
                <Contact />
            </main>
            <Footer />
            <ToastSurface />
        </div>
    }
}
