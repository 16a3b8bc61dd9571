use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    contact::{resolve_submission, ContactForm},
    content::{ContactDetail, CONTACT_DETAILS, SOCIAL_LINKS},
    motion::{Hover, Motion, Transition, FADE},
};

use super::{
    reveal::{Reveal, SectionHeading},
    use_theme, use_toaster,
};

#[server]
pub async fn send_message(form: ContactForm) -> Result<(), ServerFnError> {
    crate::contact::deliver(form).await.map_err(|e| {
        tracing::error!("contact delivery failed: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::default());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let data = form.get_untracked();
        set_pending.set(true);
        spawn_local(async move {
            let res = send_message(data).await;
            let mut current = form.get_untracked();
            toaster.raise(|q| resolve_submission(&mut current, res, q));
            form.set(current);
            set_pending.set(false);
        });
    };

    let field_class = move || {
        format!(
            "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:ring-cyan-500 {}",
            theme.get().pick("bg-gray-900 border-gray-700 text-gray-100", "bg-white border-gray-300 text-gray-900"),
        )
    };

    view! {
        <section id="contact" class="scroll-mt-20 py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <SectionHeading title="Contact" subtitle="Have a project in mind? Let's talk." />
                <div class="grid md:grid-cols-5 gap-10">
                    <Reveal motion=Motion::new(Transition::SlideRight) class="md:col-span-2">
                        <ContactInfo />
                    </Reveal>
                    <Reveal motion=Motion::new(Transition::SlideLeft) class="md:col-span-3">
                        <form class="space-y-4" on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <input
                                    type="text"
                                    name="name"
                                    placeholder="Your Name"
                                    required
                                    class=field_class
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                                <input
                                    type="email"
                                    name="email"
                                    placeholder="Your Email"
                                    required
                                    class=field_class
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                            <input
                                type="tel"
                                name="phone"
                                placeholder="Phone (optional)"
                                class=field_class
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                            <textarea
                                name="message"
                                rows="6"
                                placeholder="Your Message"
                                required
                                class=field_class
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                            <button
                                type="submit"
                                disabled=pending
                                class="w-full py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-cyan-500 to-blue-600 transition-opacity disabled:opacity-60 disabled:cursor-wait"
                            >
                                {move || if pending.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Direct contact channels and the "Connect With Me" social row.
#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-6">
            {CONTACT_DETAILS
                .iter()
                .map(|detail| view! { <DetailRow detail=*detail /> })
                .collect_view()}
            <Reveal motion=FADE class="pt-4">
                <h3 class="text-lg font-semibold mb-4">"Connect With Me"</h3>
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
                                    class=format!(
                                        "p-3 rounded-full bg-cyan-500/10 hover:text-cyan-400 {}",
                                        Hover::Grow.class(),
                                    )
                                >
                                    <i class=s.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}

#[component]
fn DetailRow(detail: ContactDetail) -> impl IntoView {
    let theme = use_theme();
    let value = detail.value;
    view! {
        <div class="flex items-center gap-4">
            <span class="flex items-center justify-center w-12 h-12 rounded-full bg-cyan-500/10 text-cyan-400 text-xl">
                {detail.icon}
            </span>
            <div>
                <p class=move || theme.get().pick("text-sm text-gray-400", "text-sm text-gray-600")>
                    {detail.title}
                </p>
                {match detail.href {
                    Some(href) => {
                        Either::Left(
                            view! {
                                <a
                                    href=href
                                    target=href.starts_with("https://").then_some("_blank")
                                    class="font-medium hover:text-cyan-400"
                                >
                                    {value}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(view! { <p class="font-medium">{value}</p> }),
                }}
            </div>
        </div>
    }
}
