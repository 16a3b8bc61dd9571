use std::time::Duration;

use leptos::prelude::*;

use crate::notify::{Toast, ToastKind, ToastQueue, TOAST_TTL_MS};

#[derive(Debug, Clone, Copy)]
pub struct Toaster(RwSignal<ToastQueue>);

impl Toaster {
    /// Runs `f` against the queue and schedules removal of the toast it
    /// returns.
    pub fn raise(&self, f: impl FnOnce(&mut ToastQueue) -> u64) {
        let Some(id) = self.0.try_update(f) else {
            return;
        };
        let queue = self.0;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            Duration::from_millis(TOAST_TTL_MS),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster(RwSignal::new(ToastQueue::new()));
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastSurface() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div
            class="fixed top-20 right-4 z-50 flex flex-col gap-3 w-80 max-w-[90vw]"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toaster.0.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|t| t.id
                children=move |toast: Toast| {
                    let (accent, icon) = match toast.kind {
                        ToastKind::Success => ("border-green-500 bg-green-600/90", "✔"),
                        ToastKind::Error => ("border-red-500 bg-red-600/90", "✖"),
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start gap-3 p-4 rounded-lg border-l-4 shadow-lg text-white toast-enter {accent}",
                        )>
                            <span class="font-bold">{icon}</span>
                            <p class="flex-1 text-sm">{toast.message}</p>
                            <button
                                class="text-white/80 hover:text-white"
                                aria-label="Dismiss notification"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
