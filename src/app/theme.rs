use leptos::prelude::*;

use crate::theme::{Theme, DARK_CLASS};

/// Shared handle to the page theme. Reading subscribes the caller; toggling
/// notifies every subscriber and updates the document root class.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore(RwSignal<Theme>);

impl ThemeStore {
    pub fn get(&self) -> Theme {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|t| *t = t.toggled());
        log::debug!("theme switched to {:?}", self.0.get_untracked());
    }
}

/// Creates the store for this page session. Call once at the composition root.
pub fn provide_theme() -> ThemeStore {
    let store = ThemeStore(RwSignal::new(Theme::default()));
    provide_context(store);
    Effect::new(move |_| apply_root_class(store.get()));
    store
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = match theme.root_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(DARK_CLASS),
    };
    if let Err(e) = res {
        log::error!("failed to update root class: {e:?}");
    }
}
