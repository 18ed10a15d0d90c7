use std::sync::Arc;

use celebration_core::{AudioController, DirectoryAssetProvider, PageId, PageRouter};
use dioxus::prelude::*;

use crate::components::{play_background, BackgroundMusic, MuteButton};
use crate::context::{get_site_config, SharedAssets};
use crate::pages::{Chats, Landing, Photos, Special, Videos, Wishes};
use crate::theme::{css_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the site context and in-memory page switching.
/// Exactly one page is mounted at a time; leaving a page drops its state
/// and cancels its timers.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_site_config);
    let start_page = config.start_page;

    let mut router: Signal<PageRouter> = use_signal(move || PageRouter::starting_at(start_page));
    let mut audio: Signal<AudioController> = use_signal(AudioController::new);

    let assets: SharedAssets = use_hook({
        let root = config.media_root.clone();
        move || Arc::new(DirectoryAssetProvider::new(root)) as SharedAssets
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| assets);
    use_context_provider(|| audio);

    let on_navigate = EventHandler::new(move |page: PageId| {
        router.write().navigate(page);
    });

    // First click anywhere retries blocked autoplay, once
    let on_first_click = move |_| {
        if audio.write().user_gesture() {
            spawn(play_background(audio));
        }
    };

    let current = router.read().current();

    rsx! {
        style { {css_variables()} }
        style { {GLOBAL_STYLES} }
        div { class: "App", onclick: on_first_click,
            BackgroundMusic {}
            MuteButton {}
            match current {
                PageId::Landing => rsx! { Landing { on_navigate } },
                PageId::Photos => rsx! { Photos { on_navigate } },
                PageId::Chats => rsx! { Chats { on_navigate } },
                PageId::Videos => rsx! { Videos { on_navigate } },
                PageId::Special => rsx! { Special { on_navigate } },
                PageId::Wishes => rsx! { Wishes { on_navigate } },
            }
        }
    }
}
