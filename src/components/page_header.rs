use celebration_core::PageId;
use dioxus::prelude::*;

/// Title band with a back-to-home button.
#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    on_navigate: EventHandler<PageId>,
) -> Element {
    rsx! {
        header { class: "page-header",
            button {
                class: "back-btn",
                onclick: move |_| on_navigate.call(PageId::Landing),
                "← Back to Stars"
            }
            h1 { "{title}" }
            p { "{subtitle}" }
        }
    }
}
