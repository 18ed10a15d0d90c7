use celebration_core::PageId;
use dioxus::prelude::*;

/// Vertical star-chain navigation shown on the night-sky pages.
///
/// One star per page; the current page's star glows pink.
#[component]
pub fn ConstellationNav(current: PageId, on_navigate: EventHandler<PageId>) -> Element {
    rsx! {
        nav { class: "constellation-nav",
            ul {
                for page in PageId::ALL {
                    li { key: "{page}",
                        button {
                            class: if page == current { "nav-star active" } else { "nav-star" },
                            title: page.title(),
                            "data-label": page.label(),
                            onclick: move |_| on_navigate.call(page),
                            div { class: "star-core" }
                        }
                    }
                }
            }
        }
    }
}
