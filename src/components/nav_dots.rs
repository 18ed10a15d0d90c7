use celebration_core::PageId;
use dioxus::prelude::*;

/// Bottom dot bar used by the light pages (chats, wishes).
#[component]
pub fn NavDots(current: PageId, on_navigate: EventHandler<PageId>) -> Element {
    rsx! {
        nav { class: "nav-dots",
            for page in PageId::ALL {
                button {
                    key: "{page}",
                    class: if page == current { "nav-dot active" } else { "nav-dot" },
                    title: page.label(),
                    onclick: move |_| on_navigate.call(page),
                    {page.icon()}
                }
            }
        }
    }
}
