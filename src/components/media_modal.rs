//! Full-screen lightbox shared by the photo, chat and video pages.
//!
//! The overlay only exists while an item is selected. It installs a
//! document-level `keydown` listener when it mounts and removes it when it
//! unmounts, so the keys work wherever focus is while the view is open.

use celebration_core::{Lightbox, LightboxKey};
use dioxus::prelude::*;

/// How the selected item is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaView {
    Image,
    Video,
}

/// Lightbox overlay with previous/next controls.
///
/// Escape closes, the arrow keys step through the gallery cyclically and
/// clicking the backdrop closes.
#[component]
pub fn MediaModal(
    lightbox: Signal<Lightbox>,
    view: MediaView,
    #[props(into)] caption: String,
) -> Element {
    let mut lightbox = lightbox;

    let (item, counter) = {
        let guard = lightbox.read();
        let Some(item) = guard.selected().cloned() else {
            return rsx! {};
        };
        let position = guard.position().map(|p| p + 1).unwrap_or(1);
        (item, format!("{} / {}", position, guard.len()))
    };

    rsx! {
        div {
            class: "lightbox",
            onclick: move |_| lightbox.write().close(),

            DocumentKeys { lightbox }

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "lightbox-close",
                    title: "Close (Esc)",
                    onclick: move |_| lightbox.write().close(),
                    "×"
                }
                button {
                    class: "lightbox-nav prev",
                    title: "Previous (←)",
                    onclick: move |_| lightbox.write().prev(),
                    "‹"
                }

                match view {
                    MediaView::Image => rsx! {
                        img { key: "{item.id}", src: "{item.source}", alt: "{item.name}" }
                    },
                    MediaView::Video => rsx! {
                        video {
                            key: "{item.id}",
                            src: "{item.source}",
                            controls: true,
                            autoplay: true,
                        }
                    },
                }

                button {
                    class: "lightbox-nav next",
                    title: "Next (→)",
                    onclick: move |_| lightbox.write().next(),
                    "›"
                }

                div { class: "lightbox-caption",
                    h3 { "{item.name}" }
                    p { "{caption}" }
                    span { class: "lightbox-counter", "{counter}" }
                }
            }
        }
    }
}

/// Global name of the installed key handler, so it can be removed again
const HANDLER_SLOT: &str = "__celebrationLightboxKeys";

/// Installs the handler and forwards bound keys to Rust
fn listener_script() -> String {
    let names = LightboxKey::ALL
        .iter()
        .map(|k| format!("\"{}\"", k.key_name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{remove}
window.{HANDLER_SLOT} = (e) => {{
  if ([{names}].includes(e.key)) {{ e.preventDefault(); dioxus.send(e.key); }}
}};
document.addEventListener("keydown", window.{HANDLER_SLOT});
await new Promise(() => {{}});"#,
        remove = remove_script()
    )
}

fn remove_script() -> String {
    format!(
        r#"if (window.{HANDLER_SLOT}) {{
  document.removeEventListener("keydown", window.{HANDLER_SLOT});
  window.{HANDLER_SLOT} = null;
}}"#
    )
}

/// Document-level key bindings for the open lightbox
#[component]
fn DocumentKeys(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;

    use_hook(move || {
        spawn(async move {
            let mut listener = document::eval(&listener_script());
            loop {
                match listener.recv::<String>().await {
                    Ok(name) => {
                        if let Some(key) = LightboxKey::from_key_name(&name) {
                            lightbox.write().handle_key(key);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Lightbox key listener stopped: {}", e);
                        break;
                    }
                }
            }
        })
    });

    use_drop(|| {
        let _ = document::eval(&remove_script());
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_forwards_every_bound_key() {
        let script = listener_script();
        for key in LightboxKey::ALL {
            assert!(script.contains(&format!("\"{}\"", key.key_name())));
        }
        assert!(script.contains(r#"document.addEventListener("keydown""#));
        assert!(script.contains("dioxus.send(e.key)"));
    }

    #[test]
    fn test_listener_replaces_a_stale_handler() {
        let script = listener_script();
        let remove_at = script.find("removeEventListener").unwrap();
        let add_at = script.find("addEventListener").unwrap();
        assert!(remove_at < add_at);
        assert!(remove_script().contains("window.__celebrationLightboxKeys = null"));
    }
}
