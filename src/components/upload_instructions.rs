use celebration_core::MediaKind;
use dioxus::prelude::*;

use crate::context::use_site_config;

/// Shown when a media folder is empty or missing.
#[component]
pub fn UploadInstructions(
    kind: MediaKind,
    #[props(into)] heading: String,
    #[props(into)] footer: String,
) -> Element {
    let config = use_site_config();
    let folder = config.media_root.join(kind.folder()).display().to_string();
    let extensions = accepted_list(kind);

    rsx! {
        div { class: "empty-gallery",
            h3 { "{heading}" }
            div { class: "upload-instructions",
                p { "To fill this page:" }
                ol {
                    li { "Open the folder " code { "{folder}" } }
                    li { "Add files ending in " code { "{extensions}" } }
                    li { "Come back to this page" }
                }
                p { class: "footer", "{footer}" }
            }
        }
    }
}

/// Accepted extensions as ".jpg, .png, ..."
fn accepted_list(kind: MediaKind) -> String {
    kind.extensions()
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_list() {
        assert_eq!(accepted_list(MediaKind::Videos), ".mp4, .webm, .mov, .avi");
        assert!(accepted_list(MediaKind::Photos).starts_with(".jpg, .jpeg"));
    }
}
