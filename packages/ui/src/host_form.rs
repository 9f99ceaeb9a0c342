use dioxus::prelude::*;
use types::{HostDraft, HostWithAvailabilities};

/// Inline form for publishing or editing a host.
///
/// Purely presentational: validation happens locally, and the resulting
/// [`HostDraft`] is handed to the `on_save` callback. Amenities are entered
/// comma-separated and split before submission.
#[component]
pub fn HostForm(
    initial: Option<HostWithAvailabilities>,
    on_save: EventHandler<HostDraft>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let initial_name = initial
        .as_ref()
        .map(|h| h.host.name.clone())
        .unwrap_or_default();
    let initial_location = initial
        .as_ref()
        .map(|h| h.host.location.clone())
        .unwrap_or_default();
    let initial_image = initial
        .as_ref()
        .and_then(|h| h.host.image.clone())
        .unwrap_or_default();
    let initial_amenities = initial
        .as_ref()
        .map(|h| h.amenities.join(", "))
        .unwrap_or_default();
    let editing = initial.is_some();

    let mut name = use_signal(move || initial_name);
    let mut location = use_signal(move || initial_location);
    let mut image = use_signal(move || initial_image);
    let mut amenities = use_signal(move || initial_amenities);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let n = name().trim().to_string();
        let l = location().trim().to_string();

        if n.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if l.is_empty() {
            error.set(Some("Location is required".to_string()));
            return;
        }

        let amenity_list: Vec<String> = amenities()
            .split(',')
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        let image_url = image().trim().to_string();

        on_save.call(HostDraft {
            name: n,
            location: l,
            amenities: amenity_list,
            image: if image_url.is_empty() {
                None
            } else {
                Some(image_url)
            },
        });
    };

    rsx! {
        form {
            class: "host-form",
            onsubmit: handle_submit,

            h2 {
                if editing { "Edit your host" } else { "Publish your host" }
            }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                label { r#for: "host-name", "Name" }
                input {
                    id: "host-name",
                    r#type: "text",
                    placeholder: "Canal-side flat",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "host-location", "Location" }
                input {
                    id: "host-location",
                    r#type: "text",
                    placeholder: "Amsterdam, NL",
                    value: location(),
                    oninput: move |evt| location.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "host-image", "Photo URL" }
                input {
                    id: "host-image",
                    r#type: "url",
                    placeholder: "https://...",
                    value: image(),
                    oninput: move |evt| image.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "host-amenities", "Amenities (comma separated)" }
                input {
                    id: "host-amenities",
                    r#type: "text",
                    placeholder: "wifi, kitchen, garden",
                    value: amenities(),
                    oninput: move |evt| amenities.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    if editing { "Save changes" } else { "Publish" }
                }
                if let Some(on_cancel) = on_cancel {
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
