//! Host management page for the authenticated user.
//!
//! Protected: unauthenticated sessions are redirected to the sign-in page.

use dioxus::prelude::*;

use types::{HostDraft, HostWithAvailabilities};
use ui::{use_auth, AmenityBadges, AvailabilityList, HostForm, Navbar};

use crate::Route;

#[component]
pub fn MyHost() -> Element {
    let auth = use_auth();
    let mut host = use_signal(|| Option::<HostWithAvailabilities>::None);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    // Unauthenticated sessions go to the sign-in page
    if !auth().loading && auth().user.is_none() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }

    // Load the user's host once the session is known
    let _loader = use_resource(move || async move {
        if auth().loading {
            return;
        }
        if auth().user.is_none() {
            loading.set(false);
            return;
        }
        match api::get_my_host().await {
            Ok(found) => host.set(found),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    let handle_save = move |draft: HostDraft| {
        spawn(async move {
            error.set(None);
            match api::save_host(draft).await {
                Ok(saved) => {
                    host.set(Some(saved));
                    editing.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            error.set(None);
            match api::delete_my_host().await {
                Ok(()) => host.set(None),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_add_window = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let start = start_date().trim().to_string();
            let end = end_date().trim().to_string();
            if start.is_empty() || end.is_empty() {
                error.set(Some("Both dates are required".to_string()));
                return;
            }

            match api::add_availability(start, end).await {
                Ok(_) => {
                    match api::get_my_host().await {
                        Ok(found) => host.set(found),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    start_date.set(String::new());
                    end_date.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_remove_window = move |id: String| {
        spawn(async move {
            error.set(None);
            match api::remove_availability(id).await {
                Ok(()) => match api::get_my_host().await {
                    Ok(found) => host.set(found),
                    Err(e) => error.set(Some(e.to_string())),
                },
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::Home {}, "Browse" }
        }

        div {
            class: "page",
            h1 { "My host" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            if loading() {
                p { class: "placeholder", "Loading..." }
            } else if editing() {
                HostForm {
                    initial: host(),
                    on_save: handle_save,
                    on_cancel: Some(EventHandler::new(move |_| editing.set(false))),
                }
            } else if let Some(current) = host() {
                div {
                    class: "host-detail",

                    h2 { "{current.host.name}" }
                    p { class: "host-detail-location", "{current.host.location}" }

                    AmenityBadges { amenities: current.amenities.clone() }

                    div {
                        class: "form-actions",
                        button {
                            class: "secondary",
                            onclick: move |_| editing.set(true),
                            "Edit"
                        }
                        button {
                            class: "danger",
                            onclick: handle_delete,
                            "Delete host"
                        }
                    }

                    h2 { "Open dates" }
                    if current.availabilities.is_empty() {
                        p { class: "placeholder", "No dates published yet." }
                    } else {
                        AvailabilityList {
                            availabilities: current.availabilities.clone(),
                            on_remove: Some(EventHandler::new(handle_remove_window)),
                        }
                    }

                    form {
                        class: "availability-form",
                        onsubmit: handle_add_window,

                        label { r#for: "window-start", "From" }
                        input {
                            id: "window-start",
                            r#type: "date",
                            value: start_date(),
                            oninput: move |evt| start_date.set(evt.value()),
                        }

                        label { r#for: "window-end", "To" }
                        input {
                            id: "window-end",
                            r#type: "date",
                            value: end_date(),
                            oninput: move |evt| end_date.set(evt.value()),
                        }

                        button { class: "primary", r#type: "submit", "Add dates" }
                    }
                }
            } else {
                p { class: "placeholder", "You have not published a host yet." }
                HostForm { initial: None, on_save: handle_save }
            }
        }
    }
}
