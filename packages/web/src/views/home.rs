use dioxus::prelude::*;

use types::HostWithAvailabilities;
use ui::{HostCard, Navbar};

use crate::Route;

/// Browse page: every published host as a card grid.
#[component]
pub fn Home() -> Element {
    let mut hosts = use_signal(Vec::<HostWithAvailabilities>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::list_hosts().await {
            Ok(list) => hosts.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    let on_select = move |host_id: String| {
        nav.push(Route::HostDetail { host_id });
    };

    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::MyHost {}, "My host" }
        }

        div {
            class: "page",
            h1 { "Places to stay" }

            if let Some(err) = error() {
                p { class: "form-error", "Could not load hosts: {err}" }
            } else if loading() {
                p { class: "placeholder", "Loading..." }
            } else if hosts().is_empty() {
                p { class: "placeholder", "No hosts published yet. Be the first!" }
            } else {
                div {
                    class: "host-grid",
                    for host in hosts() {
                        HostCard {
                            key: "{host.host.id}",
                            host: host.clone(),
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
