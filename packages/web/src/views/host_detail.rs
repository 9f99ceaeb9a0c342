use dioxus::prelude::*;

use types::HostWithAvailabilities;
use ui::{AmenityBadges, AvailabilityList, Navbar};

use crate::Route;

/// Detail page for a single host.
#[component]
pub fn HostDetail(host_id: String) -> Element {
    let mut host = use_signal(|| Option::<HostWithAvailabilities>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let host_id = host_id.clone();
        async move {
            match api::get_host(host_id).await {
                Ok(found) => host.set(found),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::Home {}, "Browse" }
            Link { class: "navbar-link", to: Route::MyHost {}, "My host" }
        }

        div {
            class: "page",

            if loading() {
                p { class: "placeholder", "Loading..." }
            } else if let Some(err) = error() {
                p { class: "form-error", "Could not load host: {err}" }
            } else if let Some(host) = host() {
                div {
                    class: "host-detail",

                    if let Some(image) = &host.host.image {
                        img {
                            class: "host-detail-image",
                            src: "{image}",
                            alt: "{host.host.name}",
                        }
                    }

                    h1 { "{host.host.name}" }
                    p { class: "host-detail-location", "{host.host.location}" }

                    AmenityBadges { amenities: host.amenities.clone() }

                    h2 { "Open dates" }
                    if host.availabilities.is_empty() {
                        p { class: "placeholder", "No dates published yet." }
                    } else {
                        AvailabilityList { availabilities: host.availabilities.clone() }
                    }
                }
            } else {
                div {
                    class: "host-detail",
                    h1 { "Host not found" }
                    p {
                        class: "placeholder",
                        "This host does not exist or has been removed. "
                        Link { to: Route::Home {}, "Back to browsing" }
                    }
                }
            }
        }
    }
}
