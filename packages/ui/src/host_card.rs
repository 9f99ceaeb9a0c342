use dioxus::prelude::*;
use types::HostWithAvailabilities;

use crate::AmenityBadges;

/// Card for the browse grid: photo, name, location, amenities, and how many
/// availability windows the host currently offers.
#[component]
pub fn HostCard(host: HostWithAvailabilities, on_select: EventHandler<String>) -> Element {
    let id = host.host.id.clone();
    let window_count = host.availabilities.len();

    rsx! {
        div {
            class: "host-card",
            onclick: move |_| on_select.call(id.clone()),

            if let Some(image) = &host.host.image {
                img {
                    class: "host-card-image",
                    src: "{image}",
                    alt: "{host.host.name}",
                }
            } else {
                div { class: "host-card-image host-card-image-placeholder" }
            }

            div {
                class: "host-card-body",
                h3 { class: "host-card-name", "{host.host.name}" }
                p { class: "host-card-location", "{host.host.location}" }

                AmenityBadges { amenities: host.amenities.clone() }

                if window_count > 0 {
                    p {
                        class: "host-card-windows",
                        "{window_count} open date window(s)"
                    }
                }
            }
        }
    }
}
