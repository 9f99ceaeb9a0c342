use dioxus::prelude::*;

/// Badge row for a host's amenities. Renders nothing when the list is empty.
#[component]
pub fn AmenityBadges(amenities: Vec<String>) -> Element {
    if amenities.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "amenity-badges",
            for amenity in &amenities {
                span {
                    key: "{amenity}",
                    class: "amenity-badge",
                    "{amenity}"
                }
            }
        }
    }
}
