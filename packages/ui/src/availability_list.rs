use dioxus::prelude::*;
use types::Availability;

/// Date windows during which a host welcomes guests. Renders nothing when
/// empty; pass `on_remove` to get a remove button per window (edit mode).
#[component]
pub fn AvailabilityList(
    availabilities: Vec<Availability>,
    #[props(default)] on_remove: Option<EventHandler<String>>,
) -> Element {
    if availabilities.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "availability-list",
            for window in &availabilities {
                li {
                    key: "{window.id}",
                    class: "availability-item",
                    span { "{window.start_date} to {window.end_date}" }
                    if let Some(on_remove) = on_remove {
                        button {
                            class: "secondary",
                            onclick: {
                                let id = window.id.clone();
                                move |_| on_remove.call(id.clone())
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
