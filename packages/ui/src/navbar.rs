use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

/// Top navigation bar: brand, page links supplied by the caller, and the
/// current session (user name + logout, or a sign-in link).
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "Stay With Friends" }

            nav {
                class: "navbar-links",
                {children}
            }

            div {
                class: "navbar-session",
                if let Some(user) = auth().user {
                    span { class: "navbar-user", "{user.display_name()}" }
                    LogoutButton { class: "secondary" }
                } else if !auth().loading {
                    a { class: "navbar-signin", href: "/login", "Sign in" }
                }
            }
        }
    }
}
