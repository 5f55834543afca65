use dioxus::prelude::*;
use tracing::{debug, info};

use crate::components::{Dropdown, DropdownVariant};
use crate::status::Status;
use crate::utils::config;

/// The Home page: a record form with a status dropdown and the last reported change
#[component]
pub fn Home() -> Element {
    let initial = *config::INITIAL_STATUS;
    let mut last_change = use_signal(|| None::<Status>);

    let summary = match last_change() {
        Some(status) => format!("Last change: {status}"),
        None => "No change yet".to_string(),
    };

    rsx! {
        div { class: "gallery-container",
            div { class: "gallery-header",
                h1 { "Record Status" }
            }

            div { class: "gallery-field",
                label { class: "gallery-label", "Status" }
                Dropdown {
                    variant: DropdownVariant::Primary,
                    status: initial,
                    on_change: move |status: Status| {
                        info!(%status, "record status changed");
                        last_change.set(Some(status));
                    },
                    on_blur: move |_| debug!("status dropdown lost focus"),
                }
            }

            p { class: "gallery-summary", "{summary}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_mounts_primary_dropdown() {
        let mut dom = VirtualDom::new(Home);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("status-dropdown dropdown-primary"), "{html}");
        assert_eq!(html.matches("class=\"status-pill\"").count(), 1);
        assert!(html.contains("No change yet"));
    }
}
