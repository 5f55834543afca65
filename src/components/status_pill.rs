use dioxus::prelude::*;

use crate::status::Status;

#[derive(Props, PartialEq, Clone)]
pub struct StatusPillProps {
    status: Status,
    on_click: Option<EventHandler<MouseEvent>>,
}

/// Colored dot plus label for a single status
#[component]
pub fn StatusPill(props: StatusPillProps) -> Element {
    let style = props.status.style();
    let on_click = props.on_click;

    rsx! {
        div {
            class: "status-pill-row",
            onclick: move |evt| {
                if let Some(handler) = on_click {
                    handler.call(evt);
                }
            },
            span {
                class: "status-pill",
                style: style.pill_css(),
                div { class: "pill-dot", style: style.dot_css() }
                "{props.status}"
            }
        }
    }
}
