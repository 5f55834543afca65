use dioxus::prelude::*;

/// Chevron pointing up, shown while the option list is open
#[component]
pub fn UpArrowIcon() -> Element {
    rsx! {
        svg {
            class: "chevron chevron-up",
            width: "16",
            height: "16",
            view_box: "0 0 16 16",
            fill: "none",
            path {
                d: "M4 10L8 6L12 10",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Chevron pointing down, shown while the option list is closed
#[component]
pub fn DownArrowIcon() -> Element {
    rsx! {
        svg {
            class: "chevron chevron-down",
            width: "16",
            height: "16",
            view_box: "0 0 16 16",
            fill: "none",
            path {
                d: "M4 6L8 10L12 6",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
