use dioxus::prelude::*;
use tracing::debug;

use super::icons::{DownArrowIcon, UpArrowIcon};
use super::StatusPill;
use crate::status::Status;

const OPEN_BORDER: &str = "#0070ff";
const CLOSED_BORDER: &str = "#eaecf0";

/// Visual theme of the dropdown. Only one exists for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownVariant {
    #[default]
    Primary,
}

impl DropdownVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            DropdownVariant::Primary => "dropdown-primary",
        }
    }
}

/// Visibility and selection of one dropdown instance.
///
/// The two fields only change through [`toggle_open`](Self::toggle_open) and
/// [`select`](Self::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownState {
    is_open: bool,
    selected: Status,
}

impl DropdownState {
    pub fn new(initial: Status) -> Self {
        Self {
            is_open: false,
            selected: initial,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Status {
        self.selected
    }

    /// Flip the option list between open and closed, returning the new visibility
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Pick a status and close the list. Picking the current status is not a no-op.
    pub fn select(&mut self, status: Status) -> Status {
        self.selected = status;
        self.is_open = false;
        self.selected
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new(Status::default())
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DropdownProps {
    #[props(default)]
    variant: DropdownVariant,
    /// Selection shown on mount
    #[props(default)]
    status: Status,
    on_change: Option<EventHandler<Status>>,
    on_blur: Option<EventHandler<FocusEvent>>,
}

/// Status selector that owns its open/selected state
#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut state = use_signal(|| DropdownState::new(props.status));
    let on_change = props.on_change;
    let on_blur = props.on_blur;

    rsx! {
        DropdownView {
            state: state(),
            variant: props.variant,
            on_toggle: move |_| {
                let open = state.write().toggle_open();
                debug!(open, "status dropdown toggled");
            },
            on_select: move |status: Status| {
                // Guard is dropped before observers run
                let selected = state.write().select(status);
                debug!(status = %selected, "status selected");
                if let Some(handler) = on_change {
                    handler.call(selected);
                }
            },
            on_blur: move |evt| {
                if let Some(handler) = on_blur {
                    handler.call(evt);
                }
            },
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DropdownViewProps {
    state: DropdownState,
    #[props(default)]
    variant: DropdownVariant,
    on_toggle: EventHandler<MouseEvent>,
    on_select: EventHandler<Status>,
    on_blur: EventHandler<FocusEvent>,
}

/// Renders a dropdown for a given state without holding any of its own
#[component]
pub fn DropdownView(props: DropdownViewProps) -> Element {
    let is_open = props.state.is_open();
    let selected = props.state.selected();
    let variant_class = props.variant.class_name();
    let border = if is_open { OPEN_BORDER } else { CLOSED_BORDER };
    let on_toggle = props.on_toggle;
    let on_select = props.on_select;
    let on_blur = props.on_blur;

    rsx! {
        div { class: "status-dropdown {variant_class}",
            div {
                class: "dropdown-trigger",
                tabindex: "0",
                style: "border-color: {border};",
                onclick: move |evt| on_toggle.call(evt),
                onblur: move |evt| on_blur.call(evt),
                StatusPill { status: selected }
                if is_open {
                    UpArrowIcon {}
                } else {
                    DownArrowIcon {}
                }
            }
            // Outside clicks intentionally leave the list open
            if is_open {
                div { class: "dropdown-options",
                    for status in Status::ALL {
                        StatusPill {
                            key: "{status}",
                            status,
                            on_click: move |_| on_select.call(status),
                        }
                    }
                }
            }
        }
    }
}
