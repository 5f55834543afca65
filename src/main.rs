use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::Home;

mod components;
mod status;
mod utils;
mod views;

use utils::config;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(config::LOG_LEVEL) {
        eprintln!("Failed to initialize logger: {err}");
    }

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::WINDOW_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Home {}
    }
}
