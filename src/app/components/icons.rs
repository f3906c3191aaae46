use dioxus::prelude::*;

// Stroke icons (24x24 grid, currentColor), hamburger and close.

#[component]
pub fn MenuIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "c-icon c-icon--menu",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "c-icon c-icon--close",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
