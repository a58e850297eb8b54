//! Inline SVG line icons (24x24 grid, stroked with `currentColor`).

#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IconKind {
    Activity,
    ArrowLeft,
    ArrowRight,
    ArrowUpRight,
    Building,
    Menu,
    X,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            IconKind::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconKind::Building => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M9 22v-4h6v4",
                "M8 6h.01",
                "M12 6h.01",
                "M16 6h.01",
                "M8 10h.01",
                "M12 10h.01",
                "M16 10h.01",
                "M8 14h.01",
                "M12 14h.01",
                "M16 14h.01",
            ],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct IconProps {
    kind: IconKind,
    #[props(default = 24)]
    size: u32,
    #[props(default)]
    class: String,
}

pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "icon {props.class}",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.kind.paths() {
                path { d: "{d}" }
            }
        }
    }
}
