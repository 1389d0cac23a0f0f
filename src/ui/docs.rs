//! The documentation page (`docs`).

use crate::app::domain::{
    AlignItems, AppConfig, Dimension, FontWeight, JustifyContent, Node, Spacing, WindowConfig,
};
use crate::app::infrastructure::error::Result;
use crate::app::services::compose::{
    Styled, column, external_link, link, markdown_file, row, text,
};

use super::landing::{GITHUB_URL, logo};
use super::theme::{DOCS, Theme};

pub const TITLE: &str = "Kryon Documentation";
pub const GETTING_STARTED: &str = "docs/getting-started.md";

pub struct SidebarSection<'a> {
    pub title: &'a str,
    /// `(label, href)` pairs.
    pub links: &'a [(&'a str, &'a str)],
}

pub const SIDEBAR: &[SidebarSection<'static>] = &[
    SidebarSection {
        title: "Getting Started",
        links: &[
            ("Introduction", "/docs"),
            ("Architecture", "/docs/architecture"),
            ("Examples", "/docs/examples"),
        ],
    },
    SidebarSection {
        title: "Language Bindings",
        links: &[
            ("Nim", "/docs/nim-bindings"),
            ("Rust", "/docs/rust-bindings"),
            ("TypeScript", "/docs/typescript"),
            ("JavaScript", "/docs/js-bindings"),
            ("Lua", "/docs/lua-bindings"),
            ("C", "/docs/c-frontend"),
        ],
    },
    SidebarSection {
        title: "Advanced",
        links: &[
            ("IR Pipeline", "/docs/ir-pipeline"),
            ("IR File Formats (.kir/.kirb)", "/docs/ir-formats"),
            ("Plugin System", "/docs/plugins"),
            ("Developer Guide", "/docs/developer-guide"),
        ],
    },
    SidebarSection {
        title: "Resources",
        links: &[("GitHub", "https://github.com/kryonlabs/kryon")],
    },
];

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

pub fn header(t: &Theme) -> Node {
    let nav = |n: Node, active: bool| {
        let color = if active { t.palette.accent } else { t.palette.secondary_text };
        n.font_size(14.0).color(color)
    };

    row()
        .width(Dimension::FULL)
        .height(60)
        .background(t.palette.card_bg)
        .border_bottom(t.hairline())
        .padding(Spacing::axes(0, t.spacing.lg))
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::SpaceBetween)
        .child(logo(t, 24.0))
        .child(
            row()
                .gap(t.spacing.xl)
                .align_items(AlignItems::Center)
                .child(nav(link("/", "Home"), false))
                .child(nav(link("/docs", "Docs"), true))
                .child(nav(external_link(GITHUB_URL, "GitHub"), false)),
        )
        .build()
}

/// Section heading followed by its links. The first section sits closer to
/// the sidebar title.
fn sidebar_section(t: &Theme, section: &SidebarSection<'_>, first: bool) -> Vec<Node> {
    let top = if first { t.spacing.md } else { t.spacing.xl };
    let heading = text(section.title)
        .font_size(12.0)
        .font_weight(FontWeight::Bold)
        .color(t.palette.secondary_text)
        .margin_top(top)
        .margin_bottom(t.spacing.sm);

    let links = section.links.iter().map(|&(label, href)| {
        let node = if is_external(href) {
            external_link(href, label)
        } else {
            link(href, label)
        };
        node.font_size(14.0)
            .color(t.palette.secondary_text)
            .margin_bottom(t.spacing.xs)
    });

    std::iter::once(heading).chain(links).collect()
}

pub fn sidebar(t: &Theme, sections: &[SidebarSection<'_>]) -> Node {
    let mut nav = column()
        .width(240)
        .min_height(Dimension::FULL_VIEWPORT_HEIGHT)
        .background(t.palette.sidebar)
        .padding(t.spacing.lg)
        .border_right(t.hairline())
        .child(
            text("Documentation")
                .font_size(18.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(t.spacing.lg),
        );

    for (i, section) in sections.iter().enumerate() {
        nav = nav.children(sidebar_section(t, section, i == 0));
    }
    nav.build()
}

pub fn docs_content(t: &Theme, file: &str) -> Node {
    column()
        .flex_grow(1.0)
        .padding(t.spacing.xxl)
        .background(t.palette.bg)
        .child(
            column()
                .width(Dimension::FULL)
                .max_width(800)
                .child(markdown_file(file, t.markdown)),
        )
        .build()
}

pub fn app() -> Result<AppConfig> {
    let t = &DOCS;
    let window = WindowConfig::new().title(TITLE).background(t.palette.bg);

    AppConfig::new(window, || {
        column()
            .width(Dimension::FULL)
            .min_height(Dimension::FULL_VIEWPORT_HEIGHT)
            .child(header(t))
            .child(
                row()
                    .width(Dimension::FULL)
                    .flex_grow(1.0)
                    .child(sidebar(t, SIDEBAR))
                    .child(docs_content(t, GETTING_STARTED)),
            )
            .build()
    })
}
