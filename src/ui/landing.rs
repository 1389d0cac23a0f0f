//! The landing page (`index`).

use crate::app::domain::{
    AlignItems, AppConfig, Color, Dimension, FontWeight, JustifyContent, Node, Spacing,
    WindowConfig,
};
use crate::app::infrastructure::error::Result;
use crate::app::services::compose::{
    Styled, column, external_link, image, link, row, text,
};
use crate::app::services::text_ops::{copyright_notice, handle_label, step_label, x_profile_url};

use super::theme::{LANDING, Theme};

pub const TITLE: &str = "Kryon Labs - The Universal UI Compiler";
pub const GITHUB_URL: &str = "https://github.com/kryonlabs";

pub struct Feature<'a> {
    pub emoji: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

pub struct WorkflowStep<'a> {
    pub emoji: &'a str,
    pub step: u32,
    pub title: &'a str,
    pub description: &'a str,
}

pub struct Sponsor<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub website: &'a str,
    /// Social handle, with or without the leading `@`.
    pub twitter: Option<&'a str>,
}

pub const FEATURES: &[Feature<'static>] = &[
    Feature {
        emoji: "🌍",
        title: "True Universality",
        description: "Go beyond mobile and web. Kryon's compiled binary format runs natively on desktop (Win, macOS, Linux), mobile (iOS, Android), web (WASM), and even low-power embedded devices.",
    },
    Feature {
        emoji: "⚡",
        title: "Extreme Performance",
        description: "The KRB binary format achieves 65-75% size reduction over source. With optimized data structures and a lightweight runtime, your apps load instantly and run smoothly on any hardware.",
    },
    Feature {
        emoji: "🧩",
        title: "Declarative & Powerful",
        description: "Write clean, maintainable UI with the KRY language. Leverage a powerful component system, scoped variables, style inheritance, and pseudo-selectors to build complex interfaces with ease.",
    },
    Feature {
        emoji: "🚀",
        title: "Extensible with Scripts",
        description: "Add dynamic behavior and complex logic to your applications. Kryon's runtime seamlessly integrates with sandboxed script engines like Lua and JavaScript, providing a safe and powerful API.",
    },
];

pub const WORKFLOW: &[WorkflowStep<'static>] = &[
    WorkflowStep {
        emoji: "📝",
        step: 1,
        title: "Write KRY",
        description: "Define your UI in the simple, declarative KRY language.",
    },
    WorkflowStep {
        emoji: "⚙️",
        step: 2,
        title: "Compile to KRB",
        description: "The kryc compiler optimizes, validates, and transforms your source into a compact binary.",
    },
    WorkflowStep {
        emoji: "📱",
        step: 3,
        title: "Run Natively",
        description: "The cross-platform runtime loads the KRB file and renders a native, high-performance UI.",
    },
];

pub const SPONSORS: &[Sponsor<'static>] = &[Sponsor {
    name: "5bitcube",
    image: "assets/sponsors/5bitcube.jpg",
    website: "https://5bitcube.com/",
    twitter: Some("@5bitcube"),
}];

/// Two-tone "KryonLabs" wordmark.
pub fn logo(t: &Theme, size: f32) -> Node {
    row()
        .gap(0)
        .align_items(AlignItems::Center)
        .child(
            text("Kryon")
                .font_size(size)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text),
        )
        .child(
            text("Labs")
                .font_size(size)
                .font_weight(FontWeight::Bold)
                .color(t.palette.accent),
        )
        .build()
}

pub fn header(t: &Theme) -> Node {
    let nav = |n: Node| n.font_size(16.0).color(t.palette.secondary_text);

    row()
        .width(Dimension::FULL)
        .height(70)
        .background(t.palette.card_bg)
        .border_bottom(t.hairline())
        .padding(Spacing::axes(0, t.spacing.lg))
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::SpaceBetween)
        .child(logo(t, 28.0))
        .child(
            row()
                .gap(t.spacing.xl)
                .align_items(AlignItems::Center)
                .child(nav(link("#features", "Features")))
                .child(nav(link("/docs", "Documentation")))
                .child(nav(external_link(GITHUB_URL, "GitHub"))),
        )
        .build()
}

fn call_to_action(t: &Theme, node: Node) -> Node {
    node.font_size(18.0)
        .font_weight(FontWeight::Weight(600))
        .padding(Spacing::axes(15, 35))
        .border_radius(8)
        .color(t.palette.primary_text)
}

pub fn hero(t: &Theme) -> Node {
    column()
        .width(Dimension::FULL)
        .padding(Spacing::axes(120, 0))
        .align_items(AlignItems::Center)
        .child(
            text("Build Once. Deploy Natively. Everywhere.")
                .font_size(56.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(t.spacing.lg),
        )
        .child(
            text("Kryon is a declarative UI framework that compiles your apps into an ultra-compact binary format for unparalleled performance on desktop, mobile, web, and embedded systems.")
                .font_size(20.0)
                .color(t.palette.secondary_text)
                .margin_bottom(t.spacing.xxl),
        )
        .child(
            row()
                .gap(t.spacing.lg)
                .child(
                    call_to_action(t, link("/docs", "Get Started"))
                        .background(t.palette.accent)
                        .color(t.palette.white),
                )
                .child(
                    call_to_action(t, external_link(GITHUB_URL, "View on GitHub"))
                        .background(Color::Transparent)
                        .border(t.hairline()),
                ),
        )
        .build()
}

pub fn feature_card(t: &Theme, feature: &Feature<'_>) -> Node {
    column()
        .background(t.palette.card_bg)
        .border(t.hairline())
        .border_radius(10)
        .padding(t.spacing.xl)
        .child(text(feature.emoji).font_size(40.0).margin_bottom(t.spacing.lg))
        .child(
            text(feature.title)
                .font_size(24.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(t.spacing.md),
        )
        .child(
            text(feature.description)
                .font_size(16.0)
                .color(t.palette.secondary_text),
        )
        .build()
}

fn section_heading(t: &Theme, title: &str) -> Node {
    text(title)
        .font_size(40.0)
        .font_weight(FontWeight::Bold)
        .color(t.palette.primary_text)
        .margin_bottom(t.spacing.xxxl)
}

/// Feature cards laid out two per row.
pub fn features(t: &Theme, features: &[Feature<'_>]) -> Node {
    let mut body = column()
        .width(Dimension::FULL)
        .padding(Spacing::axes(0, t.spacing.lg))
        .child(section_heading(t, "Why Kryon?"));

    for (i, pair) in features.chunks(2).enumerate() {
        let mut cards = row().gap(t.spacing.xxl);
        if i > 0 {
            cards = cards.margin_top(t.spacing.xxl);
        }
        body = body.child(cards.children(pair.iter().map(|f| feature_card(t, f))));
    }

    column()
        .width(Dimension::FULL)
        .padding(Spacing::axes(t.section_padding(), 0))
        .border_top(t.hairline())
        .child(body)
        .build()
}

pub fn workflow_step(t: &Theme, step: &WorkflowStep<'_>) -> Node {
    column()
        .align_items(AlignItems::Center)
        .child(
            column()
                .width(120)
                .height(120)
                .background(t.palette.bg)
                .border(t.hairline())
                .border_radius(60)
                .align_items(AlignItems::Center)
                .justify_content(JustifyContent::Center)
                .margin_bottom(t.spacing.lg)
                .child(text(step.emoji).font_size(48.0).color(t.palette.accent)),
        )
        .child(
            text(step_label(step.step, step.title))
                .font_size(20.0)
                .font_weight(FontWeight::Weight(600))
                .color(t.palette.primary_text)
                .margin_bottom(t.spacing.sm),
        )
        .child(
            text(step.description)
                .font_size(14.0)
                .color(t.palette.secondary_text),
        )
        .build()
}

fn arrow(t: &Theme) -> Node {
    text("→").font_size(48.0).color(t.palette.secondary_text)
}

/// Steps in order with an arrow between each pair.
pub fn workflow(t: &Theme, steps: &[WorkflowStep<'_>]) -> Node {
    let mut line = row()
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(AlignItems::Center)
        .gap(t.spacing.lg);
    for (i, step) in steps.iter().enumerate() {
        line = line.child_if(i > 0, || arrow(t)).child(workflow_step(t, step));
    }

    column()
        .width(Dimension::FULL)
        .padding(Spacing::axes(t.section_padding(), 0))
        .background(t.palette.card_bg)
        .border_top(t.hairline())
        .border_bottom(t.hairline())
        .child(
            column()
                .width(Dimension::FULL)
                .padding(Spacing::axes(0, t.spacing.lg))
                .child(section_heading(t, "The Kryon Workflow"))
                .child(line),
        )
        .build()
}

/// Logo, name, and a link row: website always, social profile when a handle
/// is given.
pub fn sponsor_card(t: &Theme, sponsor: &Sponsor<'_>) -> Node {
    let social = sponsor.twitter.map(|handle| {
        external_link(x_profile_url(handle), handle_label(handle))
            .font_size(14.0)
            .color(t.palette.secondary_text)
    });

    column()
        .align_items(AlignItems::Center)
        .gap(t.spacing.sm)
        .padding(t.spacing.lg)
        .background(t.palette.card_bg)
        .border(t.hairline())
        .border_radius(10)
        .child(image(sponsor.image).width(96).height(96).border_radius(48))
        .child(
            text(sponsor.name)
                .font_size(18.0)
                .font_weight(FontWeight::Weight(600))
                .color(t.palette.primary_text),
        )
        .child(
            row()
                .gap(t.spacing.md)
                .child(
                    external_link(sponsor.website, "Website")
                        .font_size(14.0)
                        .color(t.palette.accent),
                )
                .child_opt(social),
        )
        .build()
}

pub fn sponsors(t: &Theme, sponsors: &[Sponsor<'_>]) -> Node {
    column()
        .width(Dimension::FULL)
        .padding(Spacing::axes(t.section_padding(), t.spacing.lg))
        .border_top(t.hairline())
        .align_items(AlignItems::Center)
        .child(section_heading(t, "Sponsors"))
        .child(
            row()
                .gap(t.spacing.xl)
                .justify_content(JustifyContent::Center)
                .children(sponsors.iter().map(|s| sponsor_card(t, s))),
        )
        .build()
}

pub fn footer(t: &Theme) -> Node {
    let nav = |n: Node| n.font_size(14.0).color(t.palette.secondary_text);

    row()
        .width(Dimension::FULL)
        .padding(Spacing::axes(t.spacing.xxxl, 0))
        .border_top(t.hairline())
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(AlignItems::Center)
        .child(
            text(copyright_notice(2025, "Kryon Labs"))
                .font_size(14.0)
                .color(t.palette.secondary_text),
        )
        .child(
            row()
                .gap(t.spacing.lg)
                .child(nav(link("#features", "Features")))
                .child(nav(link("/docs", "Documentation")))
                .child(nav(external_link(
                    "https://github.com/kryonlabs/kryon/discussions",
                    "Community",
                )))
                .child(nav(external_link(
                    "https://github.com/kryonlabs/kryon/issues",
                    "Support",
                ))),
        )
        .build()
}

pub fn app() -> Result<AppConfig> {
    let t = &LANDING;
    let window = WindowConfig::new()
        .title(TITLE)
        .size(1400, 900)
        .background(t.palette.bg);

    AppConfig::new(window, || {
        column()
            .width(Dimension::FULL)
            .height(Dimension::FULL)
            .child(header(t))
            .child(hero(t))
            .child(features(t, FEATURES))
            .child(workflow(t, WORKFLOW))
            .child(sponsors(t, SPONSORS))
            .child(footer(t))
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Link, LinkTarget, NodeKind};

    fn links(node: &Node) -> Vec<&Link> {
        node.children()
            .iter()
            .map(|n| match &n.kind {
                NodeKind::Link(l) => l,
                other => panic!("expected link, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_sponsor_card_with_twitter() {
        let sponsor = Sponsor {
            name: "5bitcube",
            image: "assets/sponsors/5bitcube.jpg",
            website: "https://5bitcube.com/",
            twitter: Some("@5bitcube"),
        };
        let card = sponsor_card(&LANDING, &sponsor);

        assert_eq!(card.kind_name(), "column");
        let kinds: Vec<_> = card.children().iter().map(Node::kind_name).collect();
        assert_eq!(kinds, vec!["image", "text", "row"]);

        match &card.children()[0].kind {
            NodeKind::Image(img) => assert_eq!(img.src, "assets/sponsors/5bitcube.jpg"),
            other => panic!("expected image, got {:?}", other),
        }
        assert_eq!(card.children()[1].text(), Some("5bitcube"));

        let links = links(&card.children()[2]);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "https://5bitcube.com/");
        assert_eq!(links[0].text, "Website");
        assert_eq!(links[1].href, "https://x.com/5bitcube");
        assert_eq!(links[1].text, "@5bitcube");
        assert_eq!(links[1].target, Some(LinkTarget::Blank));
    }

    #[test]
    fn test_sponsor_card_without_twitter() {
        let sponsor = Sponsor {
            name: "5bitcube",
            image: "assets/sponsors/5bitcube.jpg",
            website: "https://5bitcube.com/",
            twitter: None,
        };
        let card = sponsor_card(&LANDING, &sponsor);
        let links = links(&card.children()[2]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://5bitcube.com/");
    }

    #[test]
    fn test_workflow_step_label() {
        let step = WorkflowStep {
            emoji: "⚙️",
            step: 2,
            title: "Compile to KRB",
            description: "Compile.",
        };
        let node = workflow_step(&LANDING, &step);
        assert_eq!(node.children()[1].text(), Some("2. Compile to KRB"));
    }

    #[test]
    fn test_workflow_places_arrows_between_steps() {
        let node = workflow(&LANDING, WORKFLOW);
        let line = &node.children()[0].children()[1];
        let kinds: Vec<_> = line.children().iter().map(Node::kind_name).collect();
        assert_eq!(kinds, vec!["column", "text", "column", "text", "column"]);
        assert_eq!(line.children()[1].text(), Some("→"));
    }

    #[test]
    fn test_features_two_per_row() {
        let node = features(&LANDING, FEATURES);
        let body = &node.children()[0];
        // heading + two rows
        assert_eq!(body.children().len(), 3);
        assert_eq!(body.children()[1].children().len(), 2);
        assert_eq!(body.children()[2].children().len(), 2);
        assert!(body.children()[1].style.margin_top.is_none());
        assert!(body.children()[2].style.margin_top.is_some());
    }

    #[test]
    fn test_sponsors_section_with_no_sponsors() {
        let node = sponsors(&LANDING, &[]);
        assert!(node.children()[1].children().is_empty());
    }

    #[test]
    fn test_composers_are_deterministic() {
        assert_eq!(header(&LANDING), header(&LANDING));
        assert_eq!(hero(&LANDING), hero(&LANDING));
        assert_eq!(footer(&LANDING), footer(&LANDING));
        assert_eq!(app().unwrap(), app().unwrap());
    }

    #[test]
    fn test_app_sections_in_order() {
        let app = app().unwrap();
        assert_eq!(app.title(), Some(TITLE));
        assert_eq!(app.window().width, Some(1400));
        assert_eq!(app.root().children().len(), 6);
        assert_eq!(
            app.root().children()[5].children()[0].text(),
            Some("© 2025 Kryon Labs. All rights reserved.")
        );
    }

    #[test]
    fn test_app_round_trips_through_json() {
        let app = app().unwrap();
        let back = AppConfig::from_value(app.to_value().unwrap()).unwrap();
        assert_eq!(app, back);
    }
}
