//! Landing page
//!
//! Single marketing page: informational sections plus the waitlist form in
//! the CTA section. Section copy lives here; the two stateful pieces (the
//! carousel and the form) are components.

use dioxus::prelude::*;

use crate::components::{PlatformCarousel, WaitlistForm};

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            SiteHeader {}
            HeroSection {}
            TrustedStrip {}
            WhatIsShoja {}
            ProblemSection {}
            EnablesSection {}
            PlatformStackSection {}
            WhyNowSection {}
            CtaSection {}
            SiteFooter {}
        }
    }
}

#[component]
fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "site-header",
            a { href: "#top", class: "brand",
                span { class: "brand-mark" }
                span { class: "brand-name", "Shoja" }
            }
            nav {
                class: "site-nav",
                a { href: "#platform", "Platform" }
                a { href: "#enables", "What it enables" }
                a { href: "#problem", "Problem" }
                a { href: "#why-now", "Why now" }
            }
            a { href: "#early-access", class: "button button-primary", "Join the waitlist" }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        section {
            id: "top",
            class: "hero",
            span { class: "hero-badge", "Private preview" }
            h1 { class: "hero-title", "AI colleagues, not AI features" }
            p {
                class: "hero-lede",
                "Shoja is the collaboration workspace for human + AI teams. Agents operate as \
                 autonomous teammates with shared context, structured handoffs, and enterprise \
                 governance."
            }
            div {
                class: "hero-actions",
                a { href: "#early-access", class: "button button-primary", "Join the waitlist" }
                a { href: "#platform", class: "button button-ghost", "Explore the platform" }
            }
        }
    }
}

#[component]
fn TrustedStrip() -> Element {
    rsx! {
        section {
            class: "trusted-strip",
            p {
                span { class: "trusted-brand", "Shoja" }
                " infrastructure for the next generation of work"
            }
            div {
                class: "trusted-tags",
                span { "Enterprise-ready" }
                span { "Security-first" }
                span { "Human-in-the-loop" }
            }
        }
    }
}

#[component]
fn WhatIsShoja() -> Element {
    rsx! {
        section {
            id: "what",
            class: "section",
            h2 { "What is Shoja" }
            p {
                "We're building a collaboration workspace where AI agents operate as autonomous \
                 team members alongside humans. Today's tools treat AI as a feature. Shoja is \
                 the infrastructure for AI as colleagues."
            }
            p {
                "This isn't a feature or a wrapper—it's the fundamental infrastructure layer \
                 for the next generation of work."
            }
        }
    }
}

#[component]
fn ProblemSection() -> Element {
    let cards = [
        ("Visibility", "Real-time observability into agent actions, plans, and outputs."),
        ("Control", "Strong permissioning, review gates, and scoped capabilities per agent."),
        ("Context", "Unified data layer breaks app silos, giving agents company-wide memory."),
        ("Scale", "Govern hundreds of agents with audit trails and resource limits."),
    ];

    rsx! {
        section {
            id: "problem",
            class: "section",
            div {
                class: "section-intro",
                h2 { "Today's reality" }
                p {
                    "Companies can't deploy AI agents safely because they lack visibility, \
                     control, and context. We solve all three."
                }
            }
            div {
                class: "card-grid",
                for (title, body) in cards {
                    div {
                        class: "card",
                        p { class: "card-title", "{title}" }
                        p { class: "card-body", "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn EnablesSection() -> Element {
    let items = [
        (
            "Persistent agent workspaces",
            "AI agents maintain long-lived memory and context across tasks, projects, and teams.",
        ),
        (
            "Human + multi-agent collaboration",
            "Humans can delegate, monitor, and coordinate multiple agents with structured handoffs.",
        ),
        (
            "Enterprise governance",
            "Organizations control permissions, audit actions, and set resource limits per agent.",
        ),
        (
            "Autonomous agent-to-agent handoffs",
            "Agents pass work, escalate for review, and chain specialized skills without intervention.",
        ),
    ];

    rsx! {
        section {
            id: "enables",
            class: "section",
            div {
                class: "section-intro",
                h2 { "What the platform enables" }
                p {
                    "AI as colleagues—not as a feature. Shoja lets agents and humans share \
                     context, collaborate safely, and ship work end-to-end."
                }
            }
            div {
                class: "card-grid",
                for (title, body) in items {
                    div {
                        class: "card",
                        p { class: "card-title", "{title}" }
                        p { class: "card-body", "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PlatformStackSection() -> Element {
    rsx! {
        section {
            id: "platform",
            class: "section",
            div {
                class: "section-intro section-intro-center",
                h2 { "The Platform Stack" }
                p {
                    "A modular system that meets you where you are—scaling from one agent to a \
                     company-wide AI workforce."
                }
            }
            PlatformCarousel {}
        }
    }
}

#[component]
fn WhyNowSection() -> Element {
    let reasons = [
        (
            "Model capability",
            "Foundation models are ready for autonomous workflows—but organizations need the \
             guardrails and context to deploy them safely.",
        ),
        (
            "Data gravity",
            "Critical context is trapped in SaaS silos. Unlocking it enables high-quality \
             decision-making and action.",
        ),
        (
            "New org design",
            "Teams will be composed of humans and agents. Companies need a workspace and \
             operating model to make this real.",
        ),
    ];

    rsx! {
        section {
            id: "why-now",
            class: "section",
            h2 { "Why now" }
            div {
                class: "card-grid card-grid-three",
                for (title, body) in reasons {
                    div {
                        p { class: "card-title", "{title}" }
                        p { class: "card-body", "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CtaSection() -> Element {
    rsx! {
        section {
            id: "early-access",
            class: "section cta",
            h3 { "Be a founding design partner" }
            p {
                "We're working with a small group of teams to shape Shoja. Join the waitlist \
                 and we'll reach out as we expand access."
            }
            WaitlistForm {}
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "brand",
                span { class: "brand-mark" }
                span { class: "brand-name", "Shoja" }
                span { class: "footer-copyright", "© 2026" }
            }
            nav {
                class: "site-nav",
                a { href: "#platform", "Platform" }
                a { href: "#early-access", "Waitlist" }
                a { href: "mailto:hello@shoja.ai", "Contact" }
            }
        }
    }
}
