//! Platform stack carousel
//!
//! Rotates through the platform layers on a fixed interval. Hovering
//! pauses rotation without resetting it; the dots select a slide directly.

use dioxus::prelude::*;

struct StackLayer {
    name: &'static str,
    desc: &'static str,
    bullets: [&'static str; 3],
}

const LAYERS: [StackLayer; 4] = [
    StackLayer {
        name: "Unified Data Layer",
        desc: "Companies' data from Slack, Zendesk, GitHub, etc. flows into an \
               owned data lake—breaking SaaS data silos.",
        bullets: [
            "Connectors with row-level governance",
            "High-signal embeddings and RAG-ready indexing",
            "Customer, product, and operational context in one place",
        ],
    },
    StackLayer {
        name: "Collaboration Workspace",
        desc: "Humans and AI agents work together with structured handoffs, \
               review gates, and real-time visibility into agent actions.",
        bullets: [
            "Multi-agent rooms and projects",
            "Plans, traces, and explainability built-in",
            "Human-in-the-loop checkpoints where it matters",
        ],
    },
    StackLayer {
        name: "Governance Infrastructure",
        desc: "Enterprise-grade controls for permissions, compliance, audit \
               trails, and resource limits per agent.",
        bullets: [
            "Capability-scoped permissions",
            "Environment and data sandboxing",
            "Full audit and policy enforcement",
        ],
    },
    StackLayer {
        name: "Agent Marketplace",
        desc: "One-click deploy specialized agents that instantly understand \
               your company's entire context.",
        bullets: [
            "Best-in-class agents across functions",
            "Company-aware from day one",
            "Bring your own models and tools",
        ],
    },
];

/// How long each slide stays up before auto-advancing.
#[cfg(feature = "web")]
const ROTATE_INTERVAL_MS: u32 = 6_000;

/// Next slide index, wrapping at the end.
fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[component]
pub fn PlatformCarousel() -> Element {
    let mut active = use_signal(|| 0usize);
    let mut paused = use_signal(|| false);

    // Auto-advance only runs in the browser build; SSR renders the first
    // slide and hydration takes over from there.
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(ROTATE_INTERVAL_MS).await;
            if !paused() {
                active.set(next_slide(active(), LAYERS.len()));
            }
        }
    });

    let layer = &LAYERS[active() % LAYERS.len()];

    rsx! {
        div {
            class: "stack-carousel",
            onmouseenter: move |_| paused.set(true),
            onmouseleave: move |_| paused.set(false),

            div {
                class: "stack-slide",
                h3 { class: "stack-name", "{layer.name}" }
                p { class: "stack-desc", "{layer.desc}" }
                ul {
                    class: "stack-bullets",
                    for bullet in layer.bullets {
                        li { "{bullet}" }
                    }
                }
            }

            div {
                class: "stack-dots",
                for (index, layer) in LAYERS.iter().enumerate() {
                    button {
                        class: if index == active() { "stack-dot stack-dot-active" } else { "stack-dot" },
                        aria_label: "{layer.name}",
                        onclick: move |_| active.set(index),
                    }
                }
            }
        }
    }
}
