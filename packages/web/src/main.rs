//! Shoja — Dioxus fullstack landing page
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Point the waitlist client at the API server (server side only)
    #[cfg(feature = "server")]
    if let Ok(url) = std::env::var("API_URL") {
        api::init_api_url(url);
    }

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
