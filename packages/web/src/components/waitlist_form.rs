//! Waitlist signup form
//!
//! The only interactive element on the page. One request is in flight at a
//! time: the submit control is disabled until the round trip settles.

use dioxus::prelude::*;

use crate::api::WaitlistResponse;

#[component]
pub fn WaitlistForm() -> Element {
    let mut email = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let handle_submit = move |_| {
        if email().trim().is_empty() || is_submitting() {
            return;
        }

        let email_value = email().trim().to_string();

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            match join_waitlist(email_value).await {
                Ok(WaitlistResponse { ok: true, .. }) => {
                    success.set(true);
                    // only a settled success clears the input
                    email.set(String::new());
                }
                Ok(WaitlistResponse { error: message, .. }) => {
                    error.set(Some(message.unwrap_or_else(|| {
                        "Failed to join the waitlist. Please try again.".to_string()
                    })));
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "waitlist",

            if success() {
                div {
                    class: "waitlist-success",
                    p { class: "waitlist-success-title", "You're on the list!" }
                    p { "We'll reach out as we expand access." }
                }
            } else {
                form {
                    class: "waitlist-form",
                    onsubmit: handle_submit,

                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        placeholder: "you@company.com",
                        class: "waitlist-input",
                        required: true
                    }

                    button {
                        r#type: "submit",
                        class: "waitlist-button",
                        disabled: is_submitting(),
                        if is_submitting() {
                            "Joining..."
                        } else {
                            "Join the waitlist"
                        }
                    }
                }

                // the typed address stays put on failure so it can be corrected
                if let Some(err) = error() {
                    p { class: "waitlist-error", "{err}" }
                }
            }
        }
    }
}

/// Forward the signup to the waitlist API.
#[server]
async fn join_waitlist(email: String) -> Result<WaitlistResponse, ServerFnError> {
    use crate::api::WaitlistClient;

    let client = WaitlistClient::from_env();
    client
        .join_waitlist(&email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
