use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::server::{login_admin, LoginData};
use crate::state::use_site_state;
use crate::utils::auth::store_token;

/// Staff login. Already-authenticated admins are bounced straight to
/// the dashboard.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let state = use_site_state();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if state.is_admin.get() {
                navigate("/admin/appointments", Default::default());
            }
        });
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    let submit_login = move |_| {
        loading.set(true);
        error_message.set(None);

        let login_data = LoginData {
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match login_admin(login_data).await {
                Ok(auth_response) => {
                    if auth_response.success {
                        if let Some(token) = &auth_response.token {
                            store_token(token);
                        }
                        state.is_admin.set(true);

                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/admin/appointments");
                        }
                    } else {
                        error_message.set(auth_response.error);
                    }
                }
                Err(e) => {
                    error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Staff Gateway"</h1>
                    <p>"Confidential Access Only"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login(());
                }>
                    <div class="auth-form-group">
                        <label>"Administrator Email"</label>
                        <Input
                            class="auth-input"
                            placeholder="Enter email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <label>"Secure Password"</label>
                        <Input
                            class="auth-input"
                            placeholder="••••••••"
                            input_type=InputType::Password
                            value=password
                        />
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Authorize Access"
                    </Button>
                </form>

                <div class="auth-footer">
                    <button
                        type="button"
                        class="auth-return-link"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "Return to Public Site"
                    </button>
                </div>
            </div>
        </div>
    }
}
