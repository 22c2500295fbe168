use crate::utils::auth::has_admin_session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Hook resolving the admin session after hydration. localStorage is
/// unreachable during SSR, so the guard starts in a loading state.
pub fn use_admin_auth() -> (Signal<bool>, Signal<bool>) {
    let is_authenticated = RwSignal::new(false);
    let is_loading = RwSignal::new(true);

    Effect::new(move |_| {
        is_authenticated.set(has_admin_session());
        is_loading.set(false);
    });

    (is_authenticated.into(), is_loading.into())
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-loading-title">
                    "Verifying access..."
                </div>
                <div class="auth-guard-loading-subtitle">
                    "Please wait while we check your credentials"
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AccessDeniedState() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        navigate("/staff-access", Default::default());
    });

    view! {
        <div class="auth-guard-container">
            <div class="auth-guard-content">
                <div class="auth-guard-denied-title">
                    "Access Denied"
                </div>
                <div class="auth-guard-denied-subtitle">
                    "Redirecting to staff login..."
                </div>
            </div>
        </div>
    }
}

/// Wraps admin-only routes; non-admin visitors are sent to the login page.
#[component]
pub fn AdminAuthGuard(children: ChildrenFn) -> impl IntoView {
    let (is_authenticated, is_loading) = use_admin_auth();

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=move || view! { <LoadingState/> }
        >
            <Show
                when=move || is_authenticated.get()
                fallback=move || view! { <AccessDeniedState/> }
                clone:children
            >
                {children()}
            </Show>
        </Show>
    }
}
