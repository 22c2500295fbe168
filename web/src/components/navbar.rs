use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::use_site_state;
use crate::utils::auth::clear_token;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_site_state();
    let navigate = use_navigate();

    let logout = move |_| {
        clear_token();
        state.is_admin.set(false);
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Adv.J.Samuvel"
                    </A>
                    <span class="navbar__tagline">"Advocate, Theni"</span>
                </div>

                <div class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Home"
                    </A>
                    <A href="/achievements" attr:class="navbar__link">
                        "Achievements"
                    </A>
                    <A href="/articles" attr:class="navbar__link">
                        "Articles"
                    </A>
                    <A href="/contact" attr:class="navbar__link navbar__link--cta">
                        "Book Consultation"
                    </A>

                    <Show when=move || state.is_admin.get()>
                        <A href="/admin/appointments" attr:class="navbar__link navbar__link--admin">
                            "Dashboard"
                            {move || {
                                let pending = state.pending_count();
                                (pending > 0).then(|| view! {
                                    <span class="navbar__badge">{pending}</span>
                                })
                            }}
                        </A>
                        <button class="navbar__logout" on:click=logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
