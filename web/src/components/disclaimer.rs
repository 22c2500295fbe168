use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Bar Council of India compliance gate. Nothing renders until the
/// visitor agrees; acceptance is per page load, deliberately not
/// persisted.
#[component]
pub fn DisclaimerGate(children: ChildrenFn) -> impl IntoView {
    let agreed = RwSignal::new(false);
    let navigate = use_navigate();

    let agree = move |_| {
        agreed.set(true);
        // Entry always lands on the profile page
        navigate("/", Default::default());
    };

    let disagree = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("https://www.google.com");
        }
    };

    view! {
        <Show
            when=move || agreed.get()
            fallback=move || view! {
                <div class="disclaimer-overlay">
                    <div class="disclaimer-modal">
                        <div class="disclaimer-header">
                            <h2>"Legal Disclaimer"</h2>
                        </div>
                        <div class="disclaimer-body">
                            <p class="disclaimer-kicker">"Mandatory Regulatory Compliance"</p>
                            <p class="disclaimer-lead">
                                "The rules of the Bar Council of India do not permit advertisement or solicitation by Advocates in any form or manner."
                            </p>
                            <p>
                                "This website and the contents thereof are merely for informational purposes and not in the nature of solicitation or an advertisement. Similarly, any matter / information / content posted by "
                                <strong>"Adv.J.Samuvel"</strong>
                                " on this website shall not be construed as legal advice."
                            </p>
                            <p>
                                <strong>"Adv.J.Samuvel"</strong>
                                " takes no liability for consequences of any action taken by you relying on the matter / information / content posted on this website."
                            </p>
                            <p>
                                "By entering this website, you confirm and acknowledge that you have voluntarily sought the information relating to and/or posted by "
                                <strong>"Adv.J.Samuvel"</strong>
                                " and there has been no solicitation / advertisement / inducement by either "
                                <strong>"Adv.J.Samuvel"</strong>
                                " and/or its partners and/or its members."
                            </p>
                        </div>
                        <div class="disclaimer-actions">
                            <button class="disclaimer-disagree" on:click=disagree.clone()>
                                "I Disagree"
                            </button>
                            <button class="disclaimer-agree" on:click=agree.clone()>
                                "I Agree & Proceed"
                            </button>
                        </div>
                    </div>
                </div>
            }
            clone:children
        >
            {children()}
        </Show>
    }
}
