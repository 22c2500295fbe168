use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{AdminAuthGuard, DisclaimerGate, Navbar};
use crate::state::SiteState;
use crate::utils::auth::has_admin_session;
use crate::views::{
    achievements::AchievementsPage, admin_appointments::AdminAppointmentsPage,
    admin_login::AdminLoginPage, article_detail::ArticleDetailPage, articles::ArticlesPage,
    contact::ContactPage, home::HomePage, not_found::NotFoundPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = SiteState::new();
    provide_context(state);

    // Initial data fetch plus session restore from the stored token
    Effect::new(move |_| {
        state.refresh_articles();
        state.refresh_appointments();
        state.is_admin.set(has_admin_session());
    });

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="Adv.J.Samuvel | Advocate, Theni"/>

        <ConfigProvider>
            <Router>
                <DisclaimerGate>
                    <Navbar/>
                    <main>
                        <Routes fallback=NotFoundPage>
                            <Route path=path!("/") view=HomePage/>
                            <Route path=path!("/achievements") view=AchievementsPage/>
                            <Route path=path!("/articles") view=ArticlesPage/>
                            <Route path=path!("/articles/:id") view=ArticleDetailPage/>
                            <Route path=path!("/contact") view=ContactPage/>
                            <Route path=path!("/staff-access") view=AdminLoginPage/>
                            <Route
                                path=path!("/admin/appointments")
                                view=|| view! {
                                    <AdminAuthGuard>
                                        <AdminAppointmentsPage/>
                                    </AdminAuthGuard>
                                }
                            />
                        </Routes>
                    </main>
                    <a
                        href="https://wa.me/919080485223"
                        target="_blank"
                        class="whatsapp-float"
                        aria-label="Chat on WhatsApp"
                    >
                        "WhatsApp"
                    </a>
                </DisclaimerGate>
            </Router>
        </ConfigProvider>
    }
}
