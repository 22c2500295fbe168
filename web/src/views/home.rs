use leptos::prelude::*;
use leptos_router::components::A;

const PROFILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1556155092-490a1ba16284?auto=format&fit=crop&q=80&w=800";

struct PracticeArea {
    title: &'static str,
    description: &'static str,
}

const PRACTICE_AREAS: [PracticeArea; 3] = [
    PracticeArea {
        title: "Criminal Law",
        description: "Bail applications, trial defence and appeals before the District and Sessions Courts.",
    },
    PracticeArea {
        title: "Family Matters",
        description: "Matrimonial disputes, maintenance, custody and succession proceedings handled with discretion.",
    },
    PracticeArea {
        title: "Civil Litigation",
        description: "Property disputes, injunctions, recovery suits and documentation for the Theni district.",
    },
];

/// Public profile landing page. Everything here is static content.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="home__hero">
                <div class="home__hero-text">
                    <span class="home__kicker">"Advocate & Legal Consultant"</span>
                    <h1 class="home__title">"Adv.J.Samuvel"</h1>
                    <p class="home__subtitle">"J. Samuvel BA., LL.B"</p>
                    <p class="home__lead">
                        "Counsel practising before the District Court, Theni, with a focus on criminal defence, family matters and civil litigation. Clear advice, diligent preparation and representation rooted in the local courts."
                    </p>
                    <div class="home__actions">
                        <A href="/contact" attr:class="home__cta">
                            "Book a Consultation"
                        </A>
                        <A href="/achievements" attr:class="home__secondary">
                            "Professional Journey"
                        </A>
                    </div>
                </div>
                <div class="home__hero-image">
                    <img src=PROFILE_IMAGE alt="Adv.J.Samuvel"/>
                </div>
            </section>

            <section class="home__practice">
                <h2 class="home__section-title">"Areas of Practice"</h2>
                <div class="home__practice-grid">
                    {PRACTICE_AREAS
                        .iter()
                        .map(|area| view! {
                            <div class="home__practice-card">
                                <h3>{area.title}</h3>
                                <p>{area.description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__office">
                <h2 class="home__section-title">"Chamber"</h2>
                <div class="home__office-grid">
                    <div class="home__office-item">
                        <span class="home__office-label">"Office Address"</span>
                        <p>"No.06, MM Complex," <br/> "Near District Court Lakshmipuram," <br/> "Theni - 625523"</p>
                    </div>
                    <div class="home__office-item">
                        <span class="home__office-label">"Mobile Number"</span>
                        <p>"+91 9080485223"</p>
                    </div>
                    <div class="home__office-item">
                        <span class="home__office-label">"Residence"</span>
                        <p>"Parasuramapuram, Batlagundu."</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
