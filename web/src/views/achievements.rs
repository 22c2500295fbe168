use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::Milestone;

/// Timeline entries, newest last. Static content; edit here to add a
/// milestone.
pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        year: "2015",
        title: "Enrolled with the Bar Council",
        description: "Enrolled as an Advocate with the Bar Council of Tamil Nadu and Puducherry and began practice under a senior counsel in Madurai.",
        icon: "school",
        badge: "Foundation",
    },
    Milestone {
        year: "2017",
        title: "Independent Practice at Theni",
        description: "Opened an independent chamber near the District Court, Lakshmipuram, taking up criminal and civil briefs across the district.",
        icon: "gavel",
        badge: "Practice",
    },
    Milestone {
        year: "2019",
        title: "Notable Acquittal in Sessions Trial",
        description: "Secured a full acquittal in a contested Sessions trial after extended cross-examination of the prosecution witnesses.",
        icon: "balance",
        badge: "Criminal Defence",
    },
    Milestone {
        year: "2022",
        title: "Panel Counsel",
        description: "Empanelled as counsel for a cooperative bank, handling recovery suits and documentation review.",
        icon: "account_balance",
        badge: "Recognition",
    },
    Milestone {
        year: "2024",
        title: "High Court Appearances",
        description: "Regular appearances before the Madurai Bench of the Madras High Court in criminal appeals and writ matters.",
        icon: "workspace_premium",
        badge: "Appellate",
    },
];

/// Career timeline, alternating cards around a vertical line.
#[component]
pub fn AchievementsPage() -> impl IntoView {
    view! {
        <div class="achievements">
            <div class="achievements__header">
                <span class="achievements__kicker">"The Road So Far"</span>
                <h1 class="achievements__title">"Career Milestones"</h1>
                <p class="achievements__quote">
                    "\"Excellence is not an act, but a habit. Each milestone represents a commitment to the highest standards of the legal profession.\""
                </p>
            </div>

            <div class="achievements__timeline">
                {MILESTONES
                    .iter()
                    .enumerate()
                    .map(|(idx, m)| {
                        let side = if idx % 2 == 0 { "left" } else { "right" };
                        view! {
                            <div class=format!("achievements__entry achievements__entry--{}", side)>
                                <div class="achievements__marker">
                                    <span class="material-symbols-outlined">{m.icon}</span>
                                </div>
                                <div class="achievements__card">
                                    <span class="achievements__year">{m.year}</span>
                                    <span class="achievements__badge">{m.badge}</span>
                                    <h3>{m.title}</h3>
                                    <p>{m.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="achievements__footer">
                <h3>"Dedicated to the Bar"</h3>
                <p>
                    "ADV. J. SAMUVEL is committed to providing unwavering advocacy and sound legal counsel. With roots in Theni, he brings local understanding combined with high-level professional standards."
                </p>
                <A href="/contact" attr:class="achievements__cta">
                    "Contact for Counsel"
                </A>
            </div>
        </div>
    }
}
