use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use shared_types::{Article, ArticleDraft, Category};
use thaw::*;

use crate::server::{create_article, delete_article, update_article};
use crate::state::use_site_state;
use crate::utils::auth::stored_token;

/// Which record the inline editor is working on.
#[derive(Clone, PartialEq)]
enum EditorTarget {
    Closed,
    New,
    Existing(i64),
}

/// Public article list with the admin's inline editor. Every mutation
/// goes through a server function and refetches the whole list.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let state = use_site_state();

    let editor_target = RwSignal::new(EditorTarget::Closed);
    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new("General".to_string());
    let date = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let is_featured = RwSignal::new(false);
    let is_saving = RwSignal::new(false);
    let editor_error = RwSignal::new(Option::<String>::None);

    let open_new = move |_| {
        title.set(String::new());
        excerpt.set(String::new());
        content.set(String::new());
        category.set("General".to_string());
        date.set(String::new());
        image_url.set(String::new());
        is_featured.set(false);
        editor_error.set(None);
        editor_target.set(EditorTarget::New);
    };

    let open_existing = move |article: Article| {
        title.set(article.title);
        excerpt.set(article.excerpt);
        content.set(article.content);
        category.set(article.category.label().to_string());
        date.set(article.date);
        image_url.set(article.image_url);
        is_featured.set(article.is_featured);
        editor_error.set(None);
        editor_target.set(EditorTarget::Existing(article.id));
    };

    let save = move |_| {
        if title.get().trim().is_empty() || content.get().trim().is_empty() {
            editor_error.set(Some("Title and content are required".to_string()));
            return;
        }

        let Some(token) = stored_token() else {
            editor_error.set(Some("Your session has expired. Please log in again.".to_string()));
            return;
        };

        is_saving.set(true);
        editor_error.set(None);

        let draft = ArticleDraft {
            title: title.get(),
            excerpt: excerpt.get(),
            content: content.get(),
            category: Category::from(category.get()),
            date: date.get(),
            image_url: image_url.get(),
            is_featured: is_featured.get(),
        };
        let target = editor_target.get();

        spawn_local(async move {
            let result = match target {
                EditorTarget::New => create_article(token, draft).await,
                EditorTarget::Existing(id) => {
                    let article = Article {
                        id,
                        title: draft.title,
                        excerpt: draft.excerpt,
                        content: draft.content,
                        category: draft.category,
                        date: draft.date,
                        image_url: draft.image_url,
                        is_featured: draft.is_featured,
                    };
                    update_article(token, article).await
                }
                EditorTarget::Closed => Ok(()),
            };

            match result {
                Ok(()) => {
                    editor_target.set(EditorTarget::Closed);
                    state.refresh_articles();
                }
                Err(e) => {
                    editor_error.set(Some(format!("Failed to save article: {}", e)));
                }
            }
            is_saving.set(false);
        });
    };

    let remove = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to permanently delete this article?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = stored_token() else {
            return;
        };

        spawn_local(async move {
            match delete_article(token, id).await {
                Ok(()) => state.refresh_articles(),
                Err(e) => leptos::logging::log!("Failed to delete article: {}", e),
            }
        });
    };

    view! {
        <div class="articles">
            <div class="articles__header">
                <div>
                    <h1>"Legal Articles"</h1>
                    <p>"Commentary and notes on criminal, family and civil practice."</p>
                </div>
                <Show when=move || state.is_admin.get()>
                    <Button class="articles__new-btn" on_click=open_new>
                        "New Article"
                    </Button>
                </Show>
            </div>

            <Show when=move || editor_target.get() != EditorTarget::Closed>
                <div class="articles__editor">
                    <h3>
                        {move || match editor_target.get() {
                            EditorTarget::Existing(_) => "Edit Article",
                            _ => "New Article",
                        }}
                    </h3>

                    {move || editor_error.get().map(|msg| view! {
                        <div class="articles__editor-error">{msg}</div>
                    })}

                    <div class="articles__editor-row">
                        <Input class="articles__editor-input" placeholder="Title" value=title/>
                        <Input class="articles__editor-input" placeholder="Display date, e.g. March 12, 2025" value=date/>
                    </div>
                    <Input class="articles__editor-input" placeholder="Short excerpt" value=excerpt/>
                    <Input class="articles__editor-input" placeholder="Image URL" value=image_url/>

                    <div class="articles__editor-row">
                        <select
                            class="articles__editor-select"
                            on:change=move |ev| category.set(event_target_value(&ev))
                            prop:value=move || category.get()
                        >
                            {Category::LABELS
                                .iter()
                                .map(|label| view! { <option value=*label>{*label}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <label class="articles__editor-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || is_featured.get()
                                on:change=move |ev| is_featured.set(event_target_checked(&ev))
                            />
                            "Featured"
                        </label>
                    </div>

                    <Textarea class="articles__editor-content" placeholder="Article content..." value=content/>

                    <div class="articles__editor-actions">
                        <Button
                            class="articles__editor-save"
                            loading=Signal::from(is_saving)
                            on_click=save
                        >
                            "Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| editor_target.set(EditorTarget::Closed)
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="articles__grid">
                <For
                    each=move || state.articles.get()
                    key=|article| article.id
                    children=move |article| {
                        let detail_href = format!("/articles/{}", article.id);
                        let edit_article = article.clone();
                        let article_id = article.id;

                        view! {
                            <div class="articles__card" class:featured=article.is_featured>
                                {(!article.image_url.is_empty()).then(|| view! {
                                    <img class="articles__card-image" src=article.image_url.clone() alt=article.title.clone()/>
                                })}
                                <div class="articles__card-body">
                                    <div class="articles__card-meta">
                                        <span class="articles__card-category">{article.category.label().to_string()}</span>
                                        <span class="articles__card-date">{article.date.clone()}</span>
                                        {article.is_featured.then(|| view! {
                                            <span class="articles__card-featured">"Featured"</span>
                                        })}
                                    </div>
                                    <h3>{article.title.clone()}</h3>
                                    <p>{article.excerpt.clone()}</p>
                                    <div class="articles__card-actions">
                                        <A href=detail_href attr:class="articles__read-more">
                                            "Read Article"
                                        </A>
                                        <Show when=move || state.is_admin.get()>
                                            {
                                                let edit_article = edit_article.clone();
                                                view! {
                                                    <button
                                                        class="articles__edit-btn"
                                                        on:click=move |_| open_existing(edit_article.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="articles__delete-btn"
                                                        on:click=move |_| remove(article_id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            }
                                        </Show>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />

                <Show when=move || state.articles.get().is_empty()>
                    <div class="articles__empty">
                        <p>"No articles published yet."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
