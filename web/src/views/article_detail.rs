use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::state::use_site_state;

/// Single-article view resolved from the shared list by route id.
#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let state = use_site_state();
    let params = use_params_map();

    let article = Memo::new(move |_| {
        let id = params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())?;
        state.articles.get().into_iter().find(|a| a.id == id)
    });

    view! {
        <div class="article-detail">
            {move || match article.get() {
                Some(article) => view! {
                    <article class="article-detail__body">
                        <A href="/articles" attr:class="article-detail__back">
                            "← All Articles"
                        </A>
                        <div class="article-detail__meta">
                            <span class="article-detail__category">{article.category.label().to_string()}</span>
                            <span class="article-detail__date">{article.date.clone()}</span>
                        </div>
                        <h1>{article.title.clone()}</h1>
                        {(!article.image_url.is_empty()).then(|| view! {
                            <img class="article-detail__image" src=article.image_url.clone() alt=article.title.clone()/>
                        })}
                        <p class="article-detail__excerpt">{article.excerpt.clone()}</p>
                        <div class="article-detail__content">{article.content.clone()}</div>
                    </article>
                }.into_any(),
                None => view! {
                    <div class="article-detail__missing">
                        <h2>"Article not found"</h2>
                        <p>"This article may have been removed."</p>
                        <A href="/articles" attr:class="article-detail__back">
                            "← All Articles"
                        </A>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
