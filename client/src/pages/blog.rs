//! Blog index: search box, category chips, featured article, post grid.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card};
use crate::content::blog::{BlogCategory, BlogPost, CATEGORIES, FEATURED_POST, POSTS, category_icon, display_date};
use crate::state::blog::BlogFilter;

#[must_use]
pub fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip--active" } else { "chip" }
}

#[must_use]
pub fn chip_label(category: &BlogCategory) -> String {
    format!("{} ({})", category.label, category.count)
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let filter = RwSignal::new(BlogFilter::default());
    let visible = Memo::new(move |_| filter.with(|f| f.apply(POSTS).into_iter().copied().collect::<Vec<_>>()));

    view! {
        <div class="page page--blog">
            <section class="hero hero--compact">
                <div class="container hero__inner">
                    <Badge variant=BadgeVariant::Glass icon=IconKind::BookOpen class="hero__badge">
                        "Insights & Resources"
                    </Badge>
                    <h1 class="hero__title">
                        "Expert Knowledge & " <span class="gradient-text">"Industry Insights"</span>
                    </h1>
                    <p class="hero__lead">
                        "Stay ahead of the curve with expert insights, industry trends, and best "
                        "practices in customer service and debt collection."
                    </p>

                    <div class="blog-search">
                        <label class="blog-search__field">
                            <Icon kind=IconKind::Search class="blog-search__icon"/>
                            <input
                                class="field__input blog-search__input"
                                type="search"
                                placeholder="Search articles..."
                                prop:value=move || filter.with(|f| f.query.clone())
                                on:input=move |ev| {
                                    let query = event_target_value(&ev);
                                    filter.update(|f| f.query = query);
                                }
                            />
                        </label>
                        <Button variant=ButtonVariant::Outline icon=IconKind::Filter>
                            "Filter"
                        </Button>
                    </div>

                    <div class="chips" role="group" aria-label="Categories">
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                let id = category.id;
                                let selected = move || filter.with(|f| f.category == id);
                                view! {
                                    <button
                                        class=move || chip_class(selected())
                                        aria-pressed=move || selected().to_string()
                                        on:click=move |_| filter.update(|f| f.category = id.to_owned())
                                    >
                                        {chip_label(category)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <Badge icon=IconKind::TrendingUp class="featured__badge">"Featured Article"</Badge>
                    <Card class="featured">
                        <div class="featured__body">
                            <Badge variant=BadgeVariant::Glass icon=category_icon(FEATURED_POST.category)>
                                {FEATURED_POST.category}
                            </Badge>
                            <h2 class="featured__title">{FEATURED_POST.title}</h2>
                            <p class="featured__excerpt">{FEATURED_POST.excerpt}</p>
                            <PostMeta post=FEATURED_POST/>
                            <Button icon=IconKind::ArrowRight>"Read Full Article"</Button>
                        </div>
                    </Card>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <header class="section-header">
                        <h2 class="section-header__title">"Recent Articles"</h2>
                        <p class="section-header__lead">
                            "Expert insights and practical advice from our team of industry professionals."
                        </p>
                    </header>

                    <div class="grid grid--3">
                        <For
                            each=move || visible.get()
                            key=|post| post.id
                            children=|post| view! { <PostCard post=post/> }
                        />
                    </div>

                    <Show
                        when=move || visible.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <div class="blog-more">
                                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg>
                                        "Load More Articles"
                                    </Button>
                                </div>
                            }
                        }
                    >
                        <div class="blog-empty">
                            <p class="blog-empty__text">"No articles found matching your search criteria."</p>
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |()| filter.update(BlogFilter::clear))
                            >
                                "Clear Filters"
                            </Button>
                        </div>
                    </Show>
                </div>
            </section>

            <Newsletter/>
        </div>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    view! {
        <Card class="post-card">
            <Badge variant=BadgeVariant::Glass icon=category_icon(post.category) class="post-card__category">
                {post.category}
            </Badge>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <PostMeta post=post/>
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="btn--block" icon=IconKind::ArrowRight>
                "Read More"
            </Button>
        </Card>
    }
}

#[component]
fn PostMeta(post: BlogPost) -> impl IntoView {
    view! {
        <div class="post-meta">
            <span class="post-meta__item" title=post.author_role>
                <Icon kind=IconKind::User class="post-meta__icon"/>
                {post.author}
            </span>
            <span class="post-meta__item">
                <Icon kind=IconKind::Clock class="post-meta__icon"/>
                {post.read_time}
            </span>
            <span class="post-meta__item">
                <Icon kind=IconKind::Calendar class="post-meta__icon"/>
                <time datetime=post.date>{display_date(post.date)}</time>
            </span>
        </div>
    }
}

/// Sign-up block. There is no mailing list behind it; the button only
/// acknowledges the click.
#[component]
fn Newsletter() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let acknowledged = RwSignal::new(false);

    view! {
        <section class="section newsletter">
            <div class="container container--narrow">
                <Card class="newsletter__card">
                    <Icon kind=IconKind::Mail class="newsletter__icon"/>
                    <h2 class="newsletter__title">
                        "Stay " <span class="gradient-text">"Informed"</span>
                    </h2>
                    <p class="newsletter__lead">
                        "Get the latest insights, trends, and best practices delivered to your inbox."
                    </p>
                    <div class="newsletter__form">
                        <input
                            class="field__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Button icon=IconKind::Send on_click=Callback::new(move |()| acknowledged.set(true))>
                            "Subscribe"
                        </Button>
                    </div>
                    <Show when=move || acknowledged.get()>
                        <p class="form-status form-status--ok">"Thanks! We'll be in touch."</p>
                    </Show>
                    <p class="newsletter__fine-print">"No spam, unsubscribe at any time."</p>
                </Card>
            </div>
        </section>
    }
}
