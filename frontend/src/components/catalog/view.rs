//! View rendering for the catalog browser: header, loading indicator, error
//! banner with retry, the card grid, and the pager. On a failed fetch the
//! previous page's cards stay on screen next to the banner.

use common::model::book::Book;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{
    author_line, format_downloads, language_line, lead_author_years, short_summary, subject_chips,
};
use super::messages::Msg;
use super::state::CatalogBrowser;

pub fn view(component: &CatalogBrowser, ctx: &Context<CatalogBrowser>) -> Html {
    let link = ctx.link();
    let pane = &component.pane;

    html! {
        <>
            <header style="margin-bottom: 2rem;">
                <h1 style="margin-bottom: 0.25rem;">{ "Project Gutenberg Books" }</h1>
                <p class="muted" style="margin: 0;">{ "A collection of freely available eBooks" }</p>
            </header>

            {
                if let Some(error) = &pane.error {
                    build_error_banner(error, link)
                } else {
                    html! {}
                }
            }
            {
                if pane.loading {
                    html! { <p class="muted" style="text-align: center; padding: 3rem 0;">{ "Loading\u{2026}" }</p> }
                } else {
                    html! {}
                }
            }

            <div class="book-grid">
                { for pane.books.iter().map(build_book_card) }
            </div>

            { build_pager(component, link) }
        </>
    }
}

fn build_error_banner(error: &str, link: &Scope<CatalogBrowser>) -> Html {
    html! {
        <div class="notice-error">
            { error }
            <button
                class="link-danger"
                style="margin-left: 1rem; text-decoration: underline;"
                onclick={link.callback(|_| Msg::Load)}
            >
                { "Retry" }
            </button>
        </div>
    }
}

fn build_book_card(book: &Book) -> Html {
    let (chips, overflow) = subject_chips(&book.subjects);

    html! {
        <div class="book-card" key={book.id.to_string()}>
            <div class="body">
                <h2 style="margin-top: 0; font-size: 1.2rem;">{ &book.title }</h2>
                <p style="margin: 0 0 0.25rem 0; font-size: 0.9rem;">{ author_line(&book.authors) }</p>
                {
                    if let Some(years) = lead_author_years(&book.authors) {
                        html! { <p class="muted" style="margin: 0 0 0.75rem 0; font-size: 0.8rem;">{ years }</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(summary) = short_summary(&book.summaries) {
                        html! { <p style="font-size: 0.9rem;">{ summary }</p> }
                    } else {
                        html! {}
                    }
                }
                <div>
                    { for chips.iter().map(|chip| html! { <span class="chip">{ chip }</span> }) }
                    {
                        if overflow > 0 {
                            html! { <span class="chip more">{ format!("+{} more", overflow) }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="footer">
                <span>{ format!("Downloads: {}", format_downloads(book)) }</span>
                <span>{ language_line(&book.languages) }</span>
            </div>
        </div>
    }
}

fn build_pager(component: &CatalogBrowser, link: &Scope<CatalogBrowser>) -> Html {
    let page = component.pane.page;

    html! {
        <div class="pager">
            <button
                class="btn btn-update"
                disabled={page == 1}
                onclick={link.callback(|_| Msg::Prev)}
            >
                { "Previous" }
            </button>
            <span class="muted">{ format!("Page {}", page) }</span>
            <button class="btn btn-update" onclick={link.callback(|_| Msg::Next)}>
                { "Next" }
            </button>
        </div>
    }
}
