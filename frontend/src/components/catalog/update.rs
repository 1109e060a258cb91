//! Update function for the catalog browser. `Msg::Load` issues the fetch;
//! the response re-enters as `Loaded`/`Failed` carrying its request token,
//! and the state drops anything stale.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::book::BookPage;

use super::messages::Msg;
use super::state::CatalogBrowser;

const CATALOG_BASE_URL: &str = "https://gutendex.com";

pub fn update(component: &mut CatalogBrowser, ctx: &Context<CatalogBrowser>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let token = component.pane.begin_load();
            let page = component.pane.page;
            let link = ctx.link().clone();

            spawn_local(async move {
                let url = format!("{}/books/?page={}", CATALOG_BASE_URL, page);
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => match response.json::<BookPage>().await {
                        Ok(body) => link.send_message(Msg::Loaded {
                            token,
                            books: body.results,
                        }),
                        Err(err) => link.send_message(Msg::Failed {
                            token,
                            message: format!("Failed to read book list: {}", err),
                        }),
                    },
                    Ok(response) => link.send_message(Msg::Failed {
                        token,
                        message: format!("Failed to fetch books (HTTP {})", response.status()),
                    }),
                    Err(err) => link.send_message(Msg::Failed {
                        token,
                        message: format!("Failed to fetch books: {}", err),
                    }),
                }
            });
            true
        }
        Msg::Next => {
            component.pane.next();
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Prev => {
            // Already on page 1: nothing to do, no fetch.
            if component.pane.prev().is_none() {
                return false;
            }
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Loaded { token, books } => component.pane.apply_success(token, books),
        Msg::Failed { token, message } => {
            let applied = component.pane.apply_failure(token, message.clone());
            if applied {
                error!("catalog fetch failed:", message);
            }
            applied
        }
    }
}
