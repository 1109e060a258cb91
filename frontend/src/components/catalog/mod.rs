//! Paginated book browser over the public Gutendex catalog. Page state and
//! the stale-response guard live in `common::panels::catalog`; this module
//! wires them to `gloo_net` fetches and card rendering.
//!
//! The first page is fetched once on first render, guarded by the `loaded`
//! flag so re-renders never refetch.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CatalogBrowser;

impl Component for CatalogBrowser {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogBrowser::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
