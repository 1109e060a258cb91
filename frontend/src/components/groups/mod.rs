//! Font group manager: a create/edit form over a draft row list plus a
//! table of committed groups. All list and validation semantics live in
//! `common::panels::groups`; this module handles events, the delete
//! confirmation dialog, and rendering.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::GroupManager;

impl Component for GroupManager {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GroupManager::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
