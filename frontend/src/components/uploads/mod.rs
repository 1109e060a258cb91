//! Font upload panel: a drag-and-drop zone (doubling as a click-to-pick
//! target via a hidden file input), a rejection notice for files that fail
//! the `.ttf` filter, and a preview table of everything accepted so far.
//!
//! The accepted-list logic lives in `common::panels::uploads`; this module
//! only wires it to browser events and the asynchronous file reads.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadPanel;

impl Component for UploadPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
