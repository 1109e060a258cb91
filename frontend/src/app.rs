//! Root component: a tab bar switching between the three panels. Tab state
//! is in-memory only; switching tabs remounts the target panel with fresh
//! state, and a reload discards everything.

use yew::{classes, html, Component, Context, Html};

use crate::components::catalog::CatalogBrowser;
use crate::components::groups::GroupManager;
use crate::components::uploads::UploadPanel;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Uploads,
    Groups,
    Catalog,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Uploads, Tab::Groups, Tab::Catalog];

    fn label(self) -> &'static str {
        match self {
            Tab::Uploads => "Fonts",
            Tab::Groups => "Font Groups",
            Tab::Catalog => "Books",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
}

pub struct App {
    active: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: Tab::Uploads,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                if self.active == tab {
                    return false;
                }
                self.active = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <nav class="tab-bar">
                    {
                        for Tab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            html! {
                                <button
                                    class={classes!("tab-btn", (self.active == tab).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                </nav>
                <div class="panel">
                    {
                        match self.active {
                            Tab::Uploads => html! { <UploadPanel /> },
                            Tab::Groups => html! { <GroupManager /> },
                            Tab::Catalog => html! { <CatalogBrowser /> },
                        }
                    }
                </div>
            </>
        }
    }
}
