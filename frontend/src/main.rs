use crate::app::App;

mod app;
mod components;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
