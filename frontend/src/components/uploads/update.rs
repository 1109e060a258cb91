//! Update function for the upload panel.
//!
//! Dropped and picked files funnel into the same `Msg::Accept` path. The
//! suffix filter runs synchronously so rejected names are reported at once;
//! accepted entries appear in the table immediately and their bytes are
//! filled in as the background reads complete.

use gloo_console::log;
use gloo_file::{futures::read_as_bytes, Blob};
use yew::prelude::*;

use common::panels::uploads::is_font_file;

use crate::toast::show_toast;

use super::messages::Msg;
use super::state::UploadPanel;

pub fn update(component: &mut UploadPanel, ctx: &Context<UploadPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Accept(files) => {
            component.drag_active = false;

            let names: Vec<String> = files.iter().map(|f| f.name()).collect();
            let outcome = component.list.accept(names);

            if !outcome.rejected.is_empty() {
                log!("rejected non-TTF uploads:", outcome.rejected.join(", "));
                show_toast(&format!(
                    "{} file(s) rejected. Only TTF files are allowed.",
                    outcome.rejected.len()
                ));
            }
            component.rejected = outcome.rejected;

            // Accepted ids line up with the files that passed the filter.
            let accepted_files = files.into_iter().filter(|f| is_font_file(&f.name()));
            for (id, file) in outcome.accepted.into_iter().zip(accepted_files) {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let blob = Blob::from(file);
                    if let Ok(bytes) = read_as_bytes(&blob).await {
                        link.send_message(Msg::BytesLoaded { id, bytes });
                    }
                });
            }
            true
        }
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::DragStateChanged(active) => {
            if component.drag_active == active {
                return false;
            }
            component.drag_active = active;
            true
        }
        Msg::BytesLoaded { id, bytes } => {
            component.list.attach_bytes(&id, bytes);
            true
        }
        Msg::Delete(id) => {
            component.list.delete(&id);
            true
        }
        Msg::DismissRejected => {
            component.rejected.clear();
            true
        }
    }
}
