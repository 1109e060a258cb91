//! View rendering for the upload panel.
//!
//! The dropzone and the hidden file input feed the same accept path. Each
//! stored font is registered as an inline `@font-face` over a base64 data
//! URL so the preview column renders in the actual uploaded face once its
//! bytes have been read.

use base64::engine::general_purpose;
use base64::Engine as _;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UploadPanel;

pub fn view(component: &UploadPanel, ctx: &Context<UploadPanel>) -> Html {
    let link = ctx.link();

    html! {
        <>
            { font_face_styles(component) }
            { build_dropzone(component, link) }
            { build_rejected_notice(component, link) }
            { build_font_table(component, link) }
        </>
    }
}

fn build_dropzone(component: &UploadPanel, link: &Scope<UploadPanel>) -> Html {
    let class = if component.drag_active {
        "dropzone active"
    } else {
        "dropzone"
    };

    html! {
        <div
            class={class}
            onclick={link.callback(|_| Msg::OpenFilePicker)}
            ondragover={link.callback(|e: DragEvent| {
                e.prevent_default();
                Msg::DragStateChanged(true)
            })}
            ondragleave={link.callback(|_: DragEvent| Msg::DragStateChanged(false))}
            ondrop={link.callback(|e: DragEvent| {
                e.prevent_default();
                Msg::Accept(files_from(e.data_transfer().and_then(|dt| dt.files())))
            })}
        >
            <input
                type="file"
                multiple=true
                accept=".ttf"
                style="display: none;"
                ref={component.file_input_ref.clone()}
                // The programmatic click must not bubble back into the
                // dropzone's own onclick.
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let files = files_from(input.files());
                    // Allow re-picking the same file later.
                    input.set_value("");
                    Msg::Accept(files)
                })}
            />
            <p><strong>{ "Click to upload" }</strong>{ " or drag and drop" }</p>
            <p class="muted">{ "Only TTF File Allowed" }</p>
        </div>
    }
}

fn build_rejected_notice(component: &UploadPanel, link: &Scope<UploadPanel>) -> Html {
    if component.rejected.is_empty() {
        return html! {};
    }

    html! {
        <div class="notice-error" style="margin-top: 1rem;">
            { format!("Not TTF, skipped: {}", component.rejected.join(", ")) }
            <button
                class="link-danger"
                style="margin-left: 1rem;"
                onclick={link.callback(|_| Msg::DismissRejected)}
            >
                { "Dismiss" }
            </button>
        </div>
    }
}

fn build_font_table(component: &UploadPanel, link: &Scope<UploadPanel>) -> Html {
    html! {
        <div class="card" style="margin-top: 2rem; padding: 0;">
            <h2 style="padding: 0.75rem 1rem; margin: 0; border-bottom: 1px solid #e5e7eb; font-size: 1.1rem;">
                { "Our Fonts" }
            </h2>
            <table>
                <thead>
                    <tr>
                        <th>{ "Font Name" }</th>
                        <th>{ "Preview" }</th>
                        <th>{ "Action" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for component.list.fonts.iter().map(|font| {
                            let id = font.id.clone();
                            html! {
                                <tr key={font.id.clone()}>
                                    <td>{ &font.name }</td>
                                    <td style={preview_style(&font.id, font.bytes.is_empty())}>
                                        { "Example Style" }
                                    </td>
                                    <td>
                                        <button
                                            class="link-danger"
                                            onclick={link.callback(move |_| Msg::Delete(id.clone()))}
                                        >
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                    {
                        if component.list.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="3" class="muted" style="text-align: center;">
                                        { "No fonts uploaded." }
                                    </td>
                                </tr>
                            }
                        } else {
                            html! {}
                        }
                    }
                </tbody>
            </table>
        </div>
    }
}

/// One `@font-face` rule per font whose bytes have arrived, keyed by entry
/// id so duplicate file names cannot collide.
fn font_face_styles(component: &UploadPanel) -> Html {
    let css: String = component
        .list
        .fonts
        .iter()
        .filter(|f| !f.bytes.is_empty())
        .map(|f| {
            format!(
                "@font-face {{ font-family: 'uploaded-{}'; src: url(data:font/ttf;base64,{}); }}\n",
                f.id,
                general_purpose::STANDARD.encode(&f.bytes)
            )
        })
        .collect();

    html! { <style>{ css }</style> }
}

fn preview_style(id: &str, pending: bool) -> String {
    if pending {
        "color: #9ca3af;".to_string()
    } else {
        format!("font-family: 'uploaded-{}';", id)
    }
}

fn files_from(list: Option<FileList>) -> Vec<web_sys::File> {
    match list {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}
