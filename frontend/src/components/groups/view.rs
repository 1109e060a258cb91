//! View rendering for the group manager: the draft editor card on top, the
//! committed group table below.
//!
//! Note: the helper copy under the heading still reads "at least two fonts"
//! while the enforced rule is "at least one"; the copy matches what the
//! product ships today and the rule is pinned by the state machine tests.

use common::model::font::{FontRow, RowField};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{GroupManager, FONT_CHOICES};

pub fn view(component: &GroupManager, ctx: &Context<GroupManager>) -> Html {
    let link = ctx.link();

    html! {
        <>
            { build_form_card(component, link) }
            { build_group_table(component, link) }
        </>
    }
}

fn build_form_card(component: &GroupManager, link: &Scope<GroupManager>) -> Html {
    let form = &component.form;
    let heading = if form.is_editing() {
        "Edit Font Group"
    } else {
        "Create Font Group"
    };

    html! {
        <div class="card">
            <h2 style="margin-top: 0;">{ heading }</h2>
            <p class="muted" style="font-size: 0.85rem;">{ "You have to select at least two fonts" }</p>

            <input
                type="text"
                placeholder="Group Title"
                style="width: 100%; box-sizing: border-box; margin-bottom: 1rem;"
                value={form.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />

            { for form.rows.iter().map(|row| build_row(row, form.rows.len(), link)) }

            {
                if let Some(error) = &form.error {
                    html! { <p class="text-error">{ error }</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(success) = &form.success {
                    html! { <p class="text-success">{ success }</p> }
                } else {
                    html! {}
                }
            }

            <div style="display: flex; gap: 1rem; margin-top: 1rem;">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::AddRow)}>
                    { "+ Add Row" }
                </button>
                {
                    if form.is_editing() {
                        html! {
                            <>
                                <button class="btn btn-update" onclick={link.callback(|_| Msg::Update)}>
                                    { "Update" }
                                </button>
                                <button class="btn btn-cancel" onclick={link.callback(|_| Msg::Cancel)}>
                                    { "Cancel" }
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <button class="btn btn-primary" onclick={link.callback(|_| Msg::Create)}>
                                { "Create" }
                            </button>
                        }
                    }
                }
            </div>
        </div>
    }
}

fn build_row(row: &FontRow, row_count: usize, link: &Scope<GroupManager>) -> Html {
    let id = row.id.clone();
    let name_id = id.clone();
    let select_id = id.clone();
    let size_id = id.clone();
    let price_id = id.clone();
    let delete_id = id.clone();

    html! {
        <div class="row-grid" key={row.id.clone()}>
            <input
                type="text"
                placeholder="Font Name"
                value={row.font_name.clone()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::EditRow(name_id.clone(), RowField::FontName(value))
                })}
            />
            <select
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::EditRow(select_id.clone(), RowField::SelectedFont(value))
                })}
            >
                <option value="" selected={row.selected_font.is_empty()}>{ "Select a Font" }</option>
                {
                    for FONT_CHOICES.iter().map(|choice| html! {
                        <option value={*choice} selected={row.selected_font == *choice}>
                            { choice }
                        </option>
                    })
                }
            </select>
            <input
                type="number"
                step="0.1"
                value={row.size.to_string()}
                oninput={link.batch_callback(move |e: InputEvent| {
                    // Ignore transient unparsable input while the user types.
                    e.target_unchecked_into::<HtmlInputElement>()
                        .value()
                        .parse::<f64>()
                        .ok()
                        .map(|value| Msg::EditRow(size_id.clone(), RowField::Size(value)))
                })}
            />
            <input
                type="number"
                value={row.price_change.to_string()}
                oninput={link.batch_callback(move |e: InputEvent| {
                    e.target_unchecked_into::<HtmlInputElement>()
                        .value()
                        .parse::<f64>()
                        .ok()
                        .map(|value| Msg::EditRow(price_id.clone(), RowField::PriceChange(value)))
                })}
            />
            <button
                class="link-danger"
                title="Delete"
                style="font-size: 1.25rem; font-weight: bold;"
                disabled={row_count <= 1}
                onclick={link.callback(move |_| Msg::DeleteRow(delete_id.clone()))}
            >
                { "\u{00d7}" }
            </button>
        </div>
    }
}

fn build_group_table(component: &GroupManager, link: &Scope<GroupManager>) -> Html {
    let groups = &component.form.groups;

    html! {
        <div class="card" style="padding: 0;">
            <div style="padding: 1rem 1.5rem;">
                <h2 style="margin: 0 0 0.25rem 0;">{ "Our Font Groups" }</h2>
                <p class="muted" style="margin: 0; font-size: 0.85rem;">
                    { "List of all available font groups." }
                </p>
            </div>
            <table>
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Fonts" }</th>
                        <th>{ "Count" }</th>
                        <th style="text-align: right;">{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for groups.iter().map(|group| {
                            let edit_id = group.id.clone();
                            let delete_id = group.id.clone();
                            html! {
                                <tr key={group.id.clone()}>
                                    <td>{ &group.name }</td>
                                    <td>{ group.fonts.join(", ") }</td>
                                    <td>{ group.fonts.len() }</td>
                                    <td style="text-align: right;">
                                        <button
                                            class="link-primary"
                                            onclick={link.callback(move |_| Msg::BeginEdit(edit_id.clone()))}
                                        >
                                            { "Edit" }
                                        </button>
                                        <button
                                            class="link-danger"
                                            onclick={link.callback(move |_| Msg::DeleteGroup(delete_id.clone()))}
                                        >
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                    {
                        if groups.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="4" class="muted" style="text-align: center;">
                                        { "No font groups found." }
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
