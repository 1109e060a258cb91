//! Update function for the group manager. Mutations delegate to the form
//! state machine; this layer adds the delete confirmation dialog and success
//! toasts.

use yew::prelude::*;

use crate::toast::show_toast;

use super::messages::Msg;
use super::state::GroupManager;

pub fn update(component: &mut GroupManager, _ctx: &Context<GroupManager>, msg: Msg) -> bool {
    match msg {
        Msg::SetTitle(title) => {
            component.form.title = title;
            true
        }
        Msg::AddRow => {
            component.form.add_row();
            true
        }
        Msg::EditRow(row_id, field) => {
            component.form.update_field(&row_id, field);
            true
        }
        Msg::DeleteRow(row_id) => {
            component.form.delete_row(&row_id);
            true
        }
        Msg::Create => {
            component.form.create();
            if let Some(message) = &component.form.success {
                show_toast(message);
            }
            true
        }
        Msg::Update => {
            component.form.update();
            if let Some(message) = &component.form.success {
                show_toast(message);
            }
            true
        }
        Msg::BeginEdit(group_id) => {
            component.form.begin_edit(&group_id);
            true
        }
        Msg::DeleteGroup(group_id) => {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this font group?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return false;
            }
            component.form.delete_group(&group_id);
            true
        }
        Msg::Cancel => {
            component.form.reset();
            true
        }
    }
}
