use common::model::font::RowField;

pub enum Msg {
    SetTitle(String),
    AddRow,
    /// Edit one field of one draft row.
    EditRow(String, RowField),
    DeleteRow(String),
    Create,
    Update,
    BeginEdit(String),
    /// Asks for confirmation before removing the group.
    DeleteGroup(String),
    Cancel,
}
