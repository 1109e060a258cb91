use common::panels::groups::GroupForm;

/// The font options offered by the per-row select.
pub const FONT_CHOICES: [&str; 4] = ["Font A", "Font B", "Font C", "Font D"];

/// State for the group manager component: a thin wrapper around the form
/// state machine in `common`.
pub struct GroupManager {
    pub form: GroupForm,
}

impl GroupManager {
    pub fn new() -> Self {
        Self {
            form: GroupForm::new(),
        }
    }
}
