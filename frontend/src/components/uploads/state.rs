use common::panels::uploads::UploadList;
use yew::NodeRef;

/// State for the upload panel component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct UploadPanel {
    /// Accepted fonts, insertion-ordered. Owned by `common` so the list
    /// semantics stay host-testable.
    pub list: UploadList,
    /// Names from the most recent batch that failed the `.ttf` filter.
    /// Cleared when the user dismisses the notice or a later batch is fully
    /// accepted.
    pub rejected: Vec<String>,
    /// Whether a drag is currently hovering over the dropzone.
    pub drag_active: bool,
    /// Reference to the hidden file input used for click-to-pick.
    pub file_input_ref: NodeRef,
}

impl UploadPanel {
    pub fn new() -> Self {
        Self {
            list: UploadList::default(),
            rejected: Vec::new(),
            drag_active: false,
            file_input_ref: Default::default(),
        }
    }
}
