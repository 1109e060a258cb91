pub enum Msg {
    /// A batch of files arrived, either dropped on the zone or chosen
    /// through the picker.
    Accept(Vec<web_sys::File>),
    /// Click-through to the hidden file input.
    OpenFilePicker,
    /// Toggles the dropzone highlight while a drag hovers over it.
    DragStateChanged(bool),
    /// An asynchronous file read finished.
    BytesLoaded { id: String, bytes: Vec<u8> },
    Delete(String),
    DismissRejected,
}
