use common::model::book::Book;

pub enum Msg {
    /// Fetches the current page. Also serves as the retry action.
    Load,
    Next,
    Prev,
    /// A fetch resolved. `token` identifies the request; stale tokens are
    /// dropped by the state.
    Loaded { token: u64, books: Vec<Book> },
    Failed { token: u64, message: String },
}
