use common::panels::catalog::CatalogState;

/// State for the catalog browser component.
pub struct CatalogBrowser {
    /// Page indicator, book list, loading flag, and request tokens.
    pub pane: CatalogState,
    /// Guard to fetch the first page only once.
    pub loaded: bool,
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self {
            pane: CatalogState::default(),
            loaded: false,
        }
    }
}
