pub mod model;
pub mod panels;
