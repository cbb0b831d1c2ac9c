pub mod grid;
pub mod mapper;
pub mod metric;
pub mod position;
pub mod range;
pub mod snap;
pub mod tempo;
pub mod viewport;
