pub mod constants;
pub mod event;
pub mod header;
pub mod instrument;
pub mod lasso;
pub mod transport;
