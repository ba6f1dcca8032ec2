pub mod actions;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod view;

pub use view::PortfolioView;
