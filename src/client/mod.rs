pub mod app;
pub mod component;
pub mod constant;
pub mod route;

pub use app::App;
