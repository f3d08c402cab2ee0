mod app;
mod application;
mod domain;
mod infrastructure;

pub use app::run;
