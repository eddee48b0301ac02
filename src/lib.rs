pub mod app;
pub mod constants;
pub mod controller;
pub mod events;
pub mod ui;
pub mod widgets;
