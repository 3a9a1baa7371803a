//! Terminal table: one human seat against odds bots.

pub mod app;
pub mod controller;
mod ui;
