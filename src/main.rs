#![allow(warnings)]
//! Customer Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod format;
mod models;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
