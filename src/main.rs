//! Nhà Tài Trợ - a tiny donation desk
//! Pick a package, copy the transfer memo, enjoy the confetti

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1200.0, 820.0))
        .antialiasing(true)
        .run()
        .context("donation desk window failed")
}
