#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// AxiomWeb - marketing site desktop preview
#[derive(Parser, Debug)]
#[command(name = "axiomweb-desktop")]
#[command(about = "AxiomWeb - web agency marketing site")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    tracing::info!("Starting AxiomWeb ({}x{})", args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AxiomWeb")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
