//! Entry point for the Lumen welcome screen.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use lumen_ui::theme::{Theme, CURRENT_THEME};
use lumen_welcome::components::App;

/// Embedded CSS styles
const SHARED_CSS: &str = lumen_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "lumen-welcome")]
#[command(about = "Animated welcome screen for the Lumen desktop app")]
struct Args {
    /// Visual theme (midnight or daylight)
    #[arg(short, long, default_value = "midnight")]
    theme: Theme,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("lumen_welcome=info")
        .with_target(false)
        .init();

    let args = Args::parse();
    *CURRENT_THEME.write() = args.theme;

    tracing::info!("Starting Lumen ({} theme)", args.theme.display_name());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Lumen")
                        .with_inner_size(LogicalSize::new(420.0, 780.0))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{}</style><style>{}</style>"#, SHARED_CSS, STYLES_CSS)),
        )
        .launch(App);
}
