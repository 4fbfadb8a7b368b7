#![forbid(unsafe_code)]

mod autofit;
mod carousel;
mod config;
mod constants;
mod content;
mod coordinator;
mod deferred;
mod form;
mod gui;
mod mobile_menu;
mod modal;
mod registry;
mod scroll_nav;
mod site;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::Config;
use content::Capability;
use coordinator::build_menu;
use registry::TemplateRegistry;
use site::SiteMarkup;

/// Cake Walk Baking Co. site with its accordion content panel
#[derive(Debug, Parser)]
#[command(name = "cakewalk-panel", version, about)]
struct Cli {
    /// Config file to use instead of the one in the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site markup JSON; the built-in bakery site when omitted
    #[arg(long)]
    site: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Print how every menu item resolves to content, then exit
    #[arg(long)]
    list_keys: bool,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    // LOG_LEVEL wins over the config file
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| config.log_level.clone());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&level))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install tracing subscriber")
}

/// One line per menu item: which content it resolves to, from where, and the
/// initializers its instances get
fn list_keys(site: &SiteMarkup, registry: &TemplateRegistry) {
    for section in build_menu(site) {
        for item in &section.items {
            let resolved = match registry.resolve(&item.section_id, &item.label) {
                Some(descriptor) => {
                    let origin = if registry.has_custom(descriptor.key()) { "custom" } else { "section" };
                    format!("{} ({origin}){}", descriptor.key(), describe_capabilities(descriptor.capabilities()))
                }
                None => "unresolved".to_string(),
            };
            println!("{} / {} -> {}", section.id, item.label, resolved);
        }
    }
}

fn describe_capabilities(capabilities: &[Capability]) -> String {
    if capabilities.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = capabilities
        .iter()
        .map(|capability| match capability {
            Capability::Carousel => "carousel",
            Capability::ContactForm => "contact-form",
        })
        .collect();
    format!(" [{}]", names.join(", "))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config)?;
    let config_path = cli.config.clone().unwrap_or_else(Config::path);
    info!(path = %config_path.display(), log_level = %config.log_level, "config in use");

    if let Some(width) = cli.width {
        config.window.width = width;
        config.validate_and_clamp();
    }

    let site = match &cli.site {
        Some(path) => SiteMarkup::load(path)?,
        None => SiteMarkup::bakery(),
    };
    let registry = Arc::new(TemplateRegistry::from_site(&site));

    if cli.list_keys {
        list_keys(&site, &registry);
        return Ok(());
    }

    gui::run_gui(config, site, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentDescriptor, Fragment};

    #[test]
    fn test_parse_level_falls_back_to_info() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_describe_capabilities() {
        let registry = TemplateRegistry::from_site(&SiteMarkup::bakery());
        let gallery = registry.resolve("products", "Gallery").unwrap();
        assert_eq!(describe_capabilities(gallery.capabilities()), " [carousel]");

        let plain = ContentDescriptor::new(
            "about-content",
            Fragment {
                title: "About".to_string(),
                blocks: vec![],
            },
        );
        assert_eq!(describe_capabilities(plain.capabilities()), "");
    }
}
