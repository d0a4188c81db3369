//! `apiref build` command implementation.

use std::path::PathBuf;

use apiref_config::{CliSettings, Config};
use apiref_model::{ContentItem, MenuItem, load_content, load_menu};
use apiref_renderer::{
    ContentTree, NavigationTree, PageData, PresentationConfig, render_page, write_content,
    write_navigation,
};
use clap::Args;
use tracing::info;

use crate::commands::warn_duplicate_ids;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content tree JSON (overrides config).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Menu tree JSON (overrides config).
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Output HTML file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Collapse operations behind compact headers.
    #[arg(long)]
    compact: bool,

    /// Hide the summary line in compact headers.
    #[arg(long)]
    hide_summary: bool,

    /// Render this operation expanded (compact mode). Repeatable.
    #[arg(long = "expand", value_name = "ID")]
    expand: Vec<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_path: self.content.clone(),
            menu_path: self.menu.clone(),
            output_path: self.output.clone(),
            compact_operation_header: self.compact.then_some(true),
            hide_operation_summary: self.hide_summary.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Content: {}",
            config.input_resolved.content.display()
        ));
        output.info(&format!("Menu: {}", config.input_resolved.menu.display()));

        let content = load_content(&config.input_resolved.content)?;
        let menu = load_menu(&config.input_resolved.menu)?;
        warn_duplicate_ids(&output, &content);

        if !self.expand.is_empty() && !config.presentation.compact_operation_header {
            output.warning("--expand has no effect without compact operation headers");
        }

        let page = PageSource {
            title: &config.page.title,
            css_path: config.page.css_path.as_deref(),
            presentation: &config.presentation,
            content: &content,
            menu: &menu,
        };
        let (html, unknown) = page.render(&self.expand);
        for id in unknown {
            output.warning(&format!("--expand {id}: no such operation"));
        }

        if let Some(parent) = config.output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config.output_path, &html)?;
        info!(path = %config.output_path.display(), bytes = html.len(), "Wrote page");

        output.success(&format!(
            "Page written to {}",
            config.output_path.display()
        ));
        Ok(())
    }
}

/// Everything a page render needs, borrowed from the loaded inputs.
struct PageSource<'a> {
    title: &'a str,
    css_path: Option<&'a str>,
    presentation: &'a PresentationConfig,
    content: &'a [ContentItem],
    menu: &'a [MenuItem],
}

impl PageSource<'_> {
    /// Render the page with the given operations toggled open.
    ///
    /// Returns the HTML and the ids that matched no operation.
    fn render<'e>(&self, expand: &'e [String]) -> (String, Vec<&'e str>) {
        let mut tree = ContentTree::new();
        tree.render(self.content, self.presentation);

        let unknown = expand
            .iter()
            .map(String::as_str)
            .filter(|id| tree.toggle(id).is_none())
            .collect();

        let nodes = tree.render(self.content, self.presentation);
        let navigation = NavigationTree::new(self.menu)
            .root(true)
            .render(self.presentation);

        let html = render_page(&PageData {
            title: self.title.to_owned(),
            css_path: self.css_path.map(str::to_owned),
            navigation_html: write_navigation(&navigation),
            content_html: write_content(&nodes),
        });
        (html, unknown)
    }
}
