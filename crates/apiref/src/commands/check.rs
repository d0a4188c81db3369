//! `apiref check` command implementation.

use std::path::PathBuf;

use apiref_config::{CliSettings, Config};
use apiref_model::{ContentItem, load_content, load_menu};
use apiref_renderer::{ContentNode, ExpandStore, NavList, NavigationTree, render_content};
use clap::Args;

use crate::commands::warn_duplicate_ids;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content tree JSON (overrides config).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Menu tree JSON (overrides config).
    #[arg(long)]
    menu: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_path: self.content,
            menu_path: self.menu,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let content = load_content(&config.input_resolved.content)?;
        let menu = load_menu(&config.input_resolved.menu)?;

        let nodes = render_content(&content, &config.presentation, &ExpandStore::new());
        let navigation = NavigationTree::new(&menu).render(&config.presentation);

        output.info(&format!("Content items: {}", count_items(&content)));
        output.info(&format!(
            "Deep-link anchors: {}",
            nodes.iter().map(ContentNode::anchor_count).sum::<usize>()
        ));
        output.info(&format!("Navigation entries: {}", count_entries(&navigation)));

        let duplicates = warn_duplicate_ids(&output, &content);
        if duplicates > 0 {
            return Err(CliError::Validation(format!(
                "{duplicates} duplicate id(s) in content tree"
            )));
        }

        output.success("No problems found");
        Ok(())
    }
}

fn count_items(items: &[ContentItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_items(item.children()))
        .sum()
}

fn count_entries(list: &NavList<'_>) -> usize {
    list.entries
        .iter()
        .map(|entry| 1 + entry.children.as_ref().map_or(0, count_entries))
        .sum()
}

#[cfg(test)]
mod tests {
    use apiref_model::{HttpVerb, ItemType, MenuItem};
    use apiref_renderer::PresentationConfig;

    use super::*;

    #[test]
    fn test_count_items_recurses() {
        let items = vec![
            ContentItem::group("g", "G").with_items(vec![
                ContentItem::tag("t", "T").with_items(vec![ContentItem::operation(
                    "o",
                    "O",
                    HttpVerb::Get,
                    "/o",
                )]),
            ]),
            ContentItem::section("s", "S"),
        ];

        assert_eq!(count_items(&items), 4);
    }

    #[test]
    fn test_count_entries_respects_compact_filter() {
        let menu = vec![
            MenuItem::new("t", "T", ItemType::Tag)
                .with_items(vec![MenuItem::operation("o", "O", HttpVerb::Get)]),
        ];
        let compact = PresentationConfig {
            compact_operation_header: true,
            ..Default::default()
        };

        let full = NavigationTree::new(&menu).render(&PresentationConfig::default());
        let reduced = NavigationTree::new(&menu).render(&compact);

        assert_eq!(count_entries(&full), 2);
        assert_eq!(count_entries(&reduced), 1);
    }
}
