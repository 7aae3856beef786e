// src/core/menu.rs

//! Builds the quick-pick lists shown by each command from the cached snapshot.

use crate::models::{ActionRequest, LoadMode, MenuEntry, PickItem, SpitScope, StateSnapshot};

const CURRENT_MARKER: &str = "✓";
const NO_MARKER: &str = "   ";

/// The full menu: environments (when known), load, spit and utility groups.
pub fn build_main_menu(snapshot: &StateSnapshot) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    let environments = snapshot.environments();
    if !environments.is_empty() {
        entries.push(MenuEntry::separator(t!("menu.group.to")));
        for env in environments {
            let current = snapshot.is_active(env);
            let marker = if current { CURRENT_MARKER } else { NO_MARKER };
            let item = PickItem::item(format!("{} {}", marker, env))
                .with_description(current_description(current));
            entries.push(MenuEntry::action(item, ActionRequest::SwitchTo(env.clone())));
        }
    }

    entries.push(MenuEntry::separator(t!("menu.group.load")));
    entries.extend(load_entries());

    entries.push(MenuEntry::separator(t!("menu.group.spit")));
    entries.push(MenuEntry::action(
        PickItem::item(t!("menu.item.spit_all")),
        ActionRequest::Spit(SpitScope::All),
    ));
    entries.push(MenuEntry::action(
        PickItem::item(t!("menu.item.spit_current")),
        ActionRequest::Spit(SpitScope::Current),
    ));

    entries.push(MenuEntry::separator(t!("menu.group.utility")));
    entries.push(MenuEntry::action(
        PickItem::item(t!("menu.item.refresh")),
        ActionRequest::Refresh,
    ));
    entries.push(MenuEntry::action(
        PickItem::item(t!("menu.item.versions")),
        ActionRequest::ListVersions,
    ));

    entries
}

/// One plain row per known environment, for the switch-environment command.
pub fn build_environment_menu(snapshot: &StateSnapshot) -> Vec<MenuEntry> {
    snapshot
        .environments()
        .iter()
        .map(|env| {
            let item = PickItem::item(env.as_str())
                .with_description(current_description(snapshot.is_active(env)));
            MenuEntry::action(item, ActionRequest::SwitchTo(env.clone()))
        })
        .collect()
}

/// Merge and replace rows for the load command.
pub fn build_load_menu() -> Vec<MenuEntry> {
    load_entries().collect()
}

/// All and current rows for the spit command. The current row names the
/// active environment, or "none".
pub fn build_spit_menu(snapshot: &StateSnapshot) -> Vec<MenuEntry> {
    let current = snapshot.active().unwrap_or(t!("menu.value.none"));
    vec![
        MenuEntry::action(
            PickItem::item(t!("menu.item.spit_all")),
            ActionRequest::Spit(SpitScope::All),
        ),
        MenuEntry::action(
            PickItem::item(format!(t!("menu.item.spit_current_named"), env = current)),
            ActionRequest::Spit(SpitScope::Current),
        ),
    ]
}

/// The rows to hand to the host, in menu order.
pub fn pick_items(entries: &[MenuEntry]) -> Vec<PickItem> {
    entries.iter().map(|entry| entry.item.clone()).collect()
}

/// The action behind the row the host returned. Separators and out-of-range
/// indices yield `None`.
pub fn action_at(entries: &[MenuEntry], index: usize) -> Option<&ActionRequest> {
    entries.get(index).and_then(|entry| entry.action.as_ref())
}

fn load_entries() -> impl Iterator<Item = MenuEntry> {
    [
        MenuEntry::action(
            PickItem::item(t!("menu.item.load_merge")),
            ActionRequest::Load(LoadMode::Merge),
        ),
        MenuEntry::action(
            PickItem::item(t!("menu.item.load_replace")),
            ActionRequest::Load(LoadMode::Replace),
        ),
    ]
    .into_iter()
}

fn current_description(current: bool) -> &'static str {
    if current {
        t!("menu.description.current")
    } else {
        ""
    }
}
