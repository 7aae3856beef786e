// src/constants.rs

/// The external tool invoked when no `command` is configured.
pub const DEFAULT_TOOL_COMMAND: &str = "swapenv";

/// Name of the directory under the system config dir (`~/.config/swapbar`).
pub const CONFIG_DIR_NAME: &str = "swapbar";

/// Name of the settings file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "SWAPBAR_CONFIG";

/// Overrides the workspace directory.
pub const WORKSPACE_ENV: &str = "SWAPBAR_WORKSPACE";

/// Workspace-relative globs whose writes never count as a document save:
/// VCS metadata, build output and editor swap or backup files.
pub const IGNORED_WATCH_GLOBS: &[&str] = &[
    "**/.git/**",
    "**/.hg/**",
    "**/.svn/**",
    "**/target/**",
    "**/node_modules/**",
    "**/*.swp",
    "**/*.swx",
    "**/*~",
];

// --- External tool arguments ---

pub const ARG_INFO: &[&str] = &["info", "--format", "json"];
pub const ARG_SWITCH: &str = "to";
pub const ARG_LOAD: &str = "load";
pub const ARG_REPLACE_FLAG: &str = "--replace";
pub const ARG_SPIT: &str = "spit";
pub const ARG_ENV_FLAG: &str = "--env";
pub const ARG_VERSION: &str = "version";
pub const ARG_VERSION_LIST: &str = "ls";

// --- Status payload keys, tried in order ---

pub const PROJECT_KEYS: &[&str] = &["project", "name"];
pub const ENVIRONMENT_KEYS: &[&str] = &["environment", "env"];
pub const ENVIRONMENT_LIST_KEYS: &[&str] = &["envs", "environments"];
