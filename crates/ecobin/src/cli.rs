//! Clap derive structures for the `ecobin` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ecobin -- campus smart recycling dashboard from the command line
#[derive(Debug, Parser)]
#[command(
    name = "ecobin",
    version,
    about = "View and manage the EcoBin smart recycling system",
    long_about = "A command-line dashboard for the EcoBin campus recycling system.\n\n\
        Shows personal recycling stats, activity history, the campus\n\
        leaderboard, and live smart-bin telemetry. Admin accounts can\n\
        additionally reset bins and audit system-wide activity.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (overrides the config file)
    #[arg(long, short = 'u', env = "ECOBIN_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ECOBIN_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ECOBIN_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist a session
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Create a new account
    Register(RegisterArgs),

    /// Show your recycling stats
    #[command(alias = "st")]
    Stats,

    /// Show your recent recycling activity
    #[command(alias = "hist")]
    History(HistoryArgs),

    /// Show the campus leaderboard
    #[command(alias = "lb")]
    Leaderboard(LeaderboardArgs),

    /// Show smart-bin fill levels
    #[command(alias = "b")]
    Bins(BinsArgs),

    /// Live dashboard: poll the backend and print updates
    Watch(WatchArgs),

    /// Admin operations (reset bins, audit activity)
    Admin(AdminArgs),

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Password (prompted interactively when omitted)
    #[arg(long, env = "ECOBIN_PASSWORD", hide_env = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account username
    pub username: String,

    /// Display name
    #[arg(long)]
    pub full_name: String,

    /// RFID card UID to associate with the account
    #[arg(long, default_value = "")]
    pub rfid_uid: String,

    /// Password (prompted interactively when omitted)
    #[arg(long, env = "ECOBIN_PASSWORD", hide_env = true)]
    pub password: Option<String>,
}

// ── Data views ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Maximum number of entries to fetch
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct LeaderboardArgs {
    /// Maximum number of rows to fetch
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct BinsArgs {
    /// Only show bins that need attention (nearly full or in error)
    #[arg(long)]
    pub attention: bool,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between refresh cycles (overrides the config file)
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,
}

// ── Admin ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Zero a bin's fill level after emptying it
    ResetBin {
        /// Numeric bin id
        bin_id: i64,
    },

    /// Show recent activity across all users
    Logs {
        /// Maximum number of entries to fetch
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a default config file
    Init,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
