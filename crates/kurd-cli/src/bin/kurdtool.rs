use clap::{Parser, Subcommand};

use kurd_cli::commands::{config_ops, convert_ops, export_ops, history_ops, rules_ops};

#[derive(Parser)]
#[command(name = "kurdtool", about = "Arabic to Kurdish transliteration tool")]
struct Cli {
    /// Custom settings TOML (applied before the command runs)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Arabic-script text to Kurdish orthography
    Convert {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
        /// Read input from a file (`-` for stdin)
        #[arg(short, long)]
        file: Option<String>,
        /// Rule set: pro or standard
        #[arg(long, default_value = "pro")]
        rules: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Print text statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Show text statistics
    Stats {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
        /// Read input from a file (`-` for stdin)
        #[arg(short, long)]
        file: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert and save as txt, json, csv or xls
    Export {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
        /// Read input from a file (`-` for stdin)
        #[arg(short, long)]
        file: Option<String>,
        /// Output format: txt, json, csv, xls
        #[arg(long, default_value = "txt")]
        format: String,
        /// Rule set: pro or standard
        #[arg(long, default_value = "pro")]
        rules: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out_dir: String,
    },
    /// Inspect rule sets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Replay a file of inputs (one per line) through the history log
    History {
        /// Input file
        file: String,
        /// Rule set: pro or standard
        #[arg(long, default_value = "pro")]
        rules: String,
        /// Print retained entries as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Print the mapping reference table
    Show {
        /// Rule set: pro or standard
        #[arg(default_value = "pro")]
        rules: String,
    },
    /// Export a built-in rule set as TOML
    Export {
        /// Rule set: pro or standard
        #[arg(default_value = "pro")]
        rules: String,
    },
    /// Validate a rule set TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(file) = cli.settings.as_deref() {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Convert {
            text,
            file,
            rules,
            json,
            stats,
        } => convert_ops::convert_cmd(text.as_deref(), file.as_deref(), &rules, json, stats),
        Command::Stats { text, file, json } => {
            convert_ops::stats_cmd(text.as_deref(), file.as_deref(), json)
        }
        Command::Export {
            text,
            file,
            format,
            rules,
            out_dir,
        } => export_ops::export_cmd(text.as_deref(), file.as_deref(), &format, &rules, &out_dir),
        Command::Rules { action } => match action {
            RulesAction::Show { rules } => rules_ops::rules_show(&rules),
            RulesAction::Export { rules } => rules_ops::rules_export(&rules),
            RulesAction::Validate { file } => rules_ops::rules_validate(&file),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::History { file, rules, json } => history_ops::history_cmd(&file, &rules, json),
    }
}
