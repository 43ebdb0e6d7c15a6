//! Config file command handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::emit(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = match global.output {
                OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
                OutputFormat::JsonCompact => serde_json::to_string(&cfg)?,
                OutputFormat::Yaml => serde_yaml::to_string(&cfg).map_err(|e| {
                    CliError::Config {
                        message: e.to_string(),
                    }
                })?,
                // TOML is the config's native format.
                _ => toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                    message: e.to_string(),
                })?,
            };
            output::emit(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init => {
            let path = config::config_path();
            let overwrite_ok = !path.exists()
                || crate::commands::util::confirm("Config file exists, overwrite?", global.yes)?;
            if !overwrite_ok {
                output::emit("Aborted", global.quiet);
                return Ok(());
            }
            config::save_config(&config::Config::default())?;
            output::emit(&format!("Wrote {}", path.display()), global.quiet);
            Ok(())
        }
    }
}
