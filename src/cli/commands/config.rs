use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config, migrate_config};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            if !path.exists() {
                warning(format!("No config file at {} (defaults in use)", path.display()));
            } else {
                let findings = check_config(&path)?;
                if findings.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for f in findings {
                        warning(f);
                    }
                }
            }
        }

        if *migrate {
            if !path.exists() {
                warning(format!("No config file at {}; run `init` first", path.display()));
            } else if migrate_config(&path)? {
                success(format!("Configuration migrated: {}", path.display()));
            } else {
                info("Configuration already up to date.");
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
