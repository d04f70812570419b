use crate::cli::commands::{flush, open_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetOutcome;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { if_due } = cmd {
        let mut board = open_board(cfg)?;

        let result = if *if_due {
            board.ensure_daily_reset()
        } else {
            board.run_daily_reset()
        };
        flush(&mut board);

        match result? {
            ResetOutcome::Reset { day, report } => success(format!(
                "Daily reset for {day}: {} rooms and {} areas set to Dirty",
                report.rooms, report.areas
            )),
            ResetOutcome::AlreadyDone { day } => {
                info(format!("Daily reset already done for {day}"))
            }
            ResetOutcome::MarkerAhead { marker, today } => warning(format!(
                "Last reset is dated {marker}, after today ({today}); nothing done"
            )),
        }
    }
    Ok(())
}
