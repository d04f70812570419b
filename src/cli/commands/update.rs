use crate::cli::commands::show::output;
use crate::cli::commands::{flush, open_board};
use crate::cli::parser::{Commands, UpdateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::patch::Patch;
use crate::models::status::Status;
use crate::ui::messages::success;

/// Turn CLI flags into a patch; status codes are normalised to the exact
/// strings stored in the tables.
pub(crate) fn patch_from_args(args: &UpdateArgs) -> AppResult<Patch> {
    let status = match &args.status {
        Some(code) => Some(
            Status::from_code(code)
                .ok_or_else(|| {
                    AppError::InvalidArgument(format!(
                        "Invalid status '{code}'. Use dirty, in-progress or clean"
                    ))
                })?
                .as_str()
                .to_string(),
        ),
        None => None,
    };

    Ok(Patch {
        id: Some(args.id),
        status,
        assigned_to: args.assign.clone(),
        set_time_in: args.time_in,
        set_time_out: args.time_out,
        reset: args.reset,
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (args, is_room) = match cmd {
        Commands::Room(args) => (args, true),
        Commands::Area(args) => (args, false),
        _ => return Ok(()),
    };

    let patch = patch_from_args(args)?;
    let mut board = open_board(cfg)?;

    let result = if is_room {
        board.update_room(&patch)
    } else {
        board.update_area(&patch)
    };
    flush(&mut board);
    let snapshot = result?;

    if !args.json {
        let label = if is_room { "Room" } else { "Area" };
        success(format!("{label} row {} updated", args.id));
    }
    output(&snapshot, args.json)
}
