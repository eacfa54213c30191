//! Command handlers for the vdrive console.
//!
//! Each handler runs one drive operation and renders the reply. Drive errors
//! are logged and mapped to reply codes; none of them ends the session.

use log::info;

use crate::blob::{BlobStore, DownloadTrigger};
use crate::drive::{Drive, VisibleItems};
use crate::entity::{EntityId, FileId, FolderId, PreviewKind, RawPayload};
use crate::error::DriveError;
use crate::error::handlers::{error_to_reply_code, handle_error};
use crate::protocol::responses::{self, format_multiline, format_response};
use crate::protocol::{Command, CommandResult, CommandStatus, Target};
use crate::selection::ToggleOutcome;
use crate::utils::{format_date, format_file_size};

/// Dispatches a parsed command to its handler.
///
/// # Arguments
///
/// * `drive` - The drive state the session operates on.
/// * `command` - Reference to the parsed command.
/// * `downloads` - Where `GET` sends download requests.
///
/// # Returns
///
/// * `CommandResult` - Status and reply text.
pub fn handle_command<B: BlobStore>(
    drive: &mut Drive<B>,
    command: &Command,
    downloads: &mut dyn DownloadTrigger,
) -> CommandResult {
    match command {
        Command::Ls => handle_cmd_ls(drive),
        Command::Pwd => handle_cmd_pwd(drive),
        Command::Mkdir(name) => handle_cmd_mkdir(drive, name),
        Command::Cd(target) => handle_cmd_cd(drive, target),
        Command::Up => {
            drive.up();
            handle_cmd_pwd(drive)
        }
        Command::Home => {
            drive.home();
            handle_cmd_pwd(drive)
        }
        Command::Jump(index) => handle_cmd_jump(drive, index),
        Command::Find(query) => handle_cmd_find(drive, query),
        Command::Select(target) => handle_cmd_select(drive, target),
        Command::Clear => {
            drive.clear_selection();
            CommandResult::success(format_response(responses::OK, "Selection cleared"))
        }
        Command::Del => handle_cmd_del(drive),
        Command::Upload {
            name,
            mime_type,
            content,
        } => handle_cmd_upload(drive, name, mime_type, content),
        Command::Get(target) => handle_cmd_get(drive, target, downloads),
        Command::View(target) => handle_cmd_view(drive, target),
        Command::Stat => handle_cmd_stat(drive),
        Command::Help => handle_cmd_help(),
        Command::Quit => CommandResult {
            status: CommandStatus::CloseSession,
            message: Some(format_response(responses::GOODBYE, "Goodbye")),
        },
        Command::Unknown(raw) => CommandResult::failure(
            format!("Unknown command: {}", raw),
            format_response(responses::UNKNOWN_COMMAND, "Unknown command, try HELP"),
        ),
    }
}

/// Turns a drive error into a failed result with the matching reply code.
fn drive_failure(err: DriveError) -> CommandResult {
    handle_error(&err);
    CommandResult::failure(
        err.to_string(),
        format_response(error_to_reply_code(&err), &err.to_string()),
    )
}

fn not_found(target: &Target) -> CommandResult {
    let label = match target {
        Target::Index(i) => format!("#{}", i),
        Target::Name(n) => n.clone(),
    };
    CommandResult::failure(
        format!("No such item: {}", label),
        format_response(responses::NOT_FOUND, &format!("No such item: {}", label)),
    )
}

/// Resolves a target against what is currently visible.
fn resolve(items: &VisibleItems, target: &Target) -> Option<EntityId> {
    match target {
        Target::Index(index) => items.item_at(*index),
        Target::Name(name) => items.find(name),
    }
}

fn resolve_folder<B: BlobStore>(drive: &Drive<B>, target: &Target) -> Option<FolderId> {
    match resolve(&drive.visible_items(), target)? {
        EntityId::Folder(id) => Some(id),
        EntityId::File(_) => None,
    }
}

fn resolve_file<B: BlobStore>(drive: &Drive<B>, target: &Target) -> Option<FileId> {
    match resolve(&drive.visible_items(), target)? {
        EntityId::File(id) => Some(id),
        EntityId::Folder(_) => None,
    }
}

fn trail_label<B: BlobStore>(drive: &Drive<B>) -> String {
    drive
        .trail()
        .iter()
        .map(|crumb| crumb.name.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Handles LS: lists visible folders then files, marking selected ones.
fn handle_cmd_ls<B: BlobStore>(drive: &Drive<B>) -> CommandResult {
    let items = drive.visible_items();

    let folders = items.folders.iter().map(|folder| {
        (
            folder.entity_id(),
            format!(
                "[dir]   {:<32} {:>12} {}",
                folder.name,
                "-",
                format_date(&folder.created_at)
            ),
        )
    });
    let files = items.files.iter().map(|file| {
        (
            file.entity_id(),
            format!(
                "[{:<5}] {:<32} {:>12} {}",
                file.kind.label(),
                file.name,
                format_file_size(file.size),
                format_date(&file.created_at)
            ),
        )
    });

    let lines: Vec<String> = folders
        .chain(files)
        .enumerate()
        .map(|(index, (id, line))| {
            let mark = if items.is_selected(id) { " *" } else { "" };
            format!("#{:<3} {}{}", index, line, mark)
        })
        .collect();

    let footer = if items.is_empty() {
        if items.query.is_empty() {
            "No files or folders".to_string()
        } else {
            format!("Nothing matches {:?}", items.query)
        }
    } else {
        format!(
            "{} item(s), {} selected",
            items.len(),
            items.selection.len()
        )
    };

    let header = std::iter::once(trail_label(drive));
    CommandResult::success(format_multiline(
        responses::LISTING,
        header.chain(lines),
        &footer,
    ))
}

/// Handles PWD: shows the breadcrumb trail with indices usable by JUMP.
fn handle_cmd_pwd<B: BlobStore>(drive: &Drive<B>) -> CommandResult {
    let trail = drive
        .trail()
        .iter()
        .enumerate()
        .map(|(i, crumb)| format!("[{}] {}", i, crumb.name))
        .collect::<Vec<_>>()
        .join(" > ");
    CommandResult::success(format_response(responses::ACTION_OK, &trail))
}

fn handle_cmd_mkdir<B: BlobStore>(drive: &mut Drive<B>, name: &str) -> CommandResult {
    match drive.create_folder(name) {
        Ok(folder) => CommandResult::success(format_response(
            responses::CREATED,
            &format!("\"{}\" created", folder.name),
        )),
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_cd<B: BlobStore>(drive: &mut Drive<B>, target: &Target) -> CommandResult {
    let Some(folder) = resolve_folder(drive, target) else {
        return not_found(target);
    };

    match drive.enter(folder) {
        Ok(()) => handle_cmd_pwd(drive),
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_jump<B: BlobStore>(drive: &mut Drive<B>, raw: &str) -> CommandResult {
    let index = match raw.parse::<usize>() {
        Ok(index) => index,
        Err(_) => {
            return CommandResult::failure(
                "Invalid breadcrumb index",
                format_response(responses::SYNTAX_ERROR, "JUMP needs a breadcrumb index"),
            );
        }
    };

    match drive.jump_to(index) {
        Ok(_) => handle_cmd_pwd(drive),
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_find<B: BlobStore>(drive: &mut Drive<B>, query: &str) -> CommandResult {
    if query.is_empty() {
        drive.clear_query();
        return CommandResult::success(format_response(responses::OK, "Search cleared"));
    }

    drive.set_query(query);
    let items = drive.visible_items();
    CommandResult::success(format_response(
        responses::OK,
        &format!("{} item(s) match {:?}", items.len(), query),
    ))
}

fn handle_cmd_select<B: BlobStore>(drive: &mut Drive<B>, target: &Target) -> CommandResult {
    let Some(id) = resolve(&drive.visible_items(), target) else {
        return not_found(target);
    };

    match drive.toggle(id) {
        ToggleOutcome::Selected => CommandResult::success(format_response(
            responses::OK,
            &format!("Selected ({} total)", drive.selection().len()),
        )),
        ToggleOutcome::Deselected => CommandResult::success(format_response(
            responses::OK,
            &format!("Deselected ({} total)", drive.selection().len()),
        )),
        ToggleOutcome::Ignored => not_found(target),
    }
}

fn handle_cmd_del<B: BlobStore>(drive: &mut Drive<B>) -> CommandResult {
    match drive.delete_selected() {
        Ok(result) => CommandResult::success(format_response(
            responses::ACTION_OK,
            &format!(
                "Deleted {} folder(s) and {} file(s)",
                result.folders.len(),
                result.files.len()
            ),
        )),
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_upload<B: BlobStore>(
    drive: &mut Drive<B>,
    name: &str,
    mime_type: &str,
    content: &str,
) -> CommandResult {
    let payload = RawPayload::new(name, mime_type, content.as_bytes().to_vec());

    let result = match drive.upload(vec![payload]) {
        Ok(result) => result,
        Err(e) => return drive_failure(e),
    };

    if let Some(failure) = result.failures.into_iter().next() {
        return drive_failure(DriveError::Blob(failure.error));
    }

    let lines = result
        .files
        .iter()
        .map(|f| format!("{} ({})", f.name, format_file_size(f.size)));
    CommandResult::success(format_multiline(
        responses::CREATED,
        lines,
        "Upload complete",
    ))
}

fn handle_cmd_get<B: BlobStore>(
    drive: &Drive<B>,
    target: &Target,
    downloads: &mut dyn DownloadTrigger,
) -> CommandResult {
    let Some(file) = resolve_file(drive, target) else {
        return not_found(target);
    };

    match drive.download(file, downloads) {
        Ok(()) => {
            info!("Download of {} handed to trigger", file);
            CommandResult::success(format_response(
                responses::DOWNLOAD_STARTED,
                "Download started",
            ))
        }
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_view<B: BlobStore>(drive: &Drive<B>, target: &Target) -> CommandResult {
    let Some(file) = resolve_file(drive, target) else {
        return not_found(target);
    };

    match drive.preview(file) {
        Ok(preview) => {
            let text = match preview.kind {
                PreviewKind::Image => format!("image preview of {} at {}", preview.name, preview.handle),
                PreviewKind::Video => format!("video player for {} at {}", preview.name, preview.handle),
                PreviewKind::Audio => format!("audio player for {} at {}", preview.name, preview.handle),
                PreviewKind::Generic => format!(
                    "Preview not available for {}; use GET to download",
                    preview.name
                ),
            };
            CommandResult::success(format_response(responses::OK, &text))
        }
        Err(e) => drive_failure(e),
    }
}

fn handle_cmd_stat<B: BlobStore>(drive: &Drive<B>) -> CommandResult {
    let store = drive.store();
    let lines = [
        format!("location: {}", trail_label(drive)),
        format!("folders: {}", store.folder_count()),
        format!("files: {}", store.file_count()),
        format!(
            "stored: {}",
            format_file_size(store.files().map(|f| f.size).sum())
        ),
        format!("selected: {}", drive.selection().len()),
        format!("search: {:?}", drive.query()),
        match store.verify_integrity().len() {
            0 => "integrity: ok".to_string(),
            n => format!("integrity: {} violation(s)", n),
        },
    ];
    CommandResult::success(format_multiline(responses::LISTING, lines, "End of status"))
}

fn handle_cmd_help() -> CommandResult {
    let lines = [
        "LS                         list the current folder",
        "PWD                        show the breadcrumb trail",
        "MKDIR <name>               create a folder here",
        "CD <name|#n> | CD ..       enter a folder / go up",
        "UP, HOME, JUMP <i>         move along the trail",
        "FIND [text]                filter by name; no text clears",
        "SELECT <name|#n>           toggle selection",
        "CLEAR                      clear the selection",
        "DEL                        delete the selection",
        "UPLOAD <name> <mime|-> [content]",
        "GET <name|#n>              download a file",
        "VIEW <name|#n>             preview a file",
        "STAT                       drive status",
        "QUIT",
    ];
    CommandResult::success(format_multiline(responses::HELP, lines, "End of help"))
}
