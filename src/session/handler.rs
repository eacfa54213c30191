use log::{debug, error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::blob::{BlobStore, DownloadLog};
use crate::drive::Drive;
use crate::protocol::responses::{self, format_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};

const MAX_COMMAND_LENGTH: usize = 4096;

/// Runs a console session until QUIT or end of input.
///
/// - Reads one command per line from `reader`.
/// - Dispatches commands using `handle_command` against `drive`.
/// - Writes replies (and `prompt` before each read) to `writer`.
///
/// Every command runs to completion before the next line is read.
pub async fn run_session<R, W, B>(
    mut reader: R,
    mut writer: W,
    drive: &mut Drive<B>,
    prompt: &str,
) -> std::io::Result<DownloadLog>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    B: BlobStore,
{
    let mut downloads = DownloadLog::new();
    let mut line = String::new();

    writer
        .write_all(format_response(responses::READY, "vdrive ready, HELP lists commands").as_bytes())
        .await?;

    loop {
        if !prompt.is_empty() {
            writer.write_all(prompt.as_bytes()).await?;
        }
        writer.flush().await?;

        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                info!("Input closed, ending session");
                break;
            }
            Ok(_) => {
                // Enforce command length limit
                if line.len() > MAX_COMMAND_LENGTH {
                    writer
                        .write_all(format_response(responses::UNKNOWN_COMMAND, "Command too long").as_bytes())
                        .await?;
                    continue;
                }

                let trimmed = line.trim_end_matches(['\r', '\n']);
                if trimmed.trim().is_empty() {
                    continue;
                }

                let command = parse_command(trimmed);
                debug!("Received: {:?}", command);

                let result = handle_command(drive, &command, &mut downloads);
                if let Some(msg) = result.message {
                    writer.write_all(msg.as_bytes()).await?;
                }

                match result.status {
                    CommandStatus::CloseSession => {
                        info!("Session closed by QUIT");
                        break;
                    }
                    CommandStatus::Failure(reason) => debug!("Command failed: {}", reason),
                    CommandStatus::Success => {}
                }
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e);
            }
        }
    }

    writer.flush().await?;
    Ok(downloads)
}
