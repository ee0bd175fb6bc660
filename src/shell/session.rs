//! Interactive session loop
//!
//! Reads command lines, runs them against the storage and writes the
//! responses back until `exit` or end of input.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::ShellConfig;
use crate::error::handlers::render_command_error;
use crate::shell::commands::{CommandResult, CommandStatus, parse_command};
use crate::shell::handlers::handle_command;
use crate::storage::Storage;

/// Longest accepted command line in bytes, descriptions included and the
/// line terminator excluded.
const MAX_COMMAND_LENGTH: usize = 512;

// Room for a trailing "\r\n" on a line that is exactly at the limit.
const READ_LIMIT: u64 = MAX_COMMAND_LENGTH as u64 + 2;

const BANNER: &str = "Virtual File System\nType 'help' for commands, 'exit' to quit\n";
const FAREWELL: &str = "Goodbye!\n";

/// One line of input as seen by the session.
#[derive(Debug)]
enum Input {
    Line(String),
    TooLong,
    NotUtf8,
    Eof,
}

/// Runs one session over `reader` and `writer`.
///
/// Errors from commands are written to `writer` like any other response;
/// only I/O failures end the session early.
pub async fn run_session<R, W>(
    storage: &Storage,
    config: &ShellConfig,
    mut reader: R,
    writer: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::with_capacity(MAX_COMMAND_LENGTH);

    if config.banner {
        writer.write_all(BANNER.as_bytes()).await?;
    }

    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        let line = match read_input(&mut reader, &mut buf).await? {
            Input::Line(line) => line,
            Input::TooLong => {
                writer.write_all(b"Error: command too long\n").await?;
                continue;
            }
            Input::NotUtf8 => {
                warn!("Discarding input line that is not valid UTF-8");
                writer.write_all(b"Error: invalid input\n").await?;
                continue;
            }
            Input::Eof => {
                info!("End of input, closing session");
                break;
            }
        };

        let result = match parse_command(&line) {
            Ok(command) => {
                debug!("Received: {:?}", command);
                handle_command(storage, &command)
            }
            Err(e) => CommandResult::failure(render_command_error(&e)),
        };

        if let Some(msg) = &result.message {
            writer.write_all(msg.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        if result.status == CommandStatus::Exit {
            info!("Exit requested, closing session");
            break;
        }
    }

    if config.banner {
        writer.write_all(FAREWELL.as_bytes()).await?;
    }
    writer.flush().await
}

/// Reads the next line into `buf`, never buffering more than
/// `READ_LIMIT` bytes of it.
async fn read_input<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Input>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let n = (&mut *reader).take(READ_LIMIT).read_until(b'\n', buf).await?;
    if n == 0 {
        return Ok(Input::Eof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if n as u64 == READ_LIMIT {
        discard_line(reader).await?;
        return Ok(Input::TooLong);
    }

    if buf.len() > MAX_COMMAND_LENGTH {
        return Ok(Input::TooLong);
    }

    match std::str::from_utf8(buf.as_slice()) {
        Ok(line) => Ok(Input::Line(line.to_owned())),
        Err(_) => Ok(Input::NotUtf8),
    }
}

/// Skips the rest of the current line without buffering it.
async fn discard_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> ShellConfig {
        ShellConfig {
            prompt: String::new(),
            banner: false,
        }
    }

    async fn transcript(
        storage: &Storage,
        config: &ShellConfig,
        input: impl AsRef<[u8]>,
    ) -> String {
        let mut output = Vec::new();
        run_session(storage, config, input.as_ref(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_session_transcript() {
        let storage = Storage::new();
        let input = "register alice\n\
                     register ALICE\n\
                     create-folder alice docs\n\
                     bogus\n\
                     delete\n\
                     exit\n\
                     register bob\n";

        let output = transcript(&storage, &quiet(), input).await;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "User 'alice' registered successfully",
                "Error: user 'ALICE' already exists",
                "Folder 'docs' created successfully for user 'alice'",
                "Unknown command: bogus",
                "Usage: delete <username>",
            ]
        );
        assert!(storage.get_user("bob").is_err());
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let storage = Storage::new();
        let output = transcript(&storage, &ShellConfig::default(), "register carol").await;
        assert!(output.starts_with("Virtual File System"));
        assert!(output.contains("> User 'carol' registered successfully\n"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(storage.user_count(), 1);
    }

    #[tokio::test]
    async fn test_session_rejects_long_lines() {
        let storage = Storage::new();
        let input = format!("register {}\n", "a".repeat(MAX_COMMAND_LENGTH));
        let output = transcript(&storage, &quiet(), &input).await;
        assert_eq!(output, "Error: command too long\n");
        assert_eq!(storage.user_count(), 0);
    }

    #[tokio::test]
    async fn test_session_survives_long_lines() {
        let storage = Storage::new();
        let description = "x".repeat(MAX_COMMAND_LENGTH * 8);
        let input = format!(
            "register alice\n\
             create-folder alice docs {}\n\
             register bob\n\
             register {}",
            description,
            "c".repeat(MAX_COMMAND_LENGTH)
        );

        let output = transcript(&storage, &quiet(), &input).await;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "User 'alice' registered successfully",
                "Error: command too long",
                "User 'bob' registered successfully",
                "Error: command too long",
            ]
        );
        assert!(storage.get_folder("alice", "docs").is_err());
    }

    #[tokio::test]
    async fn test_session_accepts_line_at_limit() {
        let storage = Storage::new();
        let name = "n".repeat(MAX_COMMAND_LENGTH - "register ".len());
        let line = format!("register {}", name);
        assert_eq!(line.len(), MAX_COMMAND_LENGTH);

        let output = transcript(&storage, &quiet(), format!("{}\r\n", line)).await;
        assert_eq!(
            output,
            format!("Error: the user name '{}' is invalid\n", name)
        );
        assert_eq!(storage.user_count(), 0);
    }

    #[tokio::test]
    async fn test_session_survives_invalid_utf8() {
        let storage = Storage::new();
        let output = transcript(
            &storage,
            &quiet(),
            b"register alice\n\xff\xfe\nregister bob\n",
        )
        .await;

        assert_eq!(
            output,
            "User 'alice' registered successfully\n\
             Error: invalid input\n\
             User 'bob' registered successfully\n"
        );
        assert!(storage.get_user("bob").is_ok());
    }

    #[tokio::test]
    async fn test_session_strips_carriage_returns() {
        let storage = Storage::new();
        let output = transcript(&storage, &quiet(), "register dave\r\nexit\r\n").await;
        assert_eq!(output, "User 'dave' registered successfully\n");
        assert!(storage.get_user("dave").is_ok());
    }
}
