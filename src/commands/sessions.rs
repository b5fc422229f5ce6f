//! Session subcommand handlers

use crate::cli::SessionCommand;
use crate::commands::{format_millis, truncate_title};
use crate::db::DatabaseService;
use crate::error::Result;
use colored::Colorize;
use prettytable::{format, Table};

/// Handle session commands
pub async fn handle_sessions(db: &DatabaseService, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::List => {
            let sessions = db.list_sessions().await?;

            if sessions.is_empty() {
                println!("{}", "No chat sessions found.".yellow());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

            table.add_row(prettytable::row![
                "ID".bold(),
                "Title".bold(),
                "Messages".bold(),
                "Last Updated".bold()
            ]);

            for session in sessions {
                let title = truncate_title(&session.title, 40);

                table.add_row(prettytable::row![
                    session.session_id.cyan(),
                    title,
                    session.message_count,
                    format_millis(session.updated_at)
                ]);
            }

            println!("\nChat Sessions:");
            table.printstd();
            println!();
        }
        SessionCommand::Show { session_id } => {
            let Some(session) = db.get_session(&session_id).await? else {
                println!("{}", format!("No session with id {}", session_id).yellow());
                return Ok(());
            };

            println!("\n{} ({} messages)\n", session.title.bold(), session.message_count);

            for message in db.get_messages(&session_id).await? {
                let role = match message.role.as_str() {
                    "user" => "user".green(),
                    role => role.blue(),
                };
                println!(
                    "[{}] {}: {}",
                    format_millis(message.timestamp),
                    role,
                    message.content
                );
                if let Some(url) = &message.image_url {
                    println!("      image: {}", url);
                }
            }
            println!();
        }
        SessionCommand::New { session_id, title } => {
            db.create_session(&session_id, &title).await?;
            println!("{}", format!("Created session {}", session_id).green());
        }
        SessionCommand::Delete { session_id } => {
            db.delete_session(&session_id).await?;
            println!(
                "{}",
                format!("Deleted session {} and its messages", session_id).green()
            );
        }
    }

    Ok(())
}
