//! Data maintenance subcommand handlers

use crate::backup::BackupService;
use crate::cli::DataCommand;
use crate::db::service::now_millis;
use crate::db::types::{MessageDraft, NotificationDraft, NotificationKind};
use crate::db::DatabaseService;
use crate::error::Result;
use colored::Colorize;
use std::io::Write;

/// Handle data maintenance commands
pub async fn handle_data(
    db: &DatabaseService,
    backup: &BackupService,
    command: DataCommand,
) -> Result<()> {
    match command {
        DataCommand::Backup { output } => {
            backup.write_backup(&output).await?;
            println!(
                "{}",
                format!("Backup written to {}", output.display()).green()
            );
        }
        DataCommand::Restore { input } => {
            backup.restore_from_file(&input).await?;
            println!(
                "{}",
                format!("Restored data from {}", input.display()).green()
            );
        }
        DataCommand::ExportCsv { output } => {
            let csv = backup.export_chat_csv().await?;
            std::fs::write(&output, csv)?;
            println!(
                "{}",
                format!("Chat history exported to {}", output.display()).green()
            );
        }
        DataCommand::Stats => {
            let stats = backup.stats().await?;
            println!("Sessions:      {}", stats.total_sessions);
            println!("Messages:      {}", stats.total_messages);
            println!("Notifications: {}", stats.total_notifications);
        }
        DataCommand::Seed => {
            seed_sample_data(db).await?;
            println!("{}", "Sample data created.".green());
        }
        DataCommand::Clear { yes } => {
            if !yes && !confirm("Delete all sessions, messages, and notifications?")? {
                println!("{}", "Aborted.".yellow());
                return Ok(());
            }
            db.clear_all().await?;
            println!("{}", "Cleared sessions, messages, and notifications.".green());
        }
    }

    Ok(())
}

/// Write a small sample conversation and two notifications
///
/// Mirrors what the assistant app seeds for manual testing.
async fn seed_sample_data(db: &DatabaseService) -> Result<()> {
    let now = now_millis();
    let session_id = format!("sample-session-{}", now);
    db.create_session(&session_id, "Sample conversation").await?;

    let turns = [
        MessageDraft::user("Hello! Are you there?", now - 60_000, session_id.as_str()),
        MessageDraft::assistant(
            "Hello! How can I help you today?",
            now - 50_000,
            session_id.as_str(),
        ),
        MessageDraft::user(
            "What's the weather like today?",
            now - 40_000,
            session_id.as_str(),
        ),
        MessageDraft::assistant(
            "I'm afraid I can't access live weather data. Try a weather app for current conditions.",
            now - 30_000,
            session_id.as_str(),
        ),
    ];
    for draft in turns {
        db.save_message(draft).await?;
    }

    db.save_notification(NotificationDraft {
        title: "Welcome!".to_string(),
        body: "Welcome to your AI personal assistant.".to_string(),
        timestamp: now - 3_600_000,
        is_read: false,
        kind: NotificationKind::System,
    })
    .await?;

    db.save_notification(NotificationDraft {
        title: "Sample notification".to_string(),
        body: "This is a sample notification. Try marking it as read.".to_string(),
        timestamp: now - 1_800_000,
        is_read: true,
        kind: NotificationKind::System,
    })
    .await?;

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
