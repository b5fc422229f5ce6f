//! Notification subcommand handlers

use crate::cli::NotificationCommand;
use crate::commands::format_millis;
use crate::db::DatabaseService;
use crate::error::Result;
use colored::Colorize;
use prettytable::{format, Table};

/// Handle notification commands
pub async fn handle_notifications(db: &DatabaseService, command: NotificationCommand) -> Result<()> {
    match command {
        NotificationCommand::List => {
            let notifications = db.list_notifications().await?;

            if notifications.is_empty() {
                println!("{}", "No notifications.".yellow());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

            table.add_row(prettytable::row![
                "ID".bold(),
                "Type".bold(),
                "Title".bold(),
                "When".bold(),
                "Read".bold()
            ]);

            for item in notifications {
                let read = if item.is_read { "yes" } else { "no" };
                table.add_row(prettytable::row![
                    item.id.to_string().cyan(),
                    item.kind.as_str(),
                    item.title,
                    format_millis(item.timestamp),
                    read
                ]);
            }

            println!("\nNotifications (most recent first):");
            table.printstd();
            println!();
        }
        NotificationCommand::MarkRead { id } => {
            db.mark_notification_read(id).await?;
            println!("{}", format!("Marked notification {} as read", id).green());
        }
        NotificationCommand::Delete { id } => {
            db.delete_notification(id).await?;
            println!("{}", format!("Deleted notification {}", id).green());
        }
        NotificationCommand::Unread => {
            let count = db.unread_notification_count().await?;
            println!("{} unread notification(s)", count);
        }
    }

    Ok(())
}
