use anyhow::Result;

use rentride_core::catalog::{Catalog, InboxQuery};

pub fn run(unread_only: bool, search: Option<String>) -> Result<()> {
    let catalog = Catalog::sample();
    let messages = InboxQuery {
        unread_only,
        text: search,
    }
    .apply(&catalog.messages);

    println!(
        "Inbox ({} unread, {} shown):\n",
        catalog.unread_count(),
        messages.len()
    );

    for message in messages {
        let marker = if message.unread { "●" } else { " " };
        println!(
            "{} {}  {} - {}",
            marker,
            message.sent_at.format("%Y-%m-%d %H:%M"),
            message.sender,
            message.subject
        );
        println!("    {}", message.body);
    }

    Ok(())
}
