use anyhow::Result;

use rentride_core::catalog::{Catalog, FaqQuery};

pub fn run(query: Option<String>, topic: Option<String>) -> Result<()> {
    let catalog = Catalog::sample();
    let entries = FaqQuery { text: query, topic }.apply(&catalog.faqs);

    if entries.is_empty() {
        println!("No help articles match.");
        return Ok(());
    }

    for entry in entries {
        println!("[{}] {}", entry.topic, entry.question);
        println!("    {}", entry.answer);
        println!();
    }

    Ok(())
}
