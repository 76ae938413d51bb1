use anyhow::Result;

use super::context::ContextOptions;

pub fn run(options: &ContextOptions, clear: bool) -> Result<()> {
    let config = options.load_config()?;
    let history = options.history(&config)?;

    if clear {
        history.clear();
        println!("Browsing history cleared");
        return Ok(());
    }

    let items = history.get_history();
    if items.is_empty() {
        println!("No styles viewed yet");
    }
    for item in items {
        println!("{}  {}", item.viewed_at.to_rfc3339(), item.style_id);
    }
    Ok(())
}
