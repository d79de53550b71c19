use anyhow::Result;
use eonet::{Client, EventsQuery};
use flexi_logger::Logger;

fn main() -> Result<()> {
    // RUST_LOG=eonet=debug shows every request.
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let client = Client::new()?;

    let recent = client.get_recent_open_events("5")?;
    println!("{}", recent.title);
    for event in recent.events() {
        let category = event
            .categories
            .first()
            .map(|c| c.title.as_str())
            .unwrap_or("-");
        println!("  {:<14} {:<16} {}", event.id, category, event.title);
    }

    let wildfires = client.get_events_by_category_id("wildfires")?;
    println!("{} open wildfire event(s)", wildfires.events().len());

    let closed = client.get_events(&EventsQuery {
        status: "closed".to_string(),
        limit: 3,
        ..Default::default()
    })?;
    println!("{} bytes of closed events", closed.len());

    Ok(())
}
