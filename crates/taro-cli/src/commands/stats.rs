use chrono::Utc;
use colored::Colorize;
use comfy_table::Table;
use taro_core::ReadingStats;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let readings = ctx.store.all_readings();
    if readings.is_empty() {
        println!("  No readings yet.");
        return Ok(());
    }

    let stats = ReadingStats::compute(&readings, Utc::now().date_naive());

    println!("  {}", "Reading statistics".bold());
    println!("  Total readings:  {}", stats.total);
    println!("  Favorites:       {}", stats.favorites);
    if let Some(spread) = stats.most_popular_spread() {
        println!("  Favorite spread: {} {}", spread.icon(), spread.title());
    }
    if let Some(card) = &stats.most_frequent_card {
        println!("  Frequent card:   {card}");
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Spread", "Readings"]);
    for (spread, count) in &stats.distribution {
        table.add_row(vec![
            format!("{} {}", spread.icon(), spread.title()),
            count.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Last seven days".bold());
    for (day, count) in &stats.last_seven_days {
        println!("  {}  {:>2} {}", day.format("%a %d"), count, "▪".repeat(*count));
    }
    Ok(())
}
