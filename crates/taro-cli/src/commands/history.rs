use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use taro_core::Reading;

use super::{Context, short_id};

pub fn list(ctx: &Context, favorites: bool) -> Result<(), String> {
    let readings = if favorites {
        ctx.store.favorite_readings()
    } else {
        ctx.store.all_readings()
    };

    if readings.is_empty() {
        if favorites {
            println!("  No favorite readings.");
        } else {
            println!("  No readings found.");
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Date", "Spread", "Name", "Cards", "★"]);

    for reading in &readings {
        table.add_row(vec![
            short_id(reading.id()),
            reading.created_at().format("%Y-%m-%d %H:%M").to_string(),
            format!("{} {}", reading.spread().icon(), reading.spread().title()),
            reading.user_name().to_string(),
            reading.cards().to_string(),
            if reading.is_favorite() { "★" } else { "" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", readings.len());
    Ok(())
}

pub fn show(ctx: &Context, id: &str) -> Result<(), String> {
    let reading = ctx.find_reading(id)?;
    print_reading(&reading);
    Ok(())
}

pub fn favorite(ctx: &mut Context, id: &str) -> Result<(), String> {
    let reading = ctx.find_reading(id)?;
    match ctx.store.toggle_favorite(reading.id()) {
        Some(true) => println!("  Added {} to favorites.", short_id(reading.id())),
        Some(false) => println!("  Removed {} from favorites.", short_id(reading.id())),
        None => return Err(format!("no reading with id '{id}'")),
    }
    Ok(())
}

pub fn delete(ctx: &mut Context, id: &str) -> Result<(), String> {
    let reading = ctx.find_reading(id)?;
    ctx.store.delete_reading(reading.id());
    println!("  Deleted reading {}.", short_id(reading.id()));
    Ok(())
}

pub fn clear(ctx: &mut Context) -> Result<(), String> {
    let before = ctx.store.all_readings().len();
    ctx.store.clear_history();
    let kept = ctx.store.all_readings().len();
    println!(
        "  Cleared {} readings, kept {kept} favorites.",
        before.saturating_sub(kept)
    );
    Ok(())
}

pub fn share(ctx: &Context, id: &str) -> Result<(), String> {
    let reading = ctx.find_reading(id)?;
    println!("{}", reading.share_text());
    Ok(())
}

/// Print a reading in full.
pub fn print_reading(reading: &Reading) {
    let star = if reading.is_favorite() { " ★" } else { "" };
    println!(
        "  {} {}{star}",
        reading.spread().icon(),
        reading.spread().title().bold()
    );
    println!(
        "  For {} · {} · {}",
        reading.user_name(),
        reading.created_at().format("%Y-%m-%d %H:%M UTC"),
        reading.id().to_string().dimmed()
    );
    println!("  Cards: {}\n", reading.cards());
    println!("{}", reading.text());
}
