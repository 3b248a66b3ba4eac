use comfy_table::{ContentArrangement, Table};
use taro_core::{Deck, SpreadCategory};

pub fn cards() -> Result<(), String> {
    for (i, name) in Deck::all_names().iter().enumerate() {
        println!("  {:>2}. {name}", i + 1);
    }
    println!();
    println!("  {} cards", Deck::all_names().len());
    Ok(())
}

pub fn spreads() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Title", ""]);

    for spread in SpreadCategory::ALL {
        table.add_row(vec![spread.slug(), spread.title(), spread.icon()]);
    }

    println!("{table}");
    Ok(())
}
