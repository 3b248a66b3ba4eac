use colored::Colorize;
use taro_core::Deck;

pub fn run(count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng_from(seed);
    let draw = Deck::draw(&mut rng, count).map_err(|e| e.to_string())?;

    for (i, card) in draw.iter().enumerate() {
        let orientation = if card.is_reversed() {
            "reversed".yellow()
        } else {
            "upright".green()
        };
        println!("  {}. {} ({orientation})", i + 1, card.name().bold());
    }
    Ok(())
}
