use colored::Colorize;
use taro_core::{Deck, Reading, SpreadCategory, TaroError, normalize_user_name};

use super::Context;

pub fn run(
    ctx: &mut Context,
    spread: &str,
    name: Option<&str>,
    lang: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let spread: SpreadCategory = spread.parse().map_err(|e: TaroError| e.to_string())?;

    let mut settings = ctx.store.settings();
    let user_name = normalize_user_name(name.unwrap_or(&settings.user_name))
        .ok_or("no name given; pass --name or run `taro settings set --name <NAME>`")?;
    if settings.user_name != user_name {
        settings.user_name = user_name.clone();
        ctx.store.save_settings(&settings);
    }

    let language = match lang {
        Some(code) if !code.trim().is_empty() => code.trim().to_lowercase(),
        _ => settings.language.resolve(super::system_locale().as_deref()),
    };

    let draw = Deck::draw_reading(&mut super::rng_from(seed));
    println!(
        "  {} {} reading for {}",
        spread.icon(),
        spread.title().bold(),
        user_name.bold()
    );
    println!("  {}\n", "Consulting the cards...".dimmed());

    let backend = ctx.backend()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;

    // Ctrl-C abandons the in-flight request; nothing is saved.
    let outcome = runtime.block_on(async {
        tokio::select! {
            result = backend.request_reading(&draw, &user_name, spread, &language) => Some(result),
            Ok(()) = tokio::signal::ctrl_c() => None,
        }
    });

    match outcome {
        None => {
            println!("  {}", "Reading abandoned.".yellow());
            Ok(())
        }
        Some(Err(e)) => {
            tracing::debug!(retryable = e.is_retryable(), "reading request failed");
            Err(format!("{e}\n  Run the same command again to try once more."))
        }
        Some(Ok(text)) => {
            let reading = Reading::new(user_name, spread, draw, text);
            ctx.store.save_reading(reading.clone());
            super::history::print_reading(&reading);
            Ok(())
        }
    }
}
