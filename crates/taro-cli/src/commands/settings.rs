use colored::Colorize;
use taro_core::{AppLanguage, TaroError, UserSettings, normalize_user_name};

use super::Context;

/// Changes requested by `taro settings set`. `None` leaves a field as is.
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub language: Option<String>,
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
    pub onboarding_seen: Option<bool>,
}

impl SettingsUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.language.is_none()
            && self.dark_mode.is_none()
            && self.notifications.is_none()
            && self.onboarding_seen.is_none()
    }

    fn apply(self, settings: &mut UserSettings) -> Result<(), String> {
        if let Some(name) = self.name {
            settings.user_name = normalize_user_name(&name).ok_or("name must not be empty")?;
        }
        if let Some(language) = self.language {
            settings.language = language
                .parse::<AppLanguage>()
                .map_err(|e: TaroError| e.to_string())?;
        }
        if let Some(dark_mode) = self.dark_mode {
            settings.is_dark_mode = dark_mode;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications_enabled = notifications;
        }
        if let Some(seen) = self.onboarding_seen {
            settings.has_seen_onboarding = seen;
        }
        Ok(())
    }
}

pub fn show(ctx: &Context) -> Result<(), String> {
    print_settings(&ctx.store.settings());
    Ok(())
}

pub fn set(ctx: &mut Context, update: SettingsUpdate) -> Result<(), String> {
    if update.is_empty() {
        return Err("nothing to change; see `taro settings set --help`".into());
    }
    let mut settings = ctx.store.settings();
    update.apply(&mut settings)?;
    ctx.store.save_settings(&settings);
    println!("  {}", "Settings saved.".green());
    print_settings(&settings);
    Ok(())
}

pub fn reset(ctx: &mut Context) -> Result<(), String> {
    ctx.store.reset_settings();
    println!("  {}", "Settings restored to defaults.".green());
    print_settings(&ctx.store.settings());
    Ok(())
}

fn print_settings(settings: &UserSettings) {
    let name = if settings.has_user_name() {
        settings.user_name.as_str()
    } else {
        "(not set)"
    };
    println!("  Name:           {name}");
    println!("  Language:       {}", settings.language);
    println!("  Dark mode:      {}", on_off(settings.is_dark_mode));
    println!("  Notifications:  {}", on_off(settings.notifications_enabled));
    let onboarding = if settings.has_seen_onboarding {
        "seen"
    } else {
        "not seen"
    };
    println!("  Onboarding:     {onboarding}");
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
