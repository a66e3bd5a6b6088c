//! Terminal prompts for interactive mode.

use std::io::BufRead;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error_handling::InputError;

const NEW_DOMAIN_ITEM: &str = "Enter a new domain";

/// How the exported settings reach the checker in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsInput {
    /// Pasted into the terminal, ended by an empty line
    Paste,
    /// Copied to the clipboard and picked up automatically
    Clipboard,
}

impl SettingsInput {
    const CHOICES: [SettingsInput; 2] = [SettingsInput::Paste, SettingsInput::Clipboard];

    fn label(self) -> &'static str {
        match self {
            SettingsInput::Paste => "Paste into the terminal",
            SettingsInput::Clipboard => "Copy to the clipboard",
        }
    }
}

/// Asks for the domain to check, offering recent domains newest first.
///
/// # Errors
///
/// `InputError::EmptyDomain` if the user enters nothing.
pub fn prompt_domain(history: &[String]) -> Result<String, InputError> {
    let theme = ColorfulTheme::default();

    let recent: Vec<&String> = history.iter().rev().collect();
    let domain = if recent.is_empty() {
        ask_new_domain(&theme)?
    } else {
        let mut items: Vec<&str> = recent.iter().map(|d| d.as_str()).collect();
        items.push(NEW_DOMAIN_ITEM);
        let choice = Select::with_theme(&theme)
            .with_prompt("Recent domains")
            .items(&items)
            .default(0)
            .interact()?;
        match recent.get(choice) {
            Some(domain) => domain.to_string(),
            None => ask_new_domain(&theme)?,
        }
    };

    let domain = domain.trim().to_string();
    if domain.is_empty() {
        return Err(InputError::EmptyDomain);
    }
    Ok(domain)
}

fn ask_new_domain(theme: &ColorfulTheme) -> Result<String, InputError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt("Domain")
        .allow_empty(true)
        .interact_text()?)
}

/// Asks how the settings will be entered. Defaults to pasting.
pub fn prompt_input_method() -> Result<SettingsInput, InputError> {
    let prompt = if cfg!(target_os = "macos") {
        "How will you enter the DNS settings? (choose the clipboard if a line exceeds 1024 characters)"
    } else {
        "How will you enter the DNS settings?"
    };
    let labels: Vec<&str> = SettingsInput::CHOICES.iter().map(|c| c.label()).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(SettingsInput::CHOICES
        .get(choice)
        .copied()
        .unwrap_or(SettingsInput::Paste))
}

/// Reads pasted settings from `reader` up to the first empty line.
pub fn read_settings_until_blank<R: BufRead>(reader: R) -> Result<String, InputError> {
    let mut settings = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        settings.push_str(&line);
        settings.push('\n');
    }
    Ok(settings)
}

/// Asks the user to paste the exported settings on stdin.
pub fn prompt_settings() -> Result<String, InputError> {
    println!("Paste the DNS settings, then press Enter on an empty line to run the check:");
    read_settings_until_blank(std::io::stdin().lock())
}

/// Asks whether to check another domain. Defaults to yes.
pub fn ask_for_rerun() -> Result<bool, InputError> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Run again?")
        .default(true)
        .interact()?)
}
