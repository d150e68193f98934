//! `profilegate profiles`: list profiles without revealing PINs.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProfileSummary<'a> {
    pub name: &'a str,
    pub pin_required: bool,
}

pub fn summaries(config: &Config) -> Vec<ProfileSummary<'_>> {
    config
        .profiles
        .iter()
        .map(|p| ProfileSummary {
            name: &p.name,
            pin_required: p.requires_pin(),
        })
        .collect()
}

pub fn render_table(config: &Config) -> String {
    let rows = summaries(config);
    if rows.is_empty() {
        return "No profiles configured.\n".to_string();
    }
    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let marker = if row.pin_required { "PIN required" } else { "open" };
        out.push_str(&format!("{:<width$}  {}\n", row.name, marker, width = width));
    }
    out
}

pub fn print(config: &Config, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&summaries(config))
            .context("Failed to serialize profiles")?;
        println!("{}", out);
    } else {
        print!("{}", render_table(config));
    }
    Ok(())
}
