//! Weekly notification e-mails, written as one plaintext file.
//!
//! Active players get their targets and career summary. Players eliminated
//! at the end of the previous week get an elimination notice. Anyone
//! eliminated earlier gets nothing.

use crate::logic::{assignment_for, career_summary, AssignmentGraph, CareerSummary};
use crate::models::{DataIntegrityError, FrozenLedger, PlayerId};
use std::io::{self, Write};

const SEPARATOR: &str = "=================================================================";

/// Write every notification for `game_week` to `out`. Returns how many were written.
pub fn write_notifications<W: Write>(
    out: &mut W,
    ledger: &FrozenLedger,
    graph: &AssignmentGraph,
    game_week: u32,
) -> io::Result<usize> {
    let mut written = 0;
    for player in ledger.players() {
        let text = if !player.is_eliminated() {
            targets_notice(ledger, graph, player.id, game_week)
        } else if player.week_eliminated.checked_add(1) == Some(game_week) {
            elimination_notice(ledger, player.id, game_week)
        } else {
            continue;
        };
        let text = text.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        out.write_all(text.as_bytes())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

fn targets_notice(
    ledger: &FrozenLedger,
    graph: &AssignmentGraph,
    player_id: PlayerId,
    game_week: u32,
) -> Result<String, DataIntegrityError> {
    let summary = career_summary(ledger, player_id)?;
    let targets = assignment_for(ledger, graph, player_id)?;
    let (email, first_name) = contact(ledger, player_id);

    let mut text = String::new();
    text.push_str(&format!("{}\n", email));
    text.push_str(&format!("[Assassins] - Week {} Targets\n", game_week));
    text.push_str(&format!(
        "Assassin {}, your list of assigned targets for this week follows.\n\n",
        first_name
    ));
    if targets.is_empty() {
        log::warn!("Active player {} has no targets this week", player_id);
        text.push_str("(no targets assigned)\n");
    }
    for t in &targets {
        text.push_str(&format!("- {} {}\n", t.first_name, t.last_name));
    }
    text.push_str("\nPlayer Career Summary:\n\n");
    text.push_str(&summary_text(ledger, &summary));
    text.push_str(&format!("\n{}\n", SEPARATOR));
    Ok(text)
}

fn elimination_notice(
    ledger: &FrozenLedger,
    player_id: PlayerId,
    game_week: u32,
) -> Result<String, DataIntegrityError> {
    let summary = career_summary(ledger, player_id)?;
    let (email, first_name) = contact(ledger, player_id);
    let eliminated_week = game_week - 1;

    let mut text = String::new();
    text.push_str(&format!("{}\n", email));
    text.push_str(&format!(
        "[Assassins] - You have been eliminated at the end of week {}\n",
        eliminated_week
    ));
    text.push_str(&format!(
        "Assassin {}, unfortunately your performance relative to your peers has been insufficient. \
         You have been eliminated from the game. You will continue to receive the weekly game update \
         for the remainder of the game. New modifiers may come into effect that will allow you to \
         continue participating.\n\n",
        first_name
    ));
    text.push_str("Below is your final score and career summary.\n\n");
    text.push_str(&summary_text(ledger, &summary));
    text.push_str(&format!("\n{}\n", SEPARATOR));
    Ok(text)
}

/// Career totals followed by the weekly breakdown.
pub fn summary_text(ledger: &FrozenLedger, summary: &CareerSummary) -> String {
    let mut text = String::new();
    text.push_str(&format!("Total Kills: {}\n", summary.total_kills));
    text.push_str(&format!("Total Deaths: {}\n", summary.total_deaths));
    text.push_str(&format!("Total Score: {}\n", summary.total_score));
    text.push_str("\n=== Weekly Breakdown ===\n\n");

    for week in &summary.per_week {
        text.push_str(&format!("Week number {}:\n", week.week));
        text.push_str(&format!(
            "Kills / Deaths / Score == {} / {} / {}\n",
            week.kills, week.deaths, week.score
        ));
        if !week.killed_ids.is_empty() {
            text.push_str("You successfully killed the following targets:\n");
            for &id in &week.killed_ids {
                text.push_str(&format!("\t- {}\n", name_of(ledger, id)));
            }
        }
        if !week.killed_by_ids.is_empty() {
            text.push_str("You were killed by the following assassins:\n");
            for &id in &week.killed_by_ids {
                text.push_str(&format!("\t- {}\n", name_of(ledger, id)));
            }
        }
        if !week.bonuses.is_empty() {
            text.push_str("You earned the following bonuses:\n");
            for bonus in &week.bonuses {
                text.push_str(&format!("\t- {} ({:+})", bonus.name, bonus.points));
                if !bonus.description.is_empty() {
                    text.push_str(&format!(": {}", bonus.description));
                }
                if let Some(target_id) = bonus.target_id {
                    text.push_str(&format!(" [{}]", name_of(ledger, target_id)));
                }
                text.push('\n');
            }
        }
        text.push('\n');
    }
    text
}

fn contact(ledger: &FrozenLedger, player_id: PlayerId) -> (String, String) {
    ledger
        .player(player_id)
        .map(|p| (p.email.clone(), p.first_name.clone()))
        .unwrap_or_default()
}

fn name_of(ledger: &FrozenLedger, id: PlayerId) -> String {
    ledger
        .player(id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| format!("Player {}", id))
}
