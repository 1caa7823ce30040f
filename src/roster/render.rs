//! Plain text roster report

use std::io::{self, Write};

use super::{PlayerInfo, Roster};

fn format_entry(name: &str, info: &PlayerInfo) -> String {
    format!("\n{}; {}; {}", name, info.age, info.teams.join(", "))
}

/// Writes one `\n<name>; <age>; <team>, <team>...` chunk per player,
/// sorted by player name. Nothing follows the last chunk.
pub fn write_report<W: Write>(writer: &mut W, roster: &Roster) -> io::Result<()> {
    for (name, info) in roster.sorted_entries() {
        writer.write_all(format_entry(name, info).as_bytes())?;
    }
    writer.flush()
}

/// The report [`write_report`] would produce, as a string.
pub fn render_report(roster: &Roster) -> String {
    roster
        .sorted_entries()
        .into_iter()
        .map(|(name, info)| format_entry(name, info))
        .collect()
}
