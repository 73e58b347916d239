//! Renders the snapshot as a two-column terminal report: a fixed glyph
//! block on the left, labeled fields on the right.

use std::io;
use std::io::Write;

use chrono::Local;

use crate::common::Tint;
use crate::domain::SystemSnapshot;

/// Visible width of the glyph column. Raw art is padded to this width
/// before tinting so alignment holds with and without escapes.
const LOGO_COLUMN_WIDTH: usize = 11;

const LOGO: [(Tint, &str); 6] = [
    (Tint::Cyan, "     ( ("),
    (Tint::Cyan, "      ) )"),
    (Tint::Yellow, "  ........"),
    (Tint::Yellow, "  |      |]"),
    (Tint::Yellow, "  |      |"),
    (Tint::Yellow, "   ======"),
];

fn logo_lines() -> Vec<String> {
    LOGO.iter()
        .map(|(tint, art)| tint.paint(&format!("{:<width$}", art, width = LOGO_COLUMN_WIDTH)))
        .collect()
}

fn data_lines(snapshot: &SystemSnapshot) -> Vec<String> {
    let memory = snapshot.memory;
    let disk = snapshot.disk;
    vec![
        Tint::Bold.paint(&format!("{}@{}", snapshot.user, snapshot.host)),
        format!(
            "{} (v{})",
            Tint::Cyan.paint(env!("CARGO_PKG_NAME")),
            env!("CARGO_PKG_VERSION")
        ),
        String::new(),
        format!("{}{}", Tint::Yellow.paint("OS:     "), snapshot.os),
        format!("{}{}", Tint::Yellow.paint("Kernel: "), snapshot.kernel),
        format!("{}{}", Tint::Yellow.paint("Arch:   "), snapshot.arch),
        format!("{}{}", Tint::Yellow.paint("Uptime: "), snapshot.uptime),
        String::new(),
        format!("{}{}", Tint::Green.paint("CPU:  "), snapshot.cpu),
        format!(
            "{}{}MB / {}MB ({:.1}%)",
            Tint::Green.paint("Mem:  "),
            memory.used_mb,
            memory.total_mb,
            memory.percent_used()
        ),
        format!(
            "{}{}GB / {}GB ({:.1}%)",
            Tint::Green.paint("Disk: "),
            disk.used_gb,
            disk.total_gb,
            disk.percent_used()
        ),
        String::new(),
        format!("{}{}", Tint::Magenta.paint("Shell: "), snapshot.shell),
        format!("{}{}", Tint::Magenta.paint("Term:  "), snapshot.term),
        format!(
            "{}{}",
            Tint::Magenta.paint("Time:  "),
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ),
    ]
}

/// Pairs the two blocks line by line up to the longer one, padding the
/// shorter side with blanks.
fn interleave(logo: &[String], data: &[String]) -> Vec<String> {
    let line_count = logo.len().max(data.len());
    let blank_logo = " ".repeat(LOGO_COLUMN_WIDTH);
    (0..line_count)
        .map(|i| {
            let logo_line = logo.get(i).map_or(blank_logo.as_str(), String::as_str);
            let data_line = data.get(i).map_or("", String::as_str);
            format!("  {logo_line}  {data_line}")
        })
        .collect()
}

pub fn render(snapshot: &SystemSnapshot, out: &mut dyn Write) -> io::Result<()> {
    for line in interleave(&logo_lines(), &data_lines(snapshot)) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn print(snapshot: &SystemSnapshot) -> io::Result<()> {
    let stdout = io::stdout();
    render(snapshot, &mut stdout.lock())
}
