use crossterm::{
    QueueableCommand,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use league_hub::pages::colors::{stat_value_fg, text_fg};
use league_hub::{NAME, VERSION};
use std::io::Write;

/// Box frame lines for the given content, without colours.
fn frame(lines: &[String]) -> (usize, String, String, String) {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let top = format!("╔{:═<w$}╗", "", w = width + 2);
    let sep = format!("╠{:═<w$}╣", "", w = width + 2);
    let bottom = format!("╚{:═<w$}╝", "", w = width + 2);
    (width, top, sep, bottom)
}

/// Writes a framed status box. The first line is a title separated from the
/// rest; a line with a colour gets that colour for the text after its ':'.
pub fn write_status_box<W: Write>(out: &mut W, lines: &[(String, Option<Color>)]) -> std::io::Result<()> {
    let plain: Vec<String> = lines.iter().map(|(l, _)| l.clone()).collect();
    let (width, top, sep, bottom) = frame(&plain);

    out.queue(SetForegroundColor(text_fg()))?
        .queue(Print(format!("{top}\n")))?;
    for (index, (line, color)) in lines.iter().enumerate() {
        let pad = width - line.chars().count();
        match (color, line.split_once(':')) {
            (Some(c), Some((label, value))) => {
                out.queue(Print(format!("║ {label}:")))?
                    .queue(SetForegroundColor(*c))?
                    .queue(Print(value))?
                    .queue(SetForegroundColor(text_fg()))?
                    .queue(Print(format!("{:pad$} ║\n", "")))?;
            }
            (Some(c), None) => {
                out.queue(Print("║ "))?
                    .queue(SetForegroundColor(*c))?
                    .queue(Print(line))?
                    .queue(SetForegroundColor(text_fg()))?
                    .queue(Print(format!("{:pad$} ║\n", "")))?;
            }
            (None, _) => {
                out.queue(Print(format!("║ {line}{:pad$} ║\n", "")))?;
            }
        }
        if index == 0 && lines.len() > 2 {
            out.queue(Print(format!("{sep}\n")))?;
        }
    }
    out.queue(Print(format!("{bottom}\n")))?.queue(ResetColor)?;
    out.flush()
}

/// Lines shown by `--version`.
pub fn version_lines() -> Vec<(String, Option<Color>)> {
    vec![
        ("League Hub".to_string(), None),
        (String::new(), None),
        (format!("Package: {NAME}"), Some(text_fg())),
        (format!("Version: {VERSION}"), Some(stat_value_fg())),
    ]
}

pub fn print_version_info() -> std::io::Result<()> {
    let mut out = std::io::stdout();
    writeln!(out)?;
    write_status_box(&mut out, &version_lines())
}
