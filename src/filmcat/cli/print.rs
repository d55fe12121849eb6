use crate::api::{CmdMessage, ListedMovie, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 5] = ["#", "Title", "Director", "Year", "Genre"];

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
        };
        writeln!(out, "\n{}", line)?;
    }
    Ok(())
}

/// Render movies as an aligned table. With `max_cell_width`, longer cells are
/// cut and end in `…`; without it every field is shown in full.
pub fn print_movies<W: Write>(
    out: &mut W,
    movies: &[ListedMovie],
    max_cell_width: Option<usize>,
) -> io::Result<()> {
    let cell = |s: &str| match max_cell_width {
        Some(max) => truncate_to_width(s, max),
        None => s.to_string(),
    };
    let rows: Vec<[String; 5]> = movies
        .iter()
        .map(|lm| {
            [
                lm.index.to_string(),
                cell(&lm.movie.title),
                cell(&lm.movie.director),
                cell(&lm.movie.release_year),
                cell(&lm.movie.genre),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    writeln!(out, "{}", header.join(COLUMN_GAP).bold())?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad(cell, *w);
                match col {
                    0 => padded.yellow().to_string(),
                    4 => padded.dimmed().to_string(),
                    _ => padded,
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end())?;
    }
    Ok(())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
