//! The interactive menu loop.
//!
//! ```text
//! MenuDisplay -> AwaitingChoice -> Dispatch(1..=6) -> MenuDisplay
//!                                        \-> Exited (choice 6 or end of input)
//! ```
//!
//! Errors from the lower layers abort only the current iteration: they are
//! printed and the loop carries on. Only a broken terminal stops the shell.

use super::menu::MenuChoice;
use super::print::{print_messages, print_movies};
use crate::api::{CatalogApi, MovieDraft};
use crate::commands::parse_index;
use crate::error::{CatalogError, Result};
use crate::model::{Movie, SearchFilter};
use crate::store::CatalogStore;
use colored::Colorize;
use std::io::{BufRead, ErrorKind, Write};

// Search hits are a summary; the full catalog view never truncates.
const SEARCH_CELL_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, S: CatalogStore, R: BufRead, W: Write> {
    api: &'a mut CatalogApi<S>,
    input: R,
    output: W,
}

impl<'a, S: CatalogStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut CatalogApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CatalogError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                    tracing::debug!("input closed, leaving shell");
                    return Ok(());
                }
                Err(CatalogError::Io(e)) => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(error = %e, "command failed");
                    writeln!(self.output, "\n{} {}", "Error:".red().bold(), e)?;
                }
            }
        }
    }

    /// One pass through the state machine: show the menu, read a choice, dispatch.
    pub fn step(&mut self) -> Result<Flow> {
        self.render_menu()?;
        let answer = self.ask("\nEnter your choice: ")?;
        match answer.parse::<MenuChoice>() {
            Ok(choice) => self.dispatch(choice),
            Err(_) => {
                writeln!(self.output, "\n{}", "Invalid choice, please try again.".yellow())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", "Movie Catalog Manager".bold())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Display => self.display()?,
            MenuChoice::Add => self.add()?,
            MenuChoice::Update => self.update()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::SearchAndFilter => self.search()?,
            MenuChoice::Exit => {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<()> {
        writeln!(self.output, "\nMovie Catalog:\n")?;
        let result = self.api.list_movies();
        if !result.listed_movies.is_empty() {
            print_movies(&mut self.output, &result.listed_movies, None)?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.output, "\nAdd New Movie:\n")?;
        let movie = Movie {
            title: self.ask("Title: ")?,
            director: self.ask("Director: ")?,
            release_year: self.ask("Release Year: ")?,
            genre: self.ask("Genre: ")?,
        };
        let result = self.api.add_movie(movie)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        writeln!(self.output, "\nUpdate Movie Details:\n")?;
        let index = parse_index(&self.ask("Enter the index of the movie to update: ")?)?;
        let current = self
            .api
            .movie(index)
            .cloned()
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.api.len(),
            })?;

        let draft = MovieDraft {
            title: Some(self.ask(&format!("Title ({}): ", current.title))?),
            director: Some(self.ask(&format!("Director ({}): ", current.director))?),
            release_year: Some(self.ask(&format!("Release Year ({}): ", current.release_year))?),
            genre: Some(self.ask(&format!("Genre ({}): ", current.genre))?),
        };
        let result = self.api.update_movie(index, draft.apply(&current))?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        writeln!(self.output, "\nDelete Movie:\n")?;
        let index = parse_index(&self.ask("Enter the index of the movie to delete: ")?)?;
        let result = self.api.delete_movie(index)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "\nSearch and Filter:\n")?;
        let keyword = self.ask("Enter keyword to search: ")?;
        let criteria = SearchFilter {
            genre: self.ask("Enter genre to filter (leave blank for no filter): ")?,
            release_year: self.ask("Enter release year to filter (leave blank for no filter): ")?,
        };

        let result = self.api.search_movies(&keyword, &criteria);
        writeln!(self.output, "\nSearch results:\n")?;
        if !result.listed_movies.is_empty() {
            print_movies(&mut self.output, &result.listed_movies, Some(SEARCH_CELL_WIDTH))?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// Print `question`, then read one line. End of input surfaces as an
    /// `UnexpectedEof` I/O error.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
