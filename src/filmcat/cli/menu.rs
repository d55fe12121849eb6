use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Update,
    Delete,
    SearchAndFilter,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Display,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::SearchAndFilter,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Display => 1,
            MenuChoice::Add => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::SearchAndFilter => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Display => "Display Movie Catalog",
            MenuChoice::Add => "Add New Movie",
            MenuChoice::Update => "Update Movie Details",
            MenuChoice::Delete => "Delete Movie",
            MenuChoice::SearchAndFilter => "Search and Filter",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| trimmed == choice.key().to_string())
            .ok_or_else(|| InvalidChoice(trimmed.to_string()))
    }
}
