//! Menu actions.

use std::fmt;
use std::str::FromStr;

/// One entry of the dispatch menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadFile,
    InsertOne,
    ShowTop,
    RemoveTop,
    ShowAllSorted,
    Exit,
}

/// A menu selection that matches no action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized option '{0}', choose 1-6")]
pub struct UnknownAction(pub String);

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::LoadFile,
        MenuAction::InsertOne,
        MenuAction::ShowTop,
        MenuAction::RemoveTop,
        MenuAction::ShowAllSorted,
        MenuAction::Exit,
    ];

    /// The number typed to select this action.
    pub fn key(self) -> u8 {
        match self {
            MenuAction::LoadFile => 1,
            MenuAction::InsertOne => 2,
            MenuAction::ShowTop => 3,
            MenuAction::RemoveTop => 4,
            MenuAction::ShowAllSorted => 5,
            MenuAction::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::LoadFile => "Load shipments from CSV file",
            MenuAction::InsertOne => "Insert shipment",
            MenuAction::ShowTop => "Show most urgent shipment",
            MenuAction::RemoveTop => "Remove most urgent shipment",
            MenuAction::ShowAllSorted => "Show all shipments by priority",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key(), self.label())
    }
}

impl FromStr for MenuAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u8>()
            .ok()
            .and_then(|key| MenuAction::ALL.into_iter().find(|a| a.key() == key))
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
