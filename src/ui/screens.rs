use crate::models::{SortKey, SortOrder};

/// The five numbered menus. Each maps a digit key to an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Menu {
    Main,
    Insert,
    Delete,
    Edit,
    Sort,
}

/// Which end, neighbour, or ordinal an insert/delete/edit entry aims at. Only
/// the relational and positional ones need a follow-up prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Head,
    Tail,
    BeforeStudent,
    AfterStudent,
    Position,
}

/// List mutations reachable from a submenu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    Insert,
    Delete,
    Edit,
}

/// What a menu entry does once chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Input,
    Open(Menu),
    Apply(Operation, Slot),
    Sort(SortKey, SortOrder),
    Output,
    Save,
    Back,
    Exit,
}

const MAIN_ENTRIES: &[(&str, MenuAction)] = &[
    ("Input information of student.", MenuAction::Input),
    ("Insert student into list.", MenuAction::Open(Menu::Insert)),
    ("Delete student from list.", MenuAction::Open(Menu::Delete)),
    ("Edit student in list.", MenuAction::Open(Menu::Edit)),
    ("Sort students in list.", MenuAction::Open(Menu::Sort)),
    ("Output list of students.", MenuAction::Output),
    ("Save list to a file.", MenuAction::Save),
    ("Exit.", MenuAction::Exit),
];

const INSERT_ENTRIES: &[(&str, MenuAction)] = &[
    ("Insert student to head of list.", MenuAction::Apply(Operation::Insert, Slot::Head)),
    ("Insert student to tail of list.", MenuAction::Apply(Operation::Insert, Slot::Tail)),
    (
        "Insert new student before student.",
        MenuAction::Apply(Operation::Insert, Slot::BeforeStudent),
    ),
    (
        "Insert new student after student.",
        MenuAction::Apply(Operation::Insert, Slot::AfterStudent),
    ),
    (
        "Insert new student at specific position.",
        MenuAction::Apply(Operation::Insert, Slot::Position),
    ),
    ("Output list of students.", MenuAction::Output),
    ("Back to Main Menu.", MenuAction::Back),
];

const DELETE_ENTRIES: &[(&str, MenuAction)] = &[
    ("Delete student at head of list.", MenuAction::Apply(Operation::Delete, Slot::Head)),
    ("Delete student at tail of list.", MenuAction::Apply(Operation::Delete, Slot::Tail)),
    (
        "Delete student before another student.",
        MenuAction::Apply(Operation::Delete, Slot::BeforeStudent),
    ),
    (
        "Delete student after another student.",
        MenuAction::Apply(Operation::Delete, Slot::AfterStudent),
    ),
    (
        "Delete student at specific position.",
        MenuAction::Apply(Operation::Delete, Slot::Position),
    ),
    ("Output list of students.", MenuAction::Output),
    ("Back to Main Menu.", MenuAction::Back),
];

const EDIT_ENTRIES: &[(&str, MenuAction)] = &[
    ("Edit student at head of list.", MenuAction::Apply(Operation::Edit, Slot::Head)),
    ("Edit student at tail of list.", MenuAction::Apply(Operation::Edit, Slot::Tail)),
    (
        "Edit student at specific position.",
        MenuAction::Apply(Operation::Edit, Slot::Position),
    ),
    ("Output list of students.", MenuAction::Output),
    ("Back to Main Menu.", MenuAction::Back),
];

const SORT_ENTRIES: &[(&str, MenuAction)] = &[
    ("Sort students by name (A -> Z).", MenuAction::Sort(SortKey::Name, SortOrder::Ascending)),
    ("Sort students by name (Z -> A).", MenuAction::Sort(SortKey::Name, SortOrder::Descending)),
    ("Sort students by GPA (Ascending).", MenuAction::Sort(SortKey::Gpa, SortOrder::Ascending)),
    ("Sort students by GPA (Descending).", MenuAction::Sort(SortKey::Gpa, SortOrder::Descending)),
    ("Sort students by age (Ascending).", MenuAction::Sort(SortKey::Age, SortOrder::Ascending)),
    ("Sort students by age (Descending).", MenuAction::Sort(SortKey::Age, SortOrder::Descending)),
    ("Output list of students.", MenuAction::Output),
    ("Back to Main Menu.", MenuAction::Back),
];

impl Menu {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Menu::Main => "MAIN MENU",
            Menu::Insert => "INSERT MENU",
            Menu::Delete => "DELETE MENU",
            Menu::Edit => "EDIT MENU",
            Menu::Sort => "SORT MENU",
        }
    }

    pub(crate) fn entries(self) -> &'static [(&'static str, MenuAction)] {
        match self {
            Menu::Main => MAIN_ENTRIES,
            Menu::Insert => INSERT_ENTRIES,
            Menu::Delete => DELETE_ENTRIES,
            Menu::Edit => EDIT_ENTRIES,
            Menu::Sort => SORT_ENTRIES,
        }
    }

    /// Action bound to the 1-based `choice`, if the menu has that many entries.
    pub(crate) fn action(self, choice: usize) -> Option<MenuAction> {
        choice
            .checked_sub(1)
            .and_then(|idx| self.entries().get(idx))
            .map(|(_, action)| *action)
    }

    pub(crate) fn invalid_choice_message(self) -> String {
        format!(
            "Invalid choice. Please enter a number between 1 and {}.",
            self.entries().len()
        )
    }
}

/// Full-screen table of the roster. Remembers which menu opened it so `Esc`
/// goes back there.
pub(crate) struct ListingScreen {
    pub(crate) back: Menu,
    pub(crate) selected: usize,
}

impl ListingScreen {
    pub(crate) fn new(back: Menu) -> Self {
        Self { back, selected: 0 }
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max_index = len as isize - 1;
        let next = (self.selected as isize + offset).clamp(0, max_index);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_digits_map_to_actions() {
        assert_eq!(Menu::Main.action(1), Some(MenuAction::Input));
        assert_eq!(Menu::Main.action(5), Some(MenuAction::Open(Menu::Sort)));
        assert_eq!(Menu::Main.action(8), Some(MenuAction::Exit));
        assert_eq!(Menu::Main.action(0), None);
        assert_eq!(Menu::Main.action(9), None);
    }

    #[test]
    fn every_submenu_ends_with_back() {
        for menu in [Menu::Insert, Menu::Delete, Menu::Edit, Menu::Sort] {
            let last = menu.entries().len();
            assert_eq!(menu.action(last), Some(MenuAction::Back));
            assert_eq!(menu.action(last - 1), Some(MenuAction::Output));
        }
    }

    #[test]
    fn listing_selection_stays_in_bounds() {
        let mut screen = ListingScreen::new(Menu::Main);
        screen.move_selection(5, 3);
        assert_eq!(screen.selected, 2);
        screen.move_selection(-10, 3);
        assert_eq!(screen.selected, 0);
        screen.select_last(4);
        assert_eq!(screen.selected, 3);
        screen.move_selection(1, 0);
        assert_eq!(screen.selected, 0);
    }
}
