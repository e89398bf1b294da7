use std::mem;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use log::{info, warn};
use open::that as open_path;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState, Wrap};
use ratatui::Frame;

use crate::models::{Student, Target};
use crate::report::save_report;
use crate::roster::{ListError, StudentList};

use super::forms::{PromptForm, StudentField, StudentForm};
use super::helpers::{centered_rect, roster_table, surface_error};
use super::screens::{ListingScreen, Menu, MenuAction, Operation, Slot};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown in the listing.
const PAGE_SIZE: isize = 10;

/// High-level navigation states.
enum Screen {
    Menu(Menu),
    Listing(ListingScreen),
}

/// Modal interactions layered over the current screen. Each variant carries
/// everything needed to finish the interaction, so handlers take the mode by
/// value and hand back the next one.
enum Mode {
    Normal,
    /// Asking how many students the batch input should collect.
    BatchCount(PromptForm),
    /// Collecting batch records one form at a time.
    BatchEntry {
        added: usize,
        total: usize,
        form: StudentForm,
    },
    /// Asking for the name or position an operation is aimed at.
    Targeting {
        operation: Operation,
        slot: Slot,
        prompt: PromptForm,
    },
    /// Collecting the record for an insert or edit whose target is known.
    Record {
        operation: Operation,
        target: Target,
        form: StudentForm,
    },
    SavingReport(PromptForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. The roster is owned here and every menu action
/// reaches it through `&mut self`.
pub struct App {
    list: StudentList,
    default_report: PathBuf,
    last_report: Option<PathBuf>,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(list: StudentList, default_report: PathBuf) -> Self {
        Self {
            list,
            default_report,
            last_report: None,
            screen: Screen::Menu(Menu::Main),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn list(&self) -> &StudentList {
        &self.list
    }

    /// Hand the roster back once the event loop is done with it.
    pub fn into_list(self) -> StudentList {
        self.list
    }

    /// Top-level key dispatcher. Every key goes through the active `Mode`,
    /// which returns the next mode to run. The boolean result tells the outer
    /// loop whether the user asked to exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::BatchCount(prompt) => self.handle_batch_count(code, prompt)?,
            Mode::BatchEntry { added, total, form } => {
                self.handle_batch_entry(code, added, total, form)?
            }
            Mode::Targeting {
                operation,
                slot,
                prompt,
            } => self.handle_targeting(code, operation, slot, prompt)?,
            Mode::Record {
                operation,
                target,
                form,
            } => self.handle_record(code, operation, target, form)?,
            Mode::SavingReport(prompt) => self.handle_save_prompt(code, prompt)?,
        };

        Ok(exit)
    }

    /// Open the most recently saved report with the platform's default viewer.
    pub(crate) fn handle_ctrl_o(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::Normal) {
            return Ok(());
        }
        match self.last_report.clone() {
            Some(path) => match open_path(&path) {
                Ok(()) => self.set_status(format!("Opened {}.", path.display()), StatusKind::Info),
                Err(err) => {
                    warn!("event=report_open status=error reason={err}");
                    self.set_status(format!("Could not open report: {err}"), StatusKind::Error);
                }
            },
            None => self.set_status("No report saved yet.", StatusKind::Error),
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match &mut self.screen {
            Screen::Menu(menu) => {
                let menu = *menu;
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc => {
                        if menu == Menu::Main {
                            *exit = true;
                        } else {
                            self.clear_status();
                            self.screen = Screen::Menu(Menu::Main);
                        }
                    }
                    KeyCode::Char(ch) if ch.is_ascii_digit() => {
                        let choice = ch.to_digit(10).unwrap_or_default() as usize;
                        match menu.action(choice) {
                            Some(action) => {
                                self.clear_status();
                                return Ok(self.run_action(menu, action, exit));
                            }
                            None => {
                                self.set_status(menu.invalid_choice_message(), StatusKind::Error)
                            }
                        }
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Screen::Listing(listing) => {
                let len = self.list.count();
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc | KeyCode::Enter => {
                        let back = listing.back;
                        self.screen = Screen::Menu(back);
                    }
                    KeyCode::Up => listing.move_selection(-1, len),
                    KeyCode::Down => listing.move_selection(1, len),
                    KeyCode::PageUp => listing.move_selection(-PAGE_SIZE, len),
                    KeyCode::PageDown => listing.move_selection(PAGE_SIZE, len),
                    KeyCode::Home => listing.select_first(),
                    KeyCode::End => listing.select_last(len),
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn run_action(&mut self, menu: Menu, action: MenuAction, exit: &mut bool) -> Mode {
        match action {
            MenuAction::Input => Mode::BatchCount(PromptForm::digits("Number of students")),
            MenuAction::Open(next) => {
                self.screen = Screen::Menu(next);
                Mode::Normal
            }
            MenuAction::Back => {
                self.screen = Screen::Menu(Menu::Main);
                Mode::Normal
            }
            MenuAction::Output => {
                self.screen = Screen::Listing(ListingScreen::new(menu));
                Mode::Normal
            }
            MenuAction::Save => Mode::SavingReport(
                PromptForm::text("File name")
                    .with_value(self.default_report.display().to_string()),
            ),
            MenuAction::Exit => {
                *exit = true;
                Mode::Normal
            }
            MenuAction::Sort(key, order) => {
                self.list.sort(key, order);
                info!(
                    "event=roster_sorted status=ok key={} order={} count={}",
                    key.label(),
                    order.label(),
                    self.list.count()
                );
                self.set_status(
                    format!(
                        "Students sorted by {} ({}) successfully!",
                        key.label(),
                        order.label()
                    ),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            MenuAction::Apply(operation, slot) => match slot {
                Slot::Head => self.begin_with_target(operation, Target::Head),
                Slot::Tail => self.begin_with_target(operation, Target::Tail),
                Slot::BeforeStudent | Slot::AfterStudent | Slot::Position => Mode::Targeting {
                    operation,
                    slot,
                    prompt: target_prompt(operation, slot),
                },
            },
        }
    }

    /// Continue an operation once its target is known: deletes run straight
    /// away, inserts open an empty form, edits open a form holding the current
    /// record.
    fn begin_with_target(&mut self, operation: Operation, target: Target) -> Mode {
        match operation {
            Operation::Insert => Mode::Record {
                operation,
                target,
                form: StudentForm::default(),
            },
            Operation::Delete => {
                self.perform_delete(&target);
                Mode::Normal
            }
            Operation::Edit => match self.list.get(&target) {
                Ok(existing) => {
                    let form = StudentForm::from_student(existing);
                    Mode::Record {
                        operation,
                        target,
                        form,
                    }
                }
                Err(err) => {
                    self.report_list_error(operation, &err);
                    Mode::Normal
                }
            },
        }
    }

    fn handle_batch_count(&mut self, code: KeyCode, mut prompt: PromptForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Input cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Enter => match prompt.parse_number() {
                Ok(0) => {
                    self.set_status("No students to add.", StatusKind::Info);
                    return Ok(Mode::Normal);
                }
                Ok(total) => {
                    return Ok(Mode::BatchEntry {
                        added: 0,
                        total,
                        form: StudentForm::default(),
                    })
                }
                Err(err) => prompt.error = Some(surface_error(&err)),
            },
            KeyCode::Char(ch) => {
                if prompt.push_char(ch) {
                    prompt.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::BatchCount(prompt))
    }

    fn handle_batch_entry(
        &mut self,
        code: KeyCode,
        mut added: usize,
        total: usize,
        mut form: StudentForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status(
                    format!("Input stopped after {added} of {total} students."),
                    StatusKind::Info,
                );
                return Ok(Mode::Normal);
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(student) => {
                    if let Err(err) = self.list.insert(student, &Target::Tail) {
                        self.report_list_error(Operation::Insert, &err);
                        return Ok(Mode::Normal);
                    }
                    added += 1;
                    if added == total {
                        info!(
                            "event=batch_input status=ok added={added} count={}",
                            self.list.count()
                        );
                        self.set_status(
                            format!("Successfully added {added} students to list."),
                            StatusKind::Info,
                        );
                        return Ok(Mode::Normal);
                    }
                    form = StudentForm::default();
                    self.clear_status();
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::BatchEntry { added, total, form })
    }

    fn handle_targeting(
        &mut self,
        code: KeyCode,
        operation: Operation,
        slot: Slot,
        mut prompt: PromptForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Enter => match resolve_target(slot, &prompt) {
                Ok(target) => return Ok(self.begin_with_target(operation, target)),
                Err(err) => prompt.error = Some(surface_error(&err)),
            },
            KeyCode::Char(ch) => {
                if prompt.push_char(ch) {
                    prompt.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Targeting {
            operation,
            slot,
            prompt,
        })
    }

    fn handle_record(
        &mut self,
        code: KeyCode,
        operation: Operation,
        target: Target,
        mut form: StudentForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(student) => {
                    self.commit_record(operation, &target, student);
                    return Ok(Mode::Normal);
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Record {
            operation,
            target,
            form,
        })
    }

    fn handle_save_prompt(&mut self, code: KeyCode, mut prompt: PromptForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Save cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Enter => {
                let saved = prompt
                    .parse_text()
                    .and_then(|name| save_report(&self.list, name.trim()));
                match saved {
                    Ok(path) => {
                        self.set_status(
                            format!("Data saved to {} successfully!", path.display()),
                            StatusKind::Info,
                        );
                        self.last_report = Some(path);
                        return Ok(Mode::Normal);
                    }
                    Err(err) => {
                        warn!("event=report_saved status=error reason={err:#}");
                        let message = format!("{err:#}");
                        prompt.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                if prompt.push_char(ch) {
                    prompt.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::SavingReport(prompt))
    }

    fn commit_record(&mut self, operation: Operation, target: &Target, student: Student) {
        let name = student.name.clone();
        let result = match operation {
            Operation::Insert => self
                .list
                .insert(student, target)
                .map(|()| format!("Successfully inserted {name} ({target}).")),
            Operation::Edit => self
                .list
                .edit(target, student)
                .map(|old| format!("Successfully edited {} ({target}).", old.name)),
            Operation::Delete => {
                self.perform_delete(target);
                return;
            }
        };
        match result {
            Ok(message) => {
                info!(
                    "event=student_{} status=ok target={target} count={}",
                    operation_name(operation),
                    self.list.count()
                );
                self.set_status(message, StatusKind::Info);
            }
            Err(err) => self.report_list_error(operation, &err),
        }
    }

    fn perform_delete(&mut self, target: &Target) {
        match self.list.delete(target) {
            Ok(removed) => {
                info!(
                    "event=student_delete status=ok target={target} count={}",
                    self.list.count()
                );
                self.set_status(
                    format!("Successfully deleted {} ({target}).", removed.name),
                    StatusKind::Info,
                );
            }
            Err(err) => self.report_list_error(Operation::Delete, &err),
        }
    }

    fn report_list_error(&mut self, operation: Operation, err: &ListError) {
        warn!(
            "event=student_{} status=rejected reason={err}",
            operation_name(operation)
        );
        self.set_status(err.to_string(), StatusKind::Error);
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Menu(menu) => self.draw_menu(frame, content_area, *menu),
            Screen::Listing(listing) => self.draw_listing(frame, content_area, listing),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Normal => {}
            Mode::BatchCount(prompt) => self.draw_prompt(frame, area, "Input Students", prompt),
            Mode::BatchEntry { added, total, form } => {
                let title = format!("Student {} of {}", added + 1, total);
                self.draw_student_form(frame, area, &title, form)
            }
            Mode::Targeting {
                operation, prompt, ..
            } => self.draw_prompt(frame, area, operation_title(*operation), prompt),
            Mode::Record {
                operation,
                target,
                form,
            } => {
                let title = format!("{} Student: {target}", operation_title(*operation));
                self.draw_student_form(frame, area, &title, form)
            }
            Mode::SavingReport(prompt) => self.draw_prompt(frame, area, "Save Report", prompt),
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect, menu: Menu) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = menu
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, (label, _))| {
                Line::from(vec![
                    Span::styled(format!("{}. ", idx + 1), key_style),
                    Span::raw(*label),
                ])
            })
            .collect();
        let block = Block::default()
            .title(format!(" {} ", menu.title()))
            .borders(Borders::ALL);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            chunks[0],
        );

        let block = Block::default()
            .title(format!(" Students ({}) ", self.list.count()))
            .borders(Borders::ALL);
        if self.list.is_empty() {
            let message = Paragraph::new("No students yet. Press 1 on the main menu to add some.")
                .alignment(Alignment::Center)
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, chunks[1]);
        } else {
            frame.render_widget(roster_table(&self.list).block(block), chunks[1]);
        }
    }

    fn draw_listing(&self, frame: &mut Frame, area: Rect, listing: &ListingScreen) {
        let block = Block::default()
            .title(" List of students ")
            .borders(Borders::ALL);
        if self.list.is_empty() {
            let message = Paragraph::new("The list is empty.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let table = roster_table(&self.list)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = TableState::default().with_selected(Some(listing.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::BatchEntry { .. } | Mode::Record { .. }) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::BatchCount(_) | Mode::Targeting { .. } | Mode::SavingReport(_)) => {
                Line::from(vec![
                    Span::styled("[Enter]", key_style),
                    Span::raw(" Confirm   "),
                    Span::styled("[Esc]", key_style),
                    Span::raw(" Cancel"),
                ])
            }
            (Screen::Listing(_), Mode::Normal) => Line::from(vec![
                Span::styled("[Up/Down]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[PgUp/PgDn]", key_style),
                Span::raw(" Page   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Menu(menu), Mode::Normal) => Line::from(vec![
                Span::styled(format!("[1-{}]", menu.entries().len()), key_style),
                Span::raw(" Choose   "),
                Span::styled("[Ctrl+O]", key_style),
                Span::raw(" Open Saved Report   "),
                Span::styled("[Esc]", key_style),
                Span::raw(if *menu == Menu::Main { " Quit" } else { " Main Menu" }),
            ]),
        }
    }

    fn draw_student_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &StudentForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = [StudentField::Name, StudentField::Age, StudentField::Gpa];
        let mut lines: Vec<Line> = fields.iter().map(|field| form.build_line(*field)).collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch field | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let row = fields
            .iter()
            .position(|field| *field == form.active)
            .unwrap_or_default();
        let column = form.active.label().len() + 2 + form.value_len(form.active);
        frame.set_cursor_position(cursor_in(inner, column, row));
    }

    fn draw_prompt(&self, frame: &mut Frame, area: Rect, title: &str, prompt: &PromptForm) {
        let popup_area = centered_rect(60, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![prompt.build_line(), Line::from("")];
        if let Some(error) = &prompt.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        frame.set_cursor_position(cursor_in(inner, prompt.cursor_offset(), 0));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Terminal cell for `column`/`row` inside `inner`, pinned to its last cell
/// when the text runs past the edge.
fn cursor_in(inner: Rect, column: usize, row: usize) -> (u16, u16) {
    let last_column = inner.width.saturating_sub(1);
    let last_row = inner.height.saturating_sub(1);
    let column = u16::try_from(column).unwrap_or(u16::MAX).min(last_column);
    let row = u16::try_from(row).unwrap_or(u16::MAX).min(last_row);
    (inner.x.saturating_add(column), inner.y.saturating_add(row))
}

/// Turn the prompt answer into a list target for `slot`.
fn resolve_target(slot: Slot, prompt: &PromptForm) -> Result<Target> {
    Ok(match slot {
        Slot::Head => Target::Head,
        Slot::Tail => Target::Tail,
        Slot::BeforeStudent => Target::BeforeName(prompt.parse_text()?),
        Slot::AfterStudent => Target::AfterName(prompt.parse_text()?),
        Slot::Position => Target::AtPosition(prompt.parse_number()?),
    })
}

fn target_prompt(operation: Operation, slot: Slot) -> PromptForm {
    match (operation, slot) {
        (Operation::Insert, Slot::BeforeStudent) => PromptForm::text("Insert before student"),
        (Operation::Insert, Slot::AfterStudent) => PromptForm::text("Insert after student"),
        (Operation::Delete, Slot::BeforeStudent) => PromptForm::text("Delete student before"),
        (Operation::Delete, Slot::AfterStudent) => PromptForm::text("Delete student after"),
        (Operation::Edit, Slot::BeforeStudent) => PromptForm::text("Edit student before"),
        (Operation::Edit, Slot::AfterStudent) => PromptForm::text("Edit student after"),
        (Operation::Insert, _) => PromptForm::digits("Position to insert"),
        (Operation::Delete, _) => PromptForm::digits("Position to delete"),
        (Operation::Edit, _) => PromptForm::digits("Position to edit"),
    }
}

fn operation_title(operation: Operation) -> &'static str {
    match operation {
        Operation::Insert => "Insert",
        Operation::Delete => "Delete",
        Operation::Edit => "Edit",
    }
}

fn operation_name(operation: Operation) -> &'static str {
    match operation {
        Operation::Insert => "insert",
        Operation::Delete => "delete",
        Operation::Edit => "edit",
    }
}
