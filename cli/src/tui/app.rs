use chrono::Local;
use ratatui::widgets::TableState;
use ticklist_core::{parse_draft, Snapshot, TaskStore, ViewFilter};
use uuid::Uuid;

pub enum InputMode {
    Normal,
    Adding,
}

/// All session state: the store, the snapshot the screen renders from, and
/// the widget-level bits (selection, input line, mode). Every mutation goes
/// through the store and is followed by a fresh snapshot read — the UI never
/// looks at the store directly.
pub struct App {
    store: TaskStore,
    pub snapshot: Snapshot,
    pub filter: ViewFilter,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub error: Option<String>,
}

impl App {
    pub fn new(filter: ViewFilter) -> App {
        let store = TaskStore::new();
        let snapshot = store.snapshot(filter);
        App {
            store,
            snapshot,
            filter,
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            error: None,
        }
    }

    /// Snapshot of the whole collection for the exit summary, ignoring the
    /// active filter.
    pub fn final_snapshot(&self) -> Snapshot {
        self.store.snapshot(ViewFilter::All)
    }

    pub fn next(&mut self) {
        if self.snapshot.tasks.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.snapshot.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.snapshot.tasks.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.snapshot.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(id);
            self.refresh();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.delete(id);
            self.refresh();
        }
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
        self.refresh();
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Esc from the add prompt: discard the line and any validation message.
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.error = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
        // Editing the line dismisses a stale validation message
        self.error = None;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
            self.error = None;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Enter on the add prompt. A valid line becomes a task and the prompt
    /// closes; a rejected one stays put with the message shown inline so the
    /// user can fix it.
    pub fn submit_add(&mut self) {
        if self.input.trim().is_empty() {
            self.cancel_input();
            return;
        }

        let today = Local::now().date_naive();
        let result =
            parse_draft(&self.input, today).and_then(|draft| self.store.add(draft));

        match result {
            Ok(task) => {
                self.input.clear();
                self.cursor_position = 0;
                self.error = None;
                self.input_mode = InputMode::Normal;
                self.refresh();
                self.select_task(task.id);
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.state
            .selected()
            .and_then(|i| self.snapshot.tasks.get(i))
            .map(|t| t.id)
    }

    fn select_task(&mut self, id: Uuid) {
        if let Some(pos) = self.snapshot.tasks.iter().position(|t| t.id == id) {
            self.state.select(Some(pos));
        }
    }

    fn refresh(&mut self) {
        self.snapshot = self.store.snapshot(self.filter);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.tasks.len();
        if len == 0 {
            self.state.select(None);
            return;
        }
        match self.state.selected() {
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(app: &mut App, line: &str) {
        app.enter_add_mode();
        for c in line.chars() {
            app.input_char(c);
        }
    }

    fn add(app: &mut App, line: &str) {
        type_line(app, line);
        app.submit_add();
    }

    #[test]
    fn add_flow_creates_selects_and_clears() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "Buy milk description:2% due:2024-05-01");

        assert_eq!(app.snapshot.tasks.len(), 1);
        assert_eq!(app.snapshot.tasks[0].title, "Buy milk");
        assert_eq!(app.state.selected(), Some(0));
        assert!(app.input.is_empty());
        assert!(app.error.is_none());
        assert!(matches!(app.input_mode, InputMode::Normal));
    }

    #[test]
    fn rejected_add_keeps_the_line_and_shows_the_message() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "Buy milk");

        assert_eq!(app.snapshot.tasks.len(), 0);
        assert_eq!(app.input, "Buy milk");
        assert!(matches!(app.input_mode, InputMode::Adding));
        assert!(app.error.is_some());

        // Editing the line clears the message
        app.input_char('!');
        assert!(app.error.is_none());
    }

    #[test]
    fn toggle_updates_progress() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "a description:x");
        add(&mut app, "b description:y");
        assert_eq!(app.snapshot.progress, 0);

        app.state.select(Some(0));
        app.toggle_selected();
        assert_eq!(app.snapshot.progress, 50);
        assert!(app.snapshot.tasks[0].completed);
    }

    #[test]
    fn filter_hides_completed_and_clamps_selection() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "a description:x");
        add(&mut app, "b description:y");

        // Complete the second (selected after add) task
        app.toggle_selected();
        assert_eq!(app.state.selected(), Some(1));

        app.toggle_filter();
        assert_eq!(app.snapshot.tasks.len(), 1);
        assert_eq!(app.snapshot.tasks[0].title, "a");
        assert_eq!(app.state.selected(), Some(0));

        app.toggle_filter();
        assert_eq!(app.snapshot.tasks.len(), 2);
    }

    #[test]
    fn deleting_the_last_row_moves_selection_up() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "a description:x");
        add(&mut app, "b description:y");
        assert_eq!(app.state.selected(), Some(1));

        app.delete_selected();
        assert_eq!(app.snapshot.tasks.len(), 1);
        assert_eq!(app.state.selected(), Some(0));

        app.delete_selected();
        assert!(app.snapshot.tasks.is_empty());
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn cancel_discards_line_and_message() {
        let mut app = App::new(ViewFilter::All);
        add(&mut app, "no description here");
        assert!(app.error.is_some());

        app.cancel_input();
        assert!(app.input.is_empty());
        assert!(app.error.is_none());
        assert!(matches!(app.input_mode, InputMode::Normal));
    }

    #[test]
    fn cursor_math_survives_multibyte_chars() {
        let mut app = App::new(ViewFilter::All);
        app.enter_add_mode();
        for c in "méli".chars() {
            app.input_char(c);
        }
        app.move_cursor_left();
        app.move_cursor_left();
        app.delete_char();
        assert_eq!(app.input, "mli");
        assert_eq!(app.cursor_position, 1);
    }
}
