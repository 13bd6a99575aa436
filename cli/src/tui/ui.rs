use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use ticklist_core::ViewFilter;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    done: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    done: Color::Green,
    error: Color::Red,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Add prompt + message
            Constraint::Length(3), // Progress
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("TICKLIST")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    draw_prompt(f, app, main_chunks[1]);
    draw_progress(f, app, main_chunks[2]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[3]);

    draw_task_list(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);

    let help = match app.input_mode {
        InputMode::Normal => "a: add | space: toggle | d: delete | f: filter | j/k: navigate | q: quit",
        InputMode::Adding => "enter: save | esc: cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_prompt(f: &mut Frame, app: &App, area: Rect) {
    let input_line = match app.input_mode {
        InputMode::Adding => Line::from(vec![
            Span::styled("> ", Style::default().fg(THEME.primary)),
            Span::raw(app.input.as_str()),
        ]),
        InputMode::Normal => Line::from(Span::styled(
            "press 'a' to add a task",
            Style::default().fg(THEME.muted),
        )),
    };

    let message_line = match &app.error {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(THEME.error),
        )),
        None => Line::from(Span::styled(
            "title words... due:<date> description:<text>",
            Style::default().fg(THEME.muted),
        )),
    };

    let prompt = Paragraph::new(vec![input_line, message_line]).block(
        Block::default()
            .title(" New Task ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(prompt, area);

    if let InputMode::Adding = app.input_mode {
        // Cursor after the "> " prefix, accounting for wide characters
        let prefix: String = app.input.chars().take(app.cursor_position).collect();
        let x = area.x + 3 + prefix.width() as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.snapshot;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(THEME.done))
        .percent(snapshot.progress as u16)
        .label(format!(
            "{}% Complete ({}/{})",
            snapshot.progress, snapshot.completed, snapshot.total
        ));
    f.render_widget(gauge, area);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .snapshot
        .tasks
        .iter()
        .map(|task| {
            let (icon, icon_style) = if task.completed {
                ("✔", Style::default().fg(THEME.done))
            } else {
                ("☐", Style::default())
            };

            let title_style = if task.completed {
                Style::default()
                    .fg(THEME.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            Row::new(vec![
                Span::styled(icon, icon_style),
                Span::raw(task.due.format("%Y-%m-%d").to_string()),
                Span::styled(task.title.clone(), title_style),
            ])
        })
        .collect();

    let title = match app.filter {
        ViewFilter::All => " Tasks ",
        ViewFilter::IncompleteOnly => " Tasks (incomplete only) ",
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Status
            Constraint::Length(10), // Due
            Constraint::Min(10),    // Title
        ],
    )
    .header(Row::new(vec!["St", "Due", "Title"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .state
        .selected()
        .and_then(|i| app.snapshot.tasks.get(i));

    if let Some(task) = selected {
        let status = if task.completed { "Completed" } else { "Incomplete" };
        let detail_text = vec![
            Line::from(vec![
                Span::styled("Title: ", Style::default().fg(Color::Blue)),
                Span::styled(&task.title, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(THEME.muted)),
                Span::raw(task.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Blue)),
                Span::raw(status),
            ]),
            Line::from(vec![
                Span::styled("Due: ", Style::default().fg(Color::Blue)),
                Span::raw(task.due.format("%Y-%m-%d").to_string()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Description:",
                Style::default().fg(Color::Blue),
            )),
            Line::from(task.description.as_str()),
        ];

        let detail_block = Paragraph::new(detail_text)
            .block(
                Block::default()
                    .title(" Detail ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(detail_block, area);
    } else {
        let detail_block = Block::default()
            .title(" Detail ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(detail_block, area);
    }
}
