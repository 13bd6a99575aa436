use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use ticklist_core::{Snapshot, Task};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "St")]
    status: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl SummaryRow {
    fn from_task(task: &Task) -> Self {
        Self {
            status: if task.completed { "✔" } else { "☐" }.to_string(),
            due: task.due.format("%Y-%m-%d").to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }
}

/// One last look at the session before it evaporates: the final (unfiltered)
/// snapshot as a table on stdout, with the overall progress. Output only —
/// nothing is written to disk and nothing will be reloaded.
pub fn print(snapshot: &Snapshot) {
    if snapshot.total == 0 {
        println!("No tasks this session.");
        return;
    }

    let rows: Vec<SummaryRow> = snapshot.tasks.iter().map(SummaryRow::from_task).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
    println!(
        "Progress: {}% ({}/{} complete)",
        snapshot.progress, snapshot.completed, snapshot.total
    );
}
