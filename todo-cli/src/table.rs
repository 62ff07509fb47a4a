use todo_core::TodoList;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Column layout for one render call.
///
/// Passed explicitly per call so the core never depends on ambient
/// styling state.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub title_width: usize,
    pub completed_width: usize,
    pub created_width: usize,
    pub completed_at_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title_width: 30,
            completed_width: 10,
            created_width: 20,
            completed_at_width: 20,
        }
    }
}

/// Converts the list into display rows: title, completed indicator,
/// formatted creation time, formatted completion time (`-` when absent).
pub fn to_rows(todos: &TodoList) -> Vec<[String; 4]> {
    todos
        .iter()
        .map(|todo| {
            let completed = if todo.completed { "✔" } else { "✗" };
            let completed_at = todo
                .completed_at
                .map(|at| at.format(TIME_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string());
            [
                todo.title.clone(),
                completed.to_string(),
                todo.created_at.format(TIME_FORMAT).to_string(),
                completed_at,
            ]
        })
        .collect()
}

/// Renders the list as a fixed-width text table.
pub fn render(todos: &TodoList, config: &TableConfig) -> String {
    let widths = [
        config.title_width,
        config.completed_width,
        config.created_width,
        config.completed_at_width,
    ];
    let mut out = String::new();
    push_row(
        &mut out,
        &["Title", "Completed", "Created At", "Completed At"],
        &widths,
    );
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let separator: Vec<&str> = separator.iter().map(String::as_str).collect();
    push_row(&mut out, &separator, &widths);
    for row in to_rows(todos) {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }
    out
}

pub fn print(todos: &TodoList, config: &TableConfig) {
    print!("{}", render(todos, config));
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(&format!("{:<width$}  ", clip(cell, *width)));
    }
    // Trailing padding carries no information.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn clip(cell: &str, width: usize) -> String {
    cell.chars().take(width).collect()
}
