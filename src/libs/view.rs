use super::task::Task;
use indexmap::IndexMap;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "DONE", "CATEGORY"]);
        for task in tasks {
            table.add_row(row![
                task.id.map(|id| id.to_string()).unwrap_or_default(),
                task.name,
                task.description,
                if task.completed { "✔" } else { "" },
                task.category
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.map(|id| id.to_string()).unwrap_or_default()]);
        table.add_row(row!["NAME", task.name]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["COMPLETED", task.completed]);
        table.add_row(row!["CATEGORY", task.category]);
        table.printstd();
    }

    pub fn categories(groups: &IndexMap<&str, Vec<&Task>>) {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "TASKS", "OPEN"]);
        for (category, tasks) in groups {
            let open = tasks.iter().filter(|t| !t.completed).count();
            table.add_row(row![category, tasks.len(), open]);
        }
        table.printstd();
    }
}
