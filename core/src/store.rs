use crate::model::task::Task;

/// In-memory task collection for the process lifetime, kept sorted by title
/// after every insertion. Tasks are never removed. Queries return empty
/// sequences or `None` on a miss; user-facing error messaging lives in the
/// controller.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends and re-sorts by title. The sort is stable, so equal titles
    /// keep insertion order.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.tasks.sort_by_cached_key(|t| title_sort_key(&t.title));
    }

    /// `"All"` (literal) returns every task in store order; any other code
    /// matches against the upper-cased raw status.
    pub fn filter_by_status(&self, code: &str) -> Vec<&Task> {
        self.positions_by_status(code)
            .into_iter()
            .filter_map(|pos| self.tasks.get(pos))
            .collect()
    }

    pub fn positions_by_status(&self, code: &str) -> Vec<usize> {
        if code == "All" {
            return (0..self.tasks.len()).collect();
        }
        let code = code.to_uppercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status.to_uppercase() == code)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Case-insensitive containment match on title. An empty needle matches
    /// every task.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Task> {
        self.positions_by_title(needle)
            .into_iter()
            .filter_map(|pos| self.tasks.get(pos))
            .collect()
    }

    pub fn positions_by_title(&self, needle: &str) -> Vec<usize> {
        let needle = needle.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.title.to_lowercase().contains(&needle))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// 1-based external index into the store; callers check the range
    /// against whatever sequence they showed the user.
    pub fn get_at(&self, one_based: usize) -> Option<&Task> {
        self.tasks.get(one_based.checked_sub(1)?)
    }

    pub fn task(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn task_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(position)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Locale-ish ordering key: case-insensitive with common Latin accents
/// folded to their base letter, so "Árbol" sorts with the As instead of
/// after "z".
fn title_sort_key(title: &str) -> String {
    title
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}
