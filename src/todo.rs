#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// In-memory to-do list for the home page; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let mut list = Self::default();
        for (text, completed) in items {
            if let Some(id) = list.add(text) {
                if completed {
                    list.toggle(id);
                }
            }
        }
        list
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Adds a task; blank text is rejected.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        self.items.push(TodoItem {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        });
        Some(self.next_id)
    }

    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.items.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_share_of_completed() {
        let mut list = TodoList::with_items([("review chapter 3", false), ("update site", true)]);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress_percent(), 50.0);

        let id = list.items()[0].id;
        list.toggle(id);
        assert_eq!(list.progress_percent(), 100.0);

        list.remove(id);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn blank_tasks_are_rejected_and_empty_list_is_zero() {
        let mut list = TodoList::default();
        assert_eq!(list.add("   "), None);
        assert_eq!(list.progress_percent(), 0.0);
        assert_eq!(list.add("  read a paper "), Some(1));
        assert_eq!(list.items()[0].text, "read a paper");
    }
}
