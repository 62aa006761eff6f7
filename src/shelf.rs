#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    BaseConverter,
    Todo,
    Quote,
}

impl Tool {
    pub fn title(self) -> &'static str {
        match self {
            Tool::BaseConverter => "Base converter",
            Tool::Todo => "Today's to-dos",
            Tool::Quote => "Blind box",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::BaseConverter => "Binary / octal / decimal / hexadecimal, converted as you type",
            Tool::Todo => "A scratch list for the day, kept in memory only",
            Tool::Quote => "A random line from hitokoto.cn",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shelf {
    order: Vec<Tool>,
    expanded: Option<Tool>,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            order: vec![Tool::BaseConverter, Tool::Todo, Tool::Quote],
            expanded: None,
        }
    }
}

impl Shelf {
    pub fn order(&self) -> &[Tool] {
        &self.order
    }

    pub fn is_expanded(&self, tool: Tool) -> bool {
        self.expanded == Some(tool)
    }

    /// At most one card is open; toggling the open one closes it.
    pub fn toggle(&mut self, tool: Tool) {
        self.expanded = if self.is_expanded(tool) { None } else { Some(tool) };
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.order.len() {
            self.order.swap(index, index - 1);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.order.len() {
            self.order.swap(index, index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_stop_at_the_ends() {
        let mut shelf = Shelf::default();
        shelf.move_up(0);
        shelf.move_down(2);
        assert_eq!(shelf.order(), &[Tool::BaseConverter, Tool::Todo, Tool::Quote]);

        shelf.move_down(0);
        assert_eq!(shelf.order(), &[Tool::Todo, Tool::BaseConverter, Tool::Quote]);
        shelf.move_up(2);
        assert_eq!(shelf.order(), &[Tool::Todo, Tool::Quote, Tool::BaseConverter]);
    }

    #[test]
    fn only_one_card_expanded() {
        let mut shelf = Shelf::default();
        shelf.toggle(Tool::Todo);
        shelf.toggle(Tool::Quote);
        assert!(!shelf.is_expanded(Tool::Todo));
        assert!(shelf.is_expanded(Tool::Quote));
        shelf.toggle(Tool::Quote);
        assert!(!shelf.is_expanded(Tool::Quote));
    }
}
