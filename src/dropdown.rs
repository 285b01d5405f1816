use std::fmt::Display;

/// Searchable single-choice selector.
///
/// `selected` is the committed value; `cursor` is the highlighted row among
/// the options matching `filter`. Moving the cursor does not change the
/// selection until [`Dropdown::commit`] is called.
#[derive(Clone, Debug)]
pub struct Dropdown<T> {
    options: Vec<T>,
    selected: Option<usize>,
    filter: String,
    cursor: usize,
}

impl<T: Display> Dropdown<T> {
    /// Selector starting on the first option, if any
    pub fn new(options: Vec<T>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            options,
            selected,
            filter: String::new(),
            cursor: 0,
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn value(&self) -> Option<&T> {
        self.selected.and_then(|idx| self.options.get(idx))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Indices of options whose label contains the filter (case-insensitive)
    pub fn visible(&self) -> Vec<usize> {
        let needle = self.filter.to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| needle.is_empty() || option.to_string().to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Option index under the cursor
    pub fn highlighted(&self) -> Option<usize> {
        self.visible().get(self.cursor).copied()
    }

    /// Cursor row within the visible options
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_down(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            self.cursor = (self.cursor + 1).min(count - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn push_char(&mut self, ch: char) {
        self.filter.push(ch);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.filter.pop();
        self.cursor = 0;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.cursor = 0;
    }

    /// Select the highlighted option. Returns true when the selection changed.
    pub fn commit(&mut self) -> bool {
        let Some(idx) = self.highlighted() else {
            return false;
        };
        self.filter.clear();
        self.cursor = self.visible().iter().position(|&i| i == idx).unwrap_or(0);
        let changed = self.selected != Some(idx);
        self.selected = Some(idx);
        changed
    }

    /// Drop the selection. Returns true when something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Dropdown<String> {
        Dropdown::new(
            ["Argentina", "Brazil", "France", "Germany"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_starts_on_first_option() {
        let dd = countries();
        assert_eq!(dd.value().map(String::as_str), Some("Argentina"));
        assert!(Dropdown::<i32>::new(Vec::new()).value().is_none());
    }

    #[test]
    fn test_cursor_does_not_change_selection() {
        let mut dd = countries();
        dd.move_down();
        dd.move_down();
        assert_eq!(dd.highlighted(), Some(2));
        assert_eq!(dd.selected_index(), Some(0));
        assert!(dd.commit());
        assert_eq!(dd.value().map(String::as_str), Some("France"));
        assert!(!dd.commit());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut dd = countries();
        dd.move_up();
        assert_eq!(dd.cursor(), 0);
        for _ in 0..10 {
            dd.move_down();
        }
        assert_eq!(dd.cursor(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut dd = countries();
        dd.push_char('A');
        dd.push_char('N');
        // France, Germany
        assert_eq!(dd.visible(), vec![2, 3]);
        dd.push_char('c');
        assert_eq!(dd.visible(), vec![2]);
        assert!(dd.commit());
        assert_eq!(dd.value().map(String::as_str), Some("France"));
        assert_eq!(dd.filter(), "");
    }

    #[test]
    fn test_filter_without_matches() {
        let mut dd = countries();
        for ch in "atlantis".chars() {
            dd.push_char(ch);
        }
        assert!(dd.visible().is_empty());
        assert!(!dd.commit());
        assert_eq!(dd.selected_index(), Some(0));
    }

    #[test]
    fn test_clear() {
        let mut dd = countries();
        assert!(dd.clear());
        assert!(dd.value().is_none());
        assert!(!dd.clear());
    }

    #[test]
    fn test_years_filter_by_digits() {
        let mut dd = Dropdown::new(vec![1930, 1934, 2022]);
        dd.push_char('3');
        assert_eq!(dd.visible(), vec![0, 1]);
    }
}
