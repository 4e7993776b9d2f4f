#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    Predefined,
    Schema,
    History,
    Saved,
    #[default]
    Editor,
    Results,
}

impl FocusedPane {
    const ORDER: [Self; 6] = [
        Self::Predefined,
        Self::Schema,
        Self::History,
        Self::Saved,
        Self::Editor,
        Self::Results,
    ];

    pub fn from_number_key(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)? as usize;
        Self::ORDER.get(index).copied()
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Predefined => "Predefined",
            Self::Schema => "Schema",
            Self::History => "History",
            Self::Saved => "Saved",
            Self::Editor => "Query",
            Self::Results => "Results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_editor() {
        assert_eq!(FocusedPane::default(), FocusedPane::Editor);
    }

    #[rstest]
    #[case('1', FocusedPane::Predefined)]
    #[case('2', FocusedPane::Schema)]
    #[case('5', FocusedPane::Editor)]
    #[case('6', FocusedPane::Results)]
    fn from_number_key_returns_correct_pane(#[case] key: char, #[case] expected: FocusedPane) {
        assert_eq!(FocusedPane::from_number_key(key), Some(expected));
    }

    #[rstest]
    #[case('7')]
    #[case('0')]
    #[case('a')]
    fn from_number_key_returns_none_for_invalid(#[case] key: char) {
        assert_eq!(FocusedPane::from_number_key(key), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(FocusedPane::Results.next(), FocusedPane::Predefined);
        assert_eq!(FocusedPane::Predefined.prev(), FocusedPane::Results);
        assert_eq!(FocusedPane::History.next().prev(), FocusedPane::History);
    }
}
