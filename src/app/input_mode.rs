#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys go to the SQL editor.
    Editing,
    /// Keys go to the result search box.
    Search,
    SavePrompt,
    Help,
}
