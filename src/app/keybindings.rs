//! Key/description pairs shown by the footer and the help overlay.
//! The event handler owns the actual key matching.

use super::action::Action;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "^R", "j/k")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+R / F5")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Run")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Run the query in the editor")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const RUN: usize = 2;
        pub const CLEAR: usize = 3;
        pub const SAVE: usize = 4;
        pub const PANE_SWITCH: usize = 5;
        pub const PANE_JUMP: usize = 6;
        pub const EDIT: usize = 7;
    }

    pub mod list {
        pub const NAVIGATE: usize = 0;
        pub const TOP_BOTTOM: usize = 1;
        pub const SELECT: usize = 2;
        pub const EXPAND: usize = 3;
        pub const DELETE: usize = 4;
    }

    pub mod editor {
        pub const RUN: usize = 0;
        pub const NEWLINE: usize = 1;
        pub const MOVE: usize = 2;
        pub const ESC_DONE: usize = 3;
    }

    pub mod result {
        pub const SCROLL: usize = 0;
        pub const TOP_BOTTOM: usize = 1;
        pub const COLUMN: usize = 2;
        pub const SORT: usize = 3;
        pub const SEARCH: usize = 4;
        pub const COPY: usize = 5;
        pub const EXPORT: usize = 6;
    }

    pub mod search {
        pub const APPLY: usize = 0;
        pub const ESC_CLEAR: usize = 1;
    }

    pub mod save_prompt {
        pub const SAVE: usize = 0;
        pub const ESC_CANCEL: usize = 1;
    }

    pub mod help {
        pub const SCROLL: usize = 0;
        pub const CLOSE: usize = 1;
        pub const QUIT: usize = 2;
    }
}

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit",
        action: Action::Quit,
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Show this help",
        action: Action::OpenHelp,
    },
    // idx 2: RUN
    KeyBinding {
        key_short: "^R",
        key: "Ctrl+R / F5",
        desc_short: "Run",
        description: "Run the query in the editor",
        action: Action::RunQuery,
    },
    // idx 3: CLEAR
    KeyBinding {
        key_short: "^L",
        key: "Ctrl+L",
        desc_short: "Clear",
        description: "Clear the editor and the result",
        action: Action::ClearAll,
    },
    // idx 4: SAVE
    KeyBinding {
        key_short: "^S",
        key: "Ctrl+S",
        desc_short: "Save",
        description: "Save the editor query under a name",
        action: Action::OpenSavePrompt,
    },
    // idx 5: PANE_SWITCH
    KeyBinding {
        key_short: "Tab",
        key: "Tab / ⇧Tab",
        desc_short: "Pane",
        description: "Focus next / previous pane",
        action: Action::FocusNext,
    },
    // idx 6: PANE_JUMP
    KeyBinding {
        key_short: "1-6",
        key: "1 … 6",
        desc_short: "Jump",
        description: "Focus pane by number",
        action: Action::None,
    },
    // idx 7: EDIT
    KeyBinding {
        key_short: "i",
        key: "i / Enter",
        desc_short: "Edit",
        description: "Start editing the query",
        action: Action::EnterEditing,
    },
];

pub const LIST_KEYS: &[KeyBinding] = &[
    // idx 0: NAVIGATE
    KeyBinding {
        key_short: "j/k",
        key: "j / k / ↑ / ↓",
        desc_short: "Move",
        description: "Move the selection",
        action: Action::None,
    },
    // idx 1: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g / G",
        desc_short: "Top/Bottom",
        description: "Jump to the first / last item",
        action: Action::None,
    },
    // idx 2: SELECT
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Select",
        description: "Use the selected item",
        action: Action::ConfirmSelection,
    },
    // idx 3: EXPAND
    KeyBinding {
        key_short: "Space",
        key: "Space / →",
        desc_short: "Expand",
        description: "Expand or collapse a schema table",
        action: Action::ToggleSchemaExpand,
    },
    // idx 4: DELETE
    KeyBinding {
        key_short: "d",
        key: "d",
        desc_short: "Delete",
        description: "Delete the selected saved query",
        action: Action::DeleteSelectedSaved,
    },
];

pub const EDITOR_KEYS: &[KeyBinding] = &[
    // idx 0: RUN
    KeyBinding {
        key_short: "^R",
        key: "Ctrl+R / F5",
        desc_short: "Run",
        description: "Run the query",
        action: Action::RunQuery,
    },
    // idx 1: NEWLINE
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Newline",
        description: "Insert a line break",
        action: Action::EditorNewline,
    },
    // idx 2: MOVE
    KeyBinding {
        key_short: "←↑↓→",
        key: "Arrows / Home / End",
        desc_short: "Move",
        description: "Move the cursor",
        action: Action::None,
    },
    // idx 3: ESC_DONE
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Done",
        description: "Stop editing",
        action: Action::Escape,
    },
];

pub const RESULT_KEYS: &[KeyBinding] = &[
    // idx 0: SCROLL
    KeyBinding {
        key_short: "j/k",
        key: "j / k / PgUp / PgDn",
        desc_short: "Scroll",
        description: "Scroll rows",
        action: Action::None,
    },
    // idx 1: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g / G",
        desc_short: "Top/Bottom",
        description: "Jump to the first / last loaded row",
        action: Action::None,
    },
    // idx 2: COLUMN
    KeyBinding {
        key_short: "h/l",
        key: "h / l",
        desc_short: "Column",
        description: "Move the highlighted column",
        action: Action::None,
    },
    // idx 3: SORT
    KeyBinding {
        key_short: "s",
        key: "s / S",
        desc_short: "Sort",
        description: "Sort by the highlighted column (again to reverse)",
        action: Action::SortHighlighted,
    },
    // idx 4: SEARCH
    KeyBinding {
        key_short: "/",
        key: "/",
        desc_short: "Search",
        description: "Filter rows by search terms",
        action: Action::EnterSearch,
    },
    // idx 5: COPY
    KeyBinding {
        key_short: "y",
        key: "y",
        desc_short: "Copy",
        description: "Copy the result to the clipboard",
        action: Action::CopyResult,
    },
    // idx 6: EXPORT
    KeyBinding {
        key_short: "e",
        key: "e",
        desc_short: "CSV",
        description: "Export the result as CSV",
        action: Action::None,
    },
];

pub const SEARCH_KEYS: &[KeyBinding] = &[
    // idx 0: APPLY
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Apply",
        description: "Apply the search",
        action: Action::SubmitSearch,
    },
    // idx 1: ESC_CLEAR
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Clear",
        description: "Clear the search",
        action: Action::ClearSearch,
    },
];

pub const SAVE_PROMPT_KEYS: &[KeyBinding] = &[
    // idx 0: SAVE
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Save",
        description: "Save under the typed name",
        action: Action::None,
    },
    // idx 1: ESC_CANCEL
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Cancel",
        description: "Close without saving",
        action: Action::CloseSavePrompt,
    },
];

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: SCROLL
    KeyBinding {
        key_short: "j/k",
        key: "j / k",
        desc_short: "Scroll",
        description: "Scroll help",
        action: Action::None,
    },
    // idx 1: CLOSE
    KeyBinding {
        key_short: "Esc/?",
        key: "Esc / ?",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    // idx 2: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit",
        action: Action::Quit,
    },
];
