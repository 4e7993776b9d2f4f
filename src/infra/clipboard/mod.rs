mod arboard;

pub use self::arboard::ArboardClipboard;
