use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `width` display cells, ending with `…` when
/// something was dropped, then pads it to exactly `width`.
pub fn fit_cell(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let single_line: String = text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    if single_line.width() <= width {
        let pad = width - single_line.width();
        return format!("{single_line}{}", " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in single_line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
