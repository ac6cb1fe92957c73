//! Formatting utilities for terminal output

/// Letter count badge shown next to a found word, e.g. `(6)`
#[must_use]
pub fn letter_badge(word: &str) -> String {
    format!("({})", word.chars().count())
}

/// `+1 pt` / `+6 pts`
#[must_use]
pub fn points_label(points: u32) -> String {
    if points == 1 {
        "+1 pt".to_string()
    } else {
        format!("+{points} pts")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
