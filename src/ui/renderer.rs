//! Top-level rendering of a view model to terminal text.
//!
//! Rendering builds a `String`; writing it out is left to the caller.
//!
//! # Layout
//!
//! ```text
//! [Progress line, while the spinner is shown]
//! [Header]
//! [Border]
//! [Filter bar: query and order]
//! [Album rows | empty state]
//! [Snack bar, when a notification is open]
//! ```
//!
//! # Example
//!
//! ```rust
//! use album_search::app::SearchState;
//! use album_search::ui::render_plain;
//!
//! let vm = SearchState::default().compute_viewmodel();
//! let text = render_plain(&vm, 40);
//! assert!(text.contains("Albums (0)"));
//! ```

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, SnackBarInfo, UIViewModel};
use std::fmt::Write;

const PROGRESS_TEXT: &str = "Loading albums...";

/// Renders with the theme's colors.
#[must_use]
pub fn render(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    Painter { theme: Some(theme) }.frame(vm, cols)
}

/// Renders without escape sequences.
#[must_use]
pub fn render_plain(vm: &UIViewModel, cols: usize) -> String {
    Painter { theme: None }.frame(vm, cols)
}

/// Emits escape sequences only when a theme is present.
struct Painter<'a> {
    theme: Option<&'a Theme>,
}

impl Painter<'_> {
    fn fg(&self, pick: impl Fn(&Theme) -> &str) -> String {
        self.theme.map(|t| Theme::fg(pick(t))).unwrap_or_default()
    }

    fn bg(&self, pick: impl Fn(&Theme) -> &str) -> String {
        self.theme.map(|t| Theme::bg(pick(t))).unwrap_or_default()
    }

    fn bold(&self) -> &'static str {
        if self.theme.is_some() { Theme::bold() } else { "" }
    }

    fn reset(&self) -> &'static str {
        if self.theme.is_some() { Theme::reset() } else { "" }
    }

    fn frame(&self, vm: &UIViewModel, cols: usize) -> String {
        let mut out = String::new();

        if vm.show_spinner {
            let _ = writeln!(out, "{}{PROGRESS_TEXT}{}", self.fg(|t| t.colors.spinner_fg.as_str()), self.reset());
        }

        let _ = writeln!(out, "{}{}{}{}", self.bold(), self.fg(|t| t.colors.header_fg.as_str()), vm.header, self.reset());
        let _ = writeln!(out, "{}{}{}", self.fg(|t| t.colors.border.as_str()), "─".repeat(cols), self.reset());
        let _ = writeln!(
            out,
            "{}Search:{} {}   {}Order:{} {}",
            self.fg(|t| t.colors.text_dim.as_str()),
            self.reset(),
            vm.query,
            self.fg(|t| t.colors.text_dim.as_str()),
            self.reset(),
            vm.order
        );

        if let Some(message) = &vm.empty_state {
            let _ = writeln!(out, "{}{message}{}", self.fg(|t| t.colors.empty_state_fg.as_str()), self.reset());
        }

        for item in &vm.items {
            self.row(&mut out, item, cols);
        }

        if let Some(snack_bar) = &vm.snack_bar {
            self.snack_bar(&mut out, snack_bar);
        }

        out
    }

    fn row(&self, out: &mut String, item: &DisplayItem, cols: usize) {
        let title: String = item.title.chars().take(cols.saturating_sub(2)).collect();
        out.push_str("  ");
        self.highlighted(out, &title, &item.highlight_ranges);
        out.push_str(self.reset());

        if let Some(subtitle) = &item.subtitle {
            let _ = write!(out, "  {}{subtitle}{}", self.fg(|t| t.colors.text_dim.as_str()), self.reset());
        }
        out.push('\n');
    }

    /// Writes `text` in the normal text color with `ranges` highlighted.
    fn highlighted(&self, out: &mut String, text: &str, ranges: &[(usize, usize)]) {
        let normal = self.fg(|t| t.colors.text_normal.as_str());
        let chars: Vec<char> = text.chars().collect();
        let mut pos = 0;

        out.push_str(&normal);

        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start < pos || start >= end {
                continue;
            }
            out.extend(&chars[pos..start]);
            out.push_str(&self.fg(|t| t.colors.match_highlight_fg.as_str()));
            out.push_str(&self.bg(|t| t.colors.match_highlight_bg.as_str()));
            out.extend(&chars[start..end]);
            out.push_str(self.reset());
            out.push_str(&normal);
            pos = end;
        }
        out.extend(&chars[pos..]);
    }

    fn snack_bar(&self, out: &mut String, snack_bar: &SnackBarInfo) {
        let _ = writeln!(
            out,
            "{}{} {}  [{}] {}",
            self.fg(|t| t.colors.snack_bar_fg.as_str()),
            self.bg(|t| t.colors.snack_bar_bg.as_str()),
            snack_bar.message,
            snack_bar.action,
            self.reset()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchState;
    use crate::domain::{Album, SortOrder};

    fn state_with(titles: &[&str]) -> SearchState {
        SearchState {
            albums: titles
                .iter()
                .zip(1..)
                .map(|(title, id)| Album::new(id, *title))
                .collect(),
            ..SearchState::default()
        }
    }

    #[test]
    fn test_plain_frame_lists_albums_in_order() {
        let mut state = state_with(&["B", "A", "C"]);
        state.order = SortOrder::Desc;

        let text = render_plain(&state.compute_viewmodel(), 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Albums (3)");
        assert_eq!(lines[1], "─".repeat(10));
        assert_eq!(lines[2], "Search:    Order: desc");
        assert_eq!(&lines[3..], ["  C", "  B", "  A"]);
    }

    #[test]
    fn test_progress_line_only_while_spinner_shown() {
        let mut state = SearchState {
            loading: true,
            ..SearchState::default()
        };
        assert!(render_plain(&state.compute_viewmodel(), 20).starts_with(PROGRESS_TEXT));

        state.albums = vec![Album::new(1, "Revolver")];
        assert!(!render_plain(&state.compute_viewmodel(), 20).contains(PROGRESS_TEXT));
    }

    #[test]
    fn test_empty_state_and_snack_bar() {
        let mut vm = state_with(&["Revolver"]).compute_viewmodel();
        vm.empty_state = Some("No albums found".to_string());
        vm.items.clear();
        vm.snack_bar = Some(SnackBarInfo {
            message: "Failed to load albums".to_string(),
            action: "Dismiss".to_string(),
        });

        let text = render_plain(&vm, 20);
        assert!(text.contains("No albums found\n"));
        assert!(text.ends_with(" Failed to load albums  [Dismiss] \n"));
    }

    #[test]
    fn test_titles_use_normal_text_color() {
        let mut theme = Theme::default();
        theme.colors.text_normal = "#010203".to_string();

        let text = render(&state_with(&["Help!"]).compute_viewmodel(), &theme, 20);
        assert!(text.contains(&format!("  {}Help!{}\n", Theme::fg("#010203"), Theme::reset())));
    }

    #[test]
    fn test_highlight_wraps_match_with_escapes() {
        let mut state = state_with(&["Revolver"]);
        state.query = "VOL".to_string();

        let theme = Theme::default();
        let text = render(&state.compute_viewmodel(), &theme, 20);
        let normal = Theme::fg(&theme.colors.text_normal);
        let expected = format!(
            "  {normal}Re{}{}vol{}{normal}ver{}\n",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::reset()
        );
        assert!(text.contains(&expected));
    }
}
