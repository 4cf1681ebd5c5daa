use crossterm::style::{style, Stylize};

/// What a piece of output text represents on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Path,
    Directory,
    File,
    Size,
    Frame,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        if color {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    /// Pad before painting; escape codes count toward format widths.
    pub fn paint(self, role: Role, text: &str) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => match role {
                Role::Path | Role::Prompt => style(text).blue().bold().to_string(),
                Role::Directory => style(text).cyan().bold().to_string(),
                Role::File => style(text).green().bold().to_string(),
                Role::Size => style(text).yellow().bold().to_string(),
                Role::Frame => style(text).white().bold().to_string(),
            },
        }
    }
}

/// Erase the screen and home the cursor.
pub fn clear_sequence() -> String {
    use crossterm::cursor::MoveTo;
    use crossterm::terminal::{Clear, ClearType};
    use crossterm::Command;

    let mut seq = String::new();
    // Writing ANSI into a String cannot fail.
    let _ = Clear(ClearType::All).write_ansi(&mut seq);
    let _ = MoveTo(0, 0).write_ansi(&mut seq);
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_leaves_text_alone() {
        assert_eq!(Palette::Plain.paint(Role::Directory, "src"), "src");
    }

    #[test]
    fn ansi_wraps_text_in_escapes() {
        crossterm::style::force_color_output(true);
        let painted = Palette::Ansi.paint(Role::File, "a.txt");
        assert!(painted.contains("a.txt"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "a.txt");
    }

    #[test]
    fn roles_are_visually_distinct() {
        crossterm::style::force_color_output(true);
        let dir = Palette::Ansi.paint(Role::Directory, "x");
        let file = Palette::Ansi.paint(Role::File, "x");
        let size = Palette::Ansi.paint(Role::Size, "x");
        let path = Palette::Ansi.paint(Role::Path, "x");
        assert_ne!(dir, file);
        assert_ne!(file, size);
        assert_ne!(size, path);
        assert_ne!(path, dir);
    }

    #[test]
    fn clear_sequence_erases_and_homes() {
        assert_eq!(clear_sequence(), "\u{1b}[2J\u{1b}[1;1H");
    }
}
