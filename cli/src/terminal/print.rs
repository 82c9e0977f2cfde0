use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// All operator-facing output goes through here.
///
/// Color is decided once at startup; with it off every method writes the same
/// text without escape codes.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn paint<T: AsRef<str>>(&self, text: T, color: Color) -> ColoredString {
        if self.color {
            text.as_ref().color(color)
        } else {
            text.as_ref().normal()
        }
    }

    pub fn bold<T: AsRef<str>>(&self, text: T, color: Color) -> ColoredString {
        if self.color {
            text.as_ref().color(color).bold()
        } else {
            text.as_ref().normal()
        }
    }

    pub fn print(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn banner(&self) {
        let text_content: String = format!("⟦ NETKIT v{} ⟧", env!("CARGO_PKG_VERSION"));
        let text_width: usize = console::measure_text_width(&text_content);
        let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
        let sep: ColoredString = self.paint("═".repeat(side), colors::SEPARATOR);
        let text: ColoredString = self.bold(&text_content, colors::SUCCESS);
        self.print(&format!("{sep}{text}{sep}"));
    }

    pub fn header(&self, msg: &str) {
        let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        self.print(&format!(
            "{}{}{}",
            self.paint("─".repeat(left), colors::SEPARATOR),
            self.paint(&formatted, colors::PRIMARY),
            self.paint("─".repeat(right), colors::SEPARATOR),
        ));
    }

    pub fn fat_separator(&self) {
        self.print(&format!("{}", self.paint("═".repeat(TOTAL_WIDTH), colors::SEPARATOR)));
    }

    pub fn menu_item(&self, key: char, description: &str) {
        self.print(&format!(
            "{}{} {}",
            self.paint(key.to_string(), colors::ACCENT),
            self.paint(")", colors::SEPARATOR),
            description
        ));
    }

    pub fn status<T: AsRef<str>>(&self, msg: T) {
        let prefix: ColoredString = self.paint(">", colors::SEPARATOR);
        self.print(&format!("{} {}", prefix, msg.as_ref()));
    }

    pub fn success<T: AsRef<str>>(&self, msg: T) {
        self.print(&format!("{}", self.paint(msg, colors::SUCCESS)));
    }

    pub fn failure<T: AsRef<str>>(&self, msg: T) {
        self.print(&format!("{}", self.paint(msg, colors::FAILURE)));
    }

    pub fn notice<T: AsRef<str>>(&self, msg: T) {
        self.print(&format!("{}", self.paint(msg, colors::ALERT)));
    }

    pub fn alert(&self, msg: &str) {
        self.print("");
        self.print(&format!("{}", self.paint(format!("[ALERT] {msg}"), colors::ALERT)));
        self.print("");
    }

    /// `key......: value`, with dots padding every key to `key_width`.
    pub fn aligned_line<V: Display>(&self, key: &str, value: V, key_width: usize) {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        let colon: String = format!(
            "{}{}",
            self.paint(dots, colors::SEPARATOR),
            self.paint(":", colors::SEPARATOR)
        );
        self.status(format!("{}{} {}", self.paint(key, colors::PRIMARY), colon, value));
    }

    pub fn tree_head(&self, idx: usize, name: &str) {
        self.print(&format!(
            "{}{}{} {}",
            self.paint("[", colors::SEPARATOR),
            self.paint(idx.to_string(), colors::ACCENT),
            self.paint("]", colors::SEPARATOR),
            self.paint(name, colors::PRIMARY)
        ));
    }

    pub fn as_tree_one_level(&self, key_value_pair: &[(&str, ColoredString)]) {
        for (i, (key, value)) in key_value_pair.iter().enumerate() {
            let last: bool = i + 1 == key_value_pair.len();
            let branch: ColoredString = self.paint(if last { "└─" } else { "├─" }, colors::SEPARATOR);
            self.print(&format!(
                " {} {}{}{} {}",
                branch,
                self.paint(*key, colors::TEXT_DEFAULT),
                self.paint(".".repeat(7usize.saturating_sub(key.len())), colors::SEPARATOR),
                self.paint(":", colors::SEPARATOR),
                value
            ));
        }
    }

    pub fn centerln(&self, msg: &str) {
        let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
        self.print(&format!("{space}{msg}"));
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&self, text: &str) {
        print!("{}", self.paint(text, colors::PRIMARY));
        let _ = io::stdout().flush();
    }
}
