use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.blue} [{bar:32.cyan/blue}] {pos}/{len} ports {msg}";

/// Scan progress, drawn on stderr when color is on.
///
/// Lines printed through [`ScanProgress::println`] appear above the bar
/// instead of tearing it.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), draw_target(visible));
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓░").tick_strings(&[
                "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁", "▁▁▁▁▁",
            ]));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn println<T: AsRef<str>>(&self, msg: T) {
        if self.bar.is_hidden() {
            println!("{}", msg.as_ref());
        } else {
            self.bar.println(msg);
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn draw_target(visible: bool) -> ProgressDrawTarget {
    if visible {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    }
}
