use console::{Style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pwcompose::LoadFailure;
use std::io::{self, Write};
use std::time::Duration;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
        }
    }

    fn warning_style(&self) -> Style {
        if self.color_support {
            Style::new().for_stderr().yellow().bold()
        } else {
            Style::new()
        }
    }

    fn error_style(&self) -> Style {
        if self.color_support {
            Style::new().for_stderr().red().bold()
        } else {
            Style::new()
        }
    }
}

// Candidates own stdout, so everything here is about stderr.
pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn report_failures<W: Write>(
    out: &mut W,
    failures: &[LoadFailure],
    options: &DisplayOptions,
) -> io::Result<()> {
    let style = options.warning_style();

    for failure in failures {
        writeln!(
            out,
            "{} {}: {}",
            style.apply_to("warning:"),
            failure.path.display(),
            failure.error
        )?;
    }

    Ok(())
}

pub fn report_error(error: &anyhow::Error, options: &DisplayOptions) {
    let term = Term::stderr();
    term.write_line(&format!(
        "{} {:#}",
        options.error_style().apply_to("error:"),
        error
    ))
    .ok();
}

pub fn candidate_spinner(unicode_support: bool) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {human_pos} candidates ({per_sec}, {elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    if unicode_support {
        pb.set_style(style.tick_strings(&[
            "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿",
        ]));
    } else {
        pb.set_style(style.tick_chars("-\\|/-"));
    }

    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
