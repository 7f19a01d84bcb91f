mod ui;

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressIterator;
use pwcompose::{load_wordlists, write_candidates, Cli, ComposeError, LoadFailure, LoadReport};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = ui::DisplayOptions::detect();

    match run(&cli, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if !is_broken_pipe(&err) {
                ui::report_error(&err, &options);
            }
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli, options: &ui::DisplayOptions) -> Result<u64> {
    let report = load_wordlists(&cli.wordlists);
    ui::report_failures(
        &mut io::stderr().lock(),
        failures_to_report(cli, &report),
        options,
    )?;

    let composer = cli.settings().into_composer(report.words)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let written = if cli.progress {
        let pb = ui::candidate_spinner(options.unicode_support);
        let result = write_candidates(composer.candidates().progress_with(pb.clone()), &mut out);
        pb.finish_and_clear();
        result
    } else {
        composer.write_to(&mut out)
    };

    let written = written.map_err(ComposeError::Output)?;
    Ok(written)
}

fn failures_to_report<'a>(cli: &Cli, report: &'a LoadReport) -> &'a [LoadFailure] {
    if cli.quiet { &[] } else { &report.failures[..] }
}

/// A closed stdout (e.g. piped into `head`) ends the run successfully.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    if is_broken_pipe(err) {
        return ExitCode::SUCCESS;
    }
    err.downcast_ref::<ComposeError>()
        .map_or(ExitCode::FAILURE, ComposeError::exit_code)
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
