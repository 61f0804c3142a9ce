use crate::commands::{self, Instruction};
use crate::config::{Config, OutputFormat};
use crate::contest::Contest;
use crate::error::{InstructionError, LineError};
use crate::models::Report;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u64,
    pub reports: u64,
    pub rejected: u64,
}

// Apply one line to the contest; Some(report) for NEW and TOP
pub fn handle_line(contest: &mut Contest, line: &str) -> Result<Option<Report>, InstructionError> {
    match commands::parse(line)? {
        Instruction::CloseRound(new_bound) => contest.close_round(new_bound).map(Some),
        Instruction::Standings => Ok(Some(contest.report_standings())),
        Instruction::Vote(ballot) => contest.cast_votes(&ballot).map(|_| None),
        Instruction::Blank => Ok(None),
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in &report.entries {
                writeln!(out, "{}", entry)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Runs the contest over every line of `input` until end of stream.
///
/// Reports go to `out`; each rejected line produces one diagnostic on `diagnostics`
/// and leaves the contest untouched. Only I/O failures end the run early.
pub fn run<R, W, E>(input: R, out: &mut W, diagnostics: &mut E, config: &Config) -> io::Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut contest = Contest::new(config.max_song_id);
    let mut summary = RunSummary::default();

    for raw in input.split(b'\n') {
        let raw = raw?;
        summary.lines += 1;

        // Invalid UTF-8 cannot match any instruction, so a lossy decode is enough to classify
        let handled = handle_line(&mut contest, &String::from_utf8_lossy(&raw));

        match handled {
            Ok(Some(report)) => {
                summary.reports += 1;
                write_report(out, &report, config.output)?;
            }
            Ok(None) => {}
            Err(source) => {
                summary.rejected += 1;
                warn!("Rejected line {}: {}", summary.lines, source);
                let err = LineError {
                    line_number: summary.lines,
                    line: raw,
                    source,
                };
                err.write_diagnostic(diagnostics)?;
            }
        }
    }

    out.flush()?;
    debug!(
        "Final roster bound {}, round placing {:?}, standings {:?}",
        contest.roster_bound(),
        contest.round_placing(),
        contest
            .standings_placing()
            .iter()
            .map(|&song| (song, contest.points_for(song).unwrap_or(0)))
            .collect::<Vec<_>>()
    );
    info!(
        "Processed {} line(s): {} report(s), {} rejected",
        summary.lines, summary.reports, summary.rejected
    );

    Ok(summary)
}
