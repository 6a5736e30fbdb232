//! Interactive terminal loop driving an [`InterviewFlow`].

use std::io::{self, BufRead, Write};

use services::{FlowPhase, InterviewFlow, SessionError, SessionReport, SubmitOutcome};

use crate::render;

/// Typed on its own line to return to the previous question.
pub const BACK_COMMAND: &str = ":back";
/// Typed on its own line to abandon the session.
pub const QUIT_COMMAND: &str = ":quit";

/// Reads one line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run a full session. Returns `None` if the user quit or input ended early.
///
/// # Errors
///
/// Returns I/O errors and session errors other than rejected input.
pub fn run(
    flow: &mut InterviewFlow,
    job_title: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<SessionReport>, Box<dyn std::error::Error>> {
    if !start(flow, job_title, input, out)? {
        return Ok(None);
    }
    writeln!(
        out,
        "Type your answer and press Enter. Use {BACK_COMMAND} to go back, {QUIT_COMMAND} to stop."
    )?;

    while flow.phase() == FlowPhase::Questions {
        if let (Some(progress), Some(question)) = (flow.progress(), flow.current_question()) {
            write!(out, "{}", render::question(&progress, question))?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim() {
            QUIT_COMMAND => return Ok(None),
            BACK_COMMAND => match flow.go_to_previous() {
                Ok(_) => {}
                Err(SessionError::AtFirstQuestion) => {
                    writeln!(out, "Already at the first question.")?;
                }
                Err(err) => return Err(err.into()),
            },
            _ => match flow.submit_answer(&line) {
                Ok(SubmitOutcome::Continue { feedback, .. }) => {
                    write!(out, "{}", render::feedback(&feedback))?;
                }
                Ok(SubmitOutcome::Completed { feedback, .. }) => {
                    write!(out, "{}", render::feedback(&feedback))?;
                    writeln!(out, "Interview complete.")?;
                }
                Err(err) if err.is_input() => {
                    writeln!(out, "Please answer the question before continuing.")?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(Some(flow.session_report()?))
}

/// Start the flow, prompting for a job title until one is accepted.
fn start(
    flow: &mut InterviewFlow,
    mut job_title: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        let candidate = match job_title.take() {
            Some(title) => title.to_string(),
            None => {
                write!(out, "Which position are you applying for? ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(line) => line,
                    None => return Ok(false),
                }
            }
        };

        match flow.start(&candidate) {
            Ok(questions) => {
                writeln!(
                    out,
                    "{} questions generated for {}. Good luck!",
                    questions.len(),
                    candidate.trim()
                )?;
                return Ok(true);
            }
            Err(err) if err.is_input() => {
                writeln!(out, "Please enter the position to generate the questions.")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
