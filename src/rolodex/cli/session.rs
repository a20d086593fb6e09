use super::render::{render_error, render_result};
use rolodex::api::RolodexApi;
use rolodex::error::Result;
use rolodex::parser::{parse, Command};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// The read–dispatch–print loop over one address book.
pub(super) struct Session {
    api: RolodexApi,
    prompt: String,
    use_color: bool,
}

impl Session {
    pub(super) fn new(api: RolodexApi, prompt: impl Into<String>, use_color: bool) -> Self {
        Self {
            api,
            prompt: prompt.into(),
            use_color,
        }
    }

    /// Runs until the exit command or end of input. Command errors are printed and
    /// the loop continues; only I/O failures end it early.
    pub(super) fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input, closing session");
                writeln!(out)?;
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and fails validation like any other typo.
            let line = String::from_utf8_lossy(&buf);
            let parsed = parse(line.trim_end_matches(['\r', '\n']));
            let rendered = match self.api.dispatch(&parsed) {
                Ok(result) => {
                    if !result.affected_records.is_empty() {
                        let names: Vec<&str> = result
                            .affected_records
                            .iter()
                            .map(|r| r.name.as_str())
                            .collect();
                        debug!(command = %parsed.command, records = ?names, "records changed");
                    }
                    render_result(&result, self.use_color)
                }
                Err(e) => {
                    warn!(command = %parsed.command, error = %e, "command failed");
                    render_error(&e, self.use_color)
                }
            };
            out.write_all(rendered.as_bytes())?;

            if parsed.command == Command::Exit {
                debug!(contacts = self.api.book().len(), "session finished");
                break;
            }
        }
        out.flush()?;
        Ok(())
    }
}
