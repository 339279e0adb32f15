use crate::adapters::output::Renderer;
use crate::core::engine::MortgageEngine;
use crate::domain::model::{LoanField, RawLoanInput};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// Line-oriented calculator session: ask for the three fields, submit,
/// print the outcome, then start over with empty fields.
pub struct PromptSession<R, W> {
    reader: R,
    writer: W,
    renderer: Renderer,
    engine: MortgageEngine,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, writer: W, renderer: Renderer) -> Self {
        Self {
            reader,
            writer,
            renderer,
            engine: MortgageEngine::new(),
        }
    }

    /// Runs until end of input or a quit word. Returns the engine so the
    /// caller can inspect the final state.
    pub fn run(mut self) -> Result<MortgageEngine> {
        tracing::info!("🔁 Interactive session started");

        while let Some(raw) = self.read_submission()? {
            match self.engine.submit(&raw) {
                Ok(result) => match self.renderer.render_result(&result) {
                    Ok(text) => writeln!(self.writer, "{}", text)?,
                    Err(e) => {
                        tracing::warn!("❌ {}", e);
                        writeln!(self.writer, "❌ {}", e.user_friendly_message())?;
                    }
                },
                Err(errors) => {
                    let text = self.renderer.render_errors(&errors)?;
                    writeln!(self.writer, "{}", text)?;
                }
            }
            writeln!(self.writer)?;
        }

        tracing::info!(
            "Interactive session ended after {} submission(s)",
            self.engine.submissions()
        );
        Ok(self.engine)
    }

    fn read_submission(&mut self) -> Result<Option<RawLoanInput>> {
        let mut raw = RawLoanInput::default();

        for field in LoanField::ALL {
            write!(self.writer, "{}: ", field.label())?;
            self.writer.flush()?;

            // 非 UTF-8 的輸入視為非數字欄位，不中斷整個 session
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&buf);
            let value = line.trim();
            if QUIT_WORDS.contains(&value.to_ascii_lowercase().as_str()) {
                return Ok(None);
            }
            raw.set(field, Some(value.to_string()).filter(|v| !v.is_empty()));
        }

        Ok(Some(raw))
    }
}
