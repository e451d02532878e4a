use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::config::Config;
use crate::dfa::Dfa;

/// Line that asks for the empty string to be validated, since an empty
/// line ends the session.
pub const EMPTY_STRING_COMMAND: &str = "\"\"";

/// Interactive session: reads one expression, then validates strings
/// against it until an empty line.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Shell {
            input,
            output,
            config,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        let Some(dfa) = self.compile()? else {
            writeln!(self.output, "Expresion vacia. Terminando.")?;
            return Ok(());
        };

        writeln!(self.output, "\n[AFD construido. Modo validacion activo.]")?;
        if self.config.show_table {
            write!(self.output, "{dfa}")?;
        }

        self.validate_all(&dfa)?;
        writeln!(self.output, "Programa terminado.")?;
        Ok(())
    }

    /// Asks for expressions until one compiles. `None` when the user gives up
    /// with an empty line.
    fn compile(&mut self) -> io::Result<Option<Dfa>> {
        loop {
            let Some(pattern) = self.prompt("Ingrese una expresion regular: ")? else {
                return Ok(None);
            };

            match Dfa::with_limits(&pattern, &self.config.limits) {
                Ok(dfa) => {
                    info!("compiled {pattern:?} into {} states", dfa.state_count());
                    return Ok(Some(dfa));
                }
                Err(e) => {
                    warn!("{pattern:?}: {e}");
                    writeln!(self.output, "{e}")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn validate_all(&mut self, dfa: &Dfa) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt("Ingrese cadena: ")? else {
                writeln!(self.output, "[ENTER]")?;
                return Ok(());
            };

            let input = match line.as_str() {
                EMPTY_STRING_COMMAND => "",
                line => line,
            };
            let verdict = dfa.validate(input);
            info!("{input:?}: {verdict}");

            writeln!(self.output, "{verdict}")?;
            writeln!(self.output)?;
        }
    }

    /// `None` on an empty line or at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let line = buf.strip_suffix('\n').unwrap_or(buf.as_str());
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line.to_owned()))
    }
}
