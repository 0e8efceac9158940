use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::utils::Pacer;

/// Receives one rendered generation at a time.
pub trait Screen {
    fn display(&mut self, text: &str) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn display(&mut self, text: &str) -> io::Result<()> {
        (**self).display(text)
    }
}

/// Prints frames to a terminal, waiting for the pacer before each one.
pub struct TerminalScreen<W: Write> {
    out: W,
    pacer: Pacer,
    clear: bool,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout(pacer: Pacer, clear: bool) -> Self {
        Self::new(io::stdout(), pacer, clear)
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, pacer: Pacer, clear: bool) -> Self {
        Self { out, pacer, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn display(&mut self, text: &str) -> io::Result<()> {
        self.pacer.delay();
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// Keeps every frame in memory.
#[derive(Default, Debug)]
pub struct Recorder {
    frames: Vec<String>,
}

impl Recorder {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Screen for Recorder {
    fn display(&mut self, text: &str) -> io::Result<()> {
        self.frames.push(text.to_owned());
        Ok(())
    }
}
