//! Interactive figure shell
//!
//! Loads figures from a chosen source, then offers a small menu to list,
//! clone, delete and save them. Input and output are generic so the whole
//! session can be driven from memory in tests.

use anyhow::{anyhow, bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use figures::core::split_tokens;
use figures::prelude::*;

const METHOD_PROMPT: &str = "Select input method:
\t<random>          - generates random figures
\t<stdin>           - enter figures from stdin
\t<file 'filename'> - reads figures from file with name 'filename'
";

const MENU: &str = "1. Display all figures
2. Clone a figure
3. Save figures to file
4. Delete figure
5. Quit
";

/// Interactive application owning the figure collection
pub struct FiguresApp<R, W> {
    input: R,
    output: W,
    figures: Vec<Figure>,
    prompts: bool,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> FiguresApp<R, W> {
    /// Create a new shell reading commands from `input`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            figures: Vec::new(),
            prompts: true,
            seed: None,
        }
    }

    /// Whether to print prompts before reading input
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Seed for the random source
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Consume the shell, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Load figures, then run the menu until the user quits
    ///
    /// `method` and `count` pre-answer the corresponding prompts.
    pub fn run(&mut self, method: &[String], count: Option<usize>) -> Result<()> {
        self.load_figures(method, count)?;
        self.menu()
    }

    /// Create figures from the selected source
    pub fn load_figures(&mut self, method: &[String], count: Option<usize>) -> Result<()> {
        let method = self.choose_method(method)?;
        let count = match count {
            Some(0) => bail!("Number of figures should be greater than 0"),
            Some(count) => count,
            None => self.choose_count()?,
        };

        let mut source = method.into_source(&mut self.input, self.seed)?;
        info!(source = source.name(), count, "Loading figures");

        for i in 0..count {
            let figure = source
                .create()
                .with_context(|| format!("Cannot create figure #{}", i))?
                .ok_or_else(|| anyhow!("Cannot create figure #{}: input ended", i))?;
            debug!(index = i, %figure, "Created figure");
            self.figures.push(figure);
        }
        drop(source);

        writeln!(self.output, "\n---Figures created---")?;
        Ok(())
    }

    fn choose_method(&mut self, preset: &[String]) -> Result<InputMethod> {
        if let Some(method) = InputMethod::from_tokens(preset)? {
            return Ok(method);
        }

        loop {
            self.prompt(METHOD_PROMPT)?;
            let line = self
                .read_line()?
                .ok_or_else(|| anyhow!("No input method selected"))?;
            if let Some(method) = InputMethod::from_tokens(&split_tokens(&line))? {
                return Ok(method);
            }
        }
    }

    fn choose_count(&mut self) -> Result<usize> {
        loop {
            self.prompt("\nSelect number of figures: ")?;
            let line = self
                .read_line()?
                .ok_or_else(|| anyhow!("No number of figures given"))?;
            match line.trim().parse::<i64>() {
                Ok(count) if count > 0 => return Ok(count as usize),
                _ => writeln!(self.output, "\nNumber of figures should be greater than 0")?,
            }
        }
    }

    /// Read menu choices until `5` or end of input
    pub fn menu(&mut self) -> Result<()> {
        self.prompt(MENU)?;

        while let Some(line) = self.read_line()? {
            match line.trim() {
                "" => continue,
                "1" => self.display_figures()?,
                "2" => {
                    self.prompt("Please provide the number, corresponding to the figure to be cloned: \n")?;
                    let cloned = self
                        .read_index()?
                        .is_some_and(|index| self.clone_figure(index));
                    if cloned {
                        writeln!(
                            self.output,
                            "Figure successfully cloned and added to the end of the list!"
                        )?;
                    } else {
                        self.report_bad_index()?;
                    }
                }
                "3" => {
                    self.prompt("\nEnter output filename (leave blank to cancel): ")?;
                    let name = self.read_line()?.unwrap_or_default();
                    let name = name.trim();
                    if !name.is_empty() {
                        match self.save_to_file(name) {
                            Ok(()) => writeln!(
                                self.output,
                                "Saved {} figures to '{}'",
                                self.figures.len(),
                                name
                            )?,
                            Err(e) => {
                                warn!(error = %e, "Saving figures failed");
                                writeln!(self.output, "{:#}", e)?;
                            }
                        }
                    }
                }
                "4" => {
                    self.prompt("Please provide the number, corresponding to the figure to be deleted: \n")?;
                    let deleted = self
                        .read_index()?
                        .and_then(|index| self.delete_figure(index));
                    if deleted.is_some() {
                        writeln!(self.output, "Figure successfully deleted!")?;
                    } else {
                        self.report_bad_index()?;
                    }
                }
                "5" => break,
                _ => writeln!(self.output, "\nInvalid input. Please try again.")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Write every figure as `i. <figure>`
    pub fn display_figures(&mut self) -> Result<()> {
        for (i, figure) in self.figures.iter().enumerate() {
            writeln!(self.output, "{}. {}", i, figure)?;
        }
        Ok(())
    }

    /// Append a copy of the figure at `index`; false if there is none
    pub fn clone_figure(&mut self, index: usize) -> bool {
        match self.figures.get(index).cloned() {
            Some(figure) => {
                self.figures.push(figure);
                true
            }
            None => false,
        }
    }

    /// Remove and return the figure at `index`
    pub fn delete_figure(&mut self, index: usize) -> Option<Figure> {
        (index < self.figures.len()).then(|| self.figures.remove(index))
    }

    /// Write every figure, one per line, in the format the stream source reads
    pub fn write_figures<O: Write>(&self, mut out: O) -> std::io::Result<()> {
        for figure in &self.figures {
            writeln!(out, "{}", figure)?;
        }
        out.flush()
    }

    /// Save every figure to `path`, replacing its contents
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
        self.write_figures(BufWriter::new(file))
            .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
        info!(path = %path.display(), count = self.figures.len(), "Saved figures");
        Ok(())
    }

    fn report_bad_index(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nInvalid input. No figure corresponds to that number."
        )?;
        Ok(())
    }

    fn read_index(&mut self) -> Result<Option<usize>> {
        Ok(self
            .read_line()?
            .and_then(|line| line.trim().parse::<usize>().ok()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Next line of input without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }
}
