use std::io::Write;
use std::path::PathBuf;

use csv_core::WriteResult;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Jsonl,
    Csv,
}

#[derive(clap::Parser)]
#[group(id = "output::Args")]
pub struct Args {
    /// Write to this file instead of the terminal.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    #[arg(long, short='f', value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open the specified output file at {1:?}")]
    OpenOutputFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the output file at {1:?}")]
    WriteFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the terminal")]
    WriteStdout(#[source] std::io::Error),
    #[error("could not serialize the record to JSON")]
    SerializeJson(#[source] serde_json::Error),
}

impl Args {
    pub fn to_output(self) -> Result<Output<'static>, Error> {
        let io = match &self.output {
            None => Box::new(std::io::stdout().lock()) as Box<_>,
            Some(path) => Box::new(
                std::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| Error::OpenOutputFile(e, path.clone()))?,
            ) as Box<_>,
        };
        Ok(Output::new(self.format, io, self.output))
    }
}

/// Rows of results in the format chosen on the command line.
///
/// Tables are buffered until [`Output::commit`], the other formats are written as they come.
pub struct Output<'a> {
    path: Option<PathBuf>,
    io: Box<dyn Write + 'a>,
    formatter: Formatter,
}

enum Formatter {
    Csv,
    Table { comfy: comfy_table::Table },
    Jsonl,
}

impl<'a> Output<'a> {
    pub fn new(format: Format, io: Box<dyn Write + 'a>, path: Option<PathBuf>) -> Self {
        let formatter = match format {
            Format::Table => {
                let mut comfy = comfy_table::Table::new();
                comfy.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
                Formatter::Table { comfy }
            }
            Format::Jsonl => Formatter::Jsonl,
            Format::Csv => Formatter::Csv,
        };
        Self {
            path,
            io,
            formatter,
        }
    }

    /// Must be called before any results are written.
    pub fn table_headers(&mut self, hdrs: Vec<&'static str>) -> Result<(), Error> {
        match &mut self.formatter {
            Formatter::Csv => self.write_csv_row(&hdrs)?,
            Formatter::Table { comfy } => {
                comfy.set_header(hdrs);
            }
            Formatter::Jsonl => {}
        }
        Ok(())
    }

    fn write_csv_row<V: AsRef<str>>(&mut self, values: &[V]) -> Result<(), Error> {
        let mut writer = csv_core::Writer::new();
        let mut buffer = [0; 256];
        for (idx, value) in values.iter().enumerate() {
            if idx != 0 {
                let (_, ob) = writer.delimiter(&mut buffer);
                self.write_bytes(&buffer[..ob])?;
            }
            let mut input = value.as_ref().as_bytes();
            loop {
                let (result, ib, ob) = writer.field(input, &mut buffer);
                input = &input[ib..];
                self.write_bytes(&buffer[..ob])?;
                if let WriteResult::InputEmpty = result {
                    break;
                }
            }
        }
        // Closing quotes of the last field are only produced by the terminator.
        let (_, ob) = writer.terminator(&mut buffer);
        self.write_bytes(&buffer[..ob])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.io.write_all(bytes).map_err(|e| self.write_error(e))
    }

    pub fn result<R: serde::Serialize>(
        &mut self,
        table_row: impl FnOnce() -> Vec<String>,
        serde_record: impl FnOnce() -> R,
    ) -> Result<(), Error> {
        match &mut self.formatter {
            Formatter::Csv => {
                let values = table_row();
                self.write_csv_row(&values)?;
            }
            Formatter::Table { comfy } => {
                comfy.add_row(table_row());
            }
            Formatter::Jsonl => {
                serde_json::to_writer(&mut self.io, &serde_record())
                    .map_err(Error::SerializeJson)?;
                writeln!(self.io).map_err(|e| self.write_error(e))?
            }
        }
        Ok(())
    }

    fn write_error(&self, e: std::io::Error) -> Error {
        match &self.path {
            None => Error::WriteStdout(e),
            Some(p) => Error::WriteFile(e, p.clone()),
        }
    }

    pub fn commit(mut self) -> Result<(), Error> {
        if let Formatter::Table { comfy } = &self.formatter {
            let rendered = comfy.to_string();
            writeln!(self.io, "{}", rendered).map_err(|e| self.write_error(e))?;
        }
        self.io.flush().map_err(|e| self.write_error(e))
    }
}
