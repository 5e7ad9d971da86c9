pub mod table;

use std::io::Write;
use std::marker::PhantomData;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A value that can be rendered as a table row.
pub trait Columns: Serialize {
    /// Every column the type knows about, in display order.
    const COLUMNS: &'static [&'static str];
    const DEFAULT_COLUMNS: &'static [&'static str];

    /// Only called with names taken from `COLUMNS`.
    fn column(&self, name: &str) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct Printer {
    pub format: OutputFormat,
    pub cols: Vec<String>,
    pub no_headers: bool,
    pub quiet: bool,
}

impl Printer {
    /// Resolves `--cols` against the columns of `T`. Call this before talking
    /// to the API so a typo never follows a mutating call.
    pub fn prepare<T: Columns>(&self) -> Result<Output<T>> {
        let columns = if self.cols.is_empty() {
            T::DEFAULT_COLUMNS.to_vec()
        } else {
            self.cols
                .iter()
                .map(|col| {
                    T::COLUMNS
                        .iter()
                        .find(|known| known.eq_ignore_ascii_case(col.trim()))
                        .copied()
                        .ok_or_else(|| Error::InvalidColumn {
                            column: col.clone(),
                            allowed: T::COLUMNS.to_vec(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Output {
            format: self.format,
            columns,
            no_headers: self.no_headers,
            quiet: self.quiet,
            _marker: PhantomData,
        })
    }
}

#[derive(Debug)]
pub struct Output<T> {
    format: OutputFormat,
    columns: Vec<&'static str>,
    no_headers: bool,
    quiet: bool,
    _marker: PhantomData<T>,
}

impl<T: Columns> Output<T> {
    pub fn print(&self, items: &[T]) -> Result<()> {
        self.write(&mut std::io::stdout().lock(), items, false)
    }

    pub fn print_one(&self, item: &T) -> Result<()> {
        self.write(&mut std::io::stdout().lock(), std::slice::from_ref(item), true)
    }

    pub fn write<W: Write>(&self, out: &mut W, items: &[T], single: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => {
                let json = match items {
                    [item] if single => serde_json::to_string_pretty(item)?,
                    items => serde_json::to_string_pretty(items)?,
                };

                writeln!(out, "{json}")?;
            }

            OutputFormat::Text => {
                let rows = items
                    .iter()
                    .map(|item| self.columns.iter().map(|col| item.column(col)).collect());

                out.write_all(table::render(&self.columns, rows, !self.no_headers)?.as_bytes())?;
            }
        }

        out.flush()?;

        Ok(())
    }
}
