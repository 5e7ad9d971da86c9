use std::io::Write;

use anyhow::{anyhow, Result};
use tabwriter::TabWriter;

pub fn render<I>(headers: &[&str], rows: I, with_headers: bool) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut tw = TabWriter::new(vec![]);

    if with_headers {
        writeln!(tw, "{}", headers.join("\t"))?;
    }

    for row in rows {
        let cells = row.iter().map(|cell| clean(cell)).collect::<Vec<_>>();

        writeln!(tw, "{}", cells.join("\t"))?;
    }

    let buffer = tw.into_inner().map_err(|e| anyhow!("{e}"))?;

    Ok(String::from_utf8(buffer)?)
}

// tabs and newlines would break the alignment
fn clean(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}
