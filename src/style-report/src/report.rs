use std::{borrow::Cow, io::Write};

use crate::{checker::Diagnostic, error::Result};

pub const HEADER: [&str; 4] = ["File", "Line", "Column", "Error"];

/// Writes the header, then one row per diagnostic.
pub fn write_report<W: Write>(mut writer: W, diagnostics: &[Diagnostic]) -> Result<()> {
    write_row(&mut writer, &HEADER)?;
    for d in diagnostics {
        write_row(
            &mut writer,
            &[&d.file[..], &d.line[..], &d.column[..], &d.error[..]],
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let row = fields.iter().map(|field| escape(field)).collect::<Vec<_>>();
    write!(writer, "{}\r\n", row.join(","))?;
    Ok(())
}

// Quote only when needed, doubling embedded quotes
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
