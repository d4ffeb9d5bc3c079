use std::io::{self, Write};

use crate::training::Training;

/// Print the workout summary line to stdout
pub fn report(training: &dyn Training) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(training, &mut handle)?;
    handle.flush()
}

/// Write the workout summary line to `writer`
pub fn write_report<W: Write + ?Sized>(training: &dyn Training, writer: &mut W) -> io::Result<()> {
    let info = training.summary();
    writeln!(writer, "{}", info.message())
}

/// Write the workout summary as a single JSON object line
pub fn write_json_report<W: Write + ?Sized>(
    training: &dyn Training,
    writer: &mut W,
) -> io::Result<()> {
    let info = training.summary();
    serde_json::to_writer(&mut *writer, &info)?;
    writeln!(writer)
}
