//! Print the tasks a fetch would perform.

use std::io::{self, Write};

use anyhow::Result;

use crate::{
    catalog::{tasks, DownloadTask},
    cli::Selection,
};

pub fn list(selection: &Selection) -> Result<usize> {
    let range = selection.year_range()?;
    let variables = selection.variables();

    let stdout = io::stdout();
    write_tasks(
        &mut stdout.lock(),
        tasks(range, &variables, &selection.output_dir),
    )
}

fn write_tasks<W, I>(out: &mut W, tasks: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = DownloadTask>,
{
    let mut count = 0;
    for task in tasks {
        writeln!(out, "{} -> {}", task.url, task.destination.display())?;
        count += 1;
    }

    Ok(count)
}
