use std::{
    io::{self, Write},
    time::Instant,
};

use crate::{
    cli::{
        report::{TableLayout, write_page, write_reports},
        shell::Shell,
        style::Style,
    },
    core::{
        config::Config,
        error::ExploreError,
        filter::filter,
        loader::load,
        selection::Selection,
    },
    stats::pages,
};

use super::parse::{DataArgs, ExploreArgs, ReportArgs};

fn config_from(a: &DataArgs) -> Result<Config, ExploreError> {
    Ok(Config::builder().data_dir(&a.data_dir).build()?)
}

pub fn explore(a: &ExploreArgs) -> Result<(), ExploreError> {
    let config = config_from(&a.data)?;
    let mut shell = Shell::new(
        io::stdin().lock(),
        io::stdout().lock(),
        config,
        Style::detect(a.data.no_color),
    );
    shell.run()
}

pub fn report(a: &ReportArgs) -> Result<(), ExploreError> {
    let selection = Selection::parse(&a.city, &a.month, &a.day)?;
    let config = config_from(&a.data)?;
    let style = Style::detect(a.data.no_color);

    let t_ingest = Instant::now();
    let dataset = load(selection.city, &config)?;
    let filtered = filter(&dataset, selection.month, selection.day);
    log::debug!("ingest + filter: {} µs", t_ingest.elapsed().as_micros());

    let mut out = io::stdout().lock();
    writeln!(out, "{}", style.heading(&selection.to_string()))?;
    writeln!(out, "Computing along {} trips.", filtered.len())?;
    write_reports(&mut out, &filtered, &style)?;

    if a.raw > 0 {
        let layout = TableLayout::fit(style.width, filtered.schema);
        for page in pages(&filtered).take(a.raw) {
            writeln!(out)?;
            write_page(&mut out, &page, &layout)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "bikeshare";
    println!(
        "
Example invocations
-------------------
• Interactive session : {bin} --data-dir ./data
• Whole city          : {bin} report --city chicago --data-dir ./data
• One month           : {bin} report --city washington --month march
• Month and weekday   : {bin} report --city \"new york city\" --month june --day friday
• With raw rows       : {bin} report --city chicago --day sunday --raw 2
• Verbose logging     : RUST_LOG=debug {bin} report --city chicago
"
    );
}
