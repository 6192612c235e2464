use std::fmt::Write;
use std::path::PathBuf;

use x12_lib::LoopTable;

use super::input::{exit_with, load_loop_table};

pub struct LoopsArgs {
    pub loop_table: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: LoopsArgs) {
    let table = load_loop_table(args.loop_table.as_deref()).unwrap_or_else(|e| exit_with(e));
    let out = render_loops(&table, args.json).unwrap_or_else(|e| exit_with(e));
    print!("{}", out);
}

/// Version line, then one trigger per line followed by its members.
pub fn render_loops(table: &LoopTable, json: bool) -> serde_json::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(table)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(out, "version {}", table.version()).expect("String write never fails");
    for (trigger, members) in table.iter() {
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        writeln!(out, "{:<5}{}", trigger, members.join(" ")).expect("String write never fails");
    }
    Ok(out)
}
