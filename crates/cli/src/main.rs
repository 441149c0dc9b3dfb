use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use unit_setters_core::error::Result;

use unit_setters_cli::cli_args::Args;
use unit_setters_cli::selection::{select, Selection};

fn print_selection(selection: &Selection) {
    let family = &selection.family;
    println!("Family: {} ({})", family.name, family.description);

    match &selection.unit {
        Some(unit) => {
            println!("Unit: {} ({})", unit.name, unit.abbrev);
            if !unit.notes.is_empty() {
                println!("\tNotes: {}", unit.notes);
            }
            if !unit.tags.is_empty() {
                println!("\tTags: {}", unit.tags.iter().join(", "));
            }
        }
        None => println!("Unit: none given"),
    }

    if let Some(tag) = selection.required_tag {
        println!("Required tag: {tag}");
    }
    if !selection.tags.is_empty() {
        println!("Tags: {}", selection.tags.iter().join(", "));
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let selection = select(&args)?;

    for description in &selection.descriptions {
        println!("{description}");
    }
    if !selection.descriptions.is_empty() {
        println!();
    }

    print_selection(&selection);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
