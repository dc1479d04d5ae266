use std::error::Error;

use jsondelta::{Patch, patch::apply};

use crate::cli::{ApplyArgs, read::load_json_file, render};

pub fn handle_apply_command(args: ApplyArgs) -> Result<(), Box<dyn Error>> {
    let doc = load_json_file(&args.doc)?;
    let patch: Patch = serde_json::from_value(load_json_file(&args.patch)?)?;

    let result = apply(&doc, &patch)?;

    println!("{}", render(&result, args.compact)?);
    Ok(())
}
