use std::error::Error;

use jsondelta::{DiffOptions, diff_with_options};

use crate::cli::{DiffArgs, read::load_json_file, render};

pub fn handle_diff_command(args: DiffArgs) -> Result<(), Box<dyn Error>> {
    let left = load_json_file(&args.left)?;
    let right = load_json_file(&args.right)?;
    let options = resolve_options(&args)?;
    tracing::debug!(?options, "diffing {:?} against {:?}", args.left, args.right);

    let patch = diff_with_options(&left, &right, &options);

    println!("{}", render(&patch, args.compact)?);
    Ok(())
}

/// Options file first, then individual flags on top.
fn resolve_options(args: &DiffArgs) -> Result<DiffOptions, Box<dyn Error>> {
    let mut options = match &args.options {
        Some(path) => serde_json::from_value(load_json_file(path)?)?,
        None => DiffOptions::default(),
    };

    if let Some(limit) = args.max_align_len {
        options.sequence_alignment_max_length = limit;
    }
    if let Some(iterations) = args.iterations {
        options.optimization_iterations = iterations;
    }
    if let Some(alignment) = args.alignment {
        options.alignment = alignment.into();
    }

    Ok(options)
}
