//! CLI logic for the metaforge SQL generator.

mod args;
mod config;

pub use args::{Args, DEFAULT_INPUT, DEFAULT_OUTPUT};

use std::{fs, path::Path};

use log::info;

use metaforge::{MetaforgeError, ScriptBuilder};

/// Run the metaforge CLI application
///
/// This function reads the diagram source, parses its entity blocks, and
/// writes the generated registry SQL to the output file. On success the
/// confirmation lines the deployment scripts expect are printed to
/// stdout.
///
/// # Errors
///
/// Returns `MetaforgeError` for:
/// - A missing input file (no output is written in that case)
/// - Configuration loading errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), MetaforgeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Generating registry SQL"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file; a missing input is a terminal condition and must
    // not leave a partial output behind.
    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(MetaforgeError::MissingInput(input.to_path_buf()));
    }
    let source = fs::read_to_string(input)?;

    // Process diagram using the ScriptBuilder API
    let builder = ScriptBuilder::new(app_config);
    let entities = builder.parse(&source);
    let sql = builder.render_sql(&entities);

    // Write output file
    fs::write(&args.output, sql)?;

    println!("成功生成属性SQL文件: {}", args.output);
    println!("共处理 {} 个实体", entities.len());

    info!(output_file = args.output; "SQL script exported successfully");

    Ok(())
}
