//! CLI logic for the Pinker diagram tool.
//!
//! Reads a Pinker document, runs it through the [`pinker`] pipeline and
//! writes the resulting SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{borrow::Cow, fs};

use log::{debug, info};

use pinker::{DiagramBuilder, PinkerError};

/// Exit status for I/O and configuration failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status when `--strict` rejects a document with error diagnostics.
pub const EXIT_REJECTED: i32 = 2;

/// Maps a failed run to the process exit status.
pub fn exit_code(err: &PinkerError) -> i32 {
    match err {
        PinkerError::Diagnostics { .. } => EXIT_REJECTED,
        _ => EXIT_FAILURE,
    }
}

/// Run the Pinker CLI application
///
/// Diagnostics are logged and never stop the SVG from being written, unless
/// [`Args::strict`] is set and one of them is an error.
///
/// # Errors
///
/// Returns `PinkerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Error diagnostics in strict mode
pub fn run(args: &Args) -> Result<(), PinkerError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let raw = fs::read_to_string(&args.input)?;
    let source = if args.decode_html {
        let decoded = pinker_parser::decode_entities(&raw);
        if let Cow::Owned(_) = decoded {
            debug!("Decoded HTML entities in input");
        }
        decoded
    } else {
        Cow::Borrowed(raw.as_str())
    };

    let builder = DiagramBuilder::new(app_config).with_strict(args.strict);
    let diagram = builder.build(&source)?;
    builder.export_svg(&diagram, &args.output)?;

    debug!(
        output_file = args.output,
        diagnostics_len = diagram.diagnostics().len();
        "Diagram written"
    );

    Ok(())
}
