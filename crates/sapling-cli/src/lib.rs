//! CLI logic for the Sapling tree layout tool.
//!
//! The CLI reads an indented outline, lays the tree out with
//! [`sapling::TreeLayout`] and writes one tab-separated `label x y` line per
//! node in preorder, preceded by a comment line holding the bounding
//! rectangle of the drawing.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod outline;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;
pub use outline::{OutlineError, parse as parse_outline};

use std::{
    fmt::Write as _,
    fs,
    io::{self, Write as _},
};

use log::{debug, info};

use sapling::{Tree, TreeLayout, geometry::Point};

/// Run the Sapling CLI application
///
/// This function reads the outline named by `args`, arranges it and writes
/// the node positions to the output file, or to stdout when no output file
/// is given.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Outline syntax errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing outline"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the outline
    let source = fs::read_to_string(&args.input)?;
    let mut tree = outline::parse(&source).map_err(|err| CliError::outline(err, source.as_str()))?;
    debug!(nodes = tree.len(); "Outline loaded");

    // Arrange
    let layout = TreeLayout::new(*app_config.layout());
    layout.arrange(&mut tree, Point::new(args.offset_x, args.offset_y))?;

    // Write positions
    let rendered = render(&tree);
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path.as_str(); "Positions written");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Formats the positions of an arranged tree.
///
/// The first line is `# bounds` followed by the rectangle from
/// [`Tree::bounds`]; every following line is `label`, `x` and `y` separated
/// by tabs, in preorder.
pub fn render(tree: &Tree<String>) -> String {
    let mut out = String::new();
    if let Some(bounds) = tree.bounds() {
        writeln!(
            out,
            "# bounds\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
            bounds.min_x(),
            bounds.min_y(),
            bounds.max_x(),
            bounds.max_y()
        )
        .expect("Writing to String buffer is infallible");
    }
    for (_, node) in tree.preorder() {
        let position = node.position();
        writeln!(
            out,
            "{}\t{:.3}\t{:.3}",
            node.data(),
            position.x(),
            position.y()
        )
        .expect("Writing to String buffer is infallible");
    }
    out
}
