//! Generate EQUATIONS.md from the equation registry.
//!
//! Writes the crack control equations reference produced by
//! `calc_core::equations::generate_equations_markdown`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations                  # calc_core/EQUATIONS.md
//! cargo run --bin gen-equations -- docs/EQ.md    # custom path
//! ```

use std::fs;
use std::path::PathBuf;

use calc_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "calc_core/EQUATIONS.md";

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} equations ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
