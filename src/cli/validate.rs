use anyhow::Result;
use log::info;
use std::path::PathBuf;

use argodash::validator::validate_bundle;

/// Validate dataset bundle integrity.
pub fn run(bundle: PathBuf) -> Result<()> {
    info!("ArgoDash Validator");
    info!("==================");
    info!("Bundle: {}", bundle.display());

    match validate_bundle(&bundle) {
        Ok(report) => {
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
