//! Binary entry point for `funclen`.
//!
//! Delegates to the shared `entry_point::run_with_args()` so the binary and
//! library callers behave identically.

use anyhow::Result;

fn main() -> Result<()> {
    let code = funclen::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
