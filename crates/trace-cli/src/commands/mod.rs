pub mod decode;
pub mod select;
pub mod stats;

use crate::config::OutputConfig;
use crate::error::Result;
use carbontrace::core::io::pdb;
use carbontrace::core::models::chain::AtomChain;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Writes `chain` as PDB records followed by the encoded span on its own line.
pub(crate) fn write_chain_report(
    chain: &AtomChain,
    r1n: f64,
    output: &OutputConfig,
    writer: &mut impl Write,
) -> Result<()> {
    pdb::write_chain(chain, output.sequence.as_deref(), output.chain_id, writer)?;
    writeln!(writer, "{r1n:.2}")?;
    Ok(())
}

/// Sends the report to the configured file, or to standard output.
pub(crate) fn emit_chain(chain: &AtomChain, r1n: f64, output: &OutputConfig) -> Result<()> {
    match &output.path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_chain_report(chain, r1n, output, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} atoms to {:?}", chain.len(), path);
            println!("✓ Chain of {} atoms written to: {}", chain.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_chain_report(chain, r1n, output, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
