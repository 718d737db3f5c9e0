use crate::core::models::chain::AtomChain;
use phf::{Map, phf_map};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Chain identifier '{0}' is not a single printable ASCII character")]
    InvalidChainId(char),
}

#[rustfmt::skip]
static RESIDUE_NAMES: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'R' => "ARG", 'N' => "ASN", 'D' => "ASP", 'C' => "CYS",
    'Q' => "GLN", 'E' => "GLU", 'G' => "GLY", 'H' => "HIS", 'I' => "ILE",
    'L' => "LEU", 'K' => "LYS", 'M' => "MET", 'F' => "PHE", 'P' => "PRO",
    'S' => "SER", 'T' => "THR", 'W' => "TRP", 'Y' => "TYR", 'V' => "VAL",
};

const UNKNOWN_RESIDUE: &str = "UNK";

/// Three-letter residue name for a one-letter amino acid code, `UNK` when unknown.
pub fn residue_name(code: char) -> &'static str {
    RESIDUE_NAMES
        .get(&code.to_ascii_uppercase())
        .copied()
        .unwrap_or(UNKNOWN_RESIDUE)
}

/// Writes a C-alpha trace as PDB `ATOM` records followed by `TER` and `END`.
///
/// Atom `i` is residue `i + 1`. Residue names come from `sequence` (one-letter codes);
/// positions beyond the sequence, or all positions without one, are written as `UNK`.
pub fn write_chain(
    chain: &AtomChain,
    sequence: Option<&str>,
    chain_id: char,
    writer: &mut impl Write,
) -> Result<(), PdbError> {
    if !chain_id.is_ascii_graphic() {
        return Err(PdbError::InvalidChainId(chain_id));
    }

    let mut codes = sequence.into_iter().flat_map(str::chars);
    let mut last = None;

    for (i, atom) in chain.atoms().iter().enumerate() {
        let serial = i + 1;
        let res_name = codes.next().map_or(UNKNOWN_RESIDUE, residue_name);
        writeln!(
            writer,
            "ATOM  {:>5} {:<4}{:1}{:>3} {:1}{:>4}{:1}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
            serial, " CA", ' ', res_name, chain_id, serial, ' ', atom.x, atom.y, atom.z, 1.0, 0.0, "C"
        )?;
        last = Some((serial, res_name));
    }

    if let Some((serial, res_name)) = last {
        writeln!(
            writer,
            "TER   {:>5}      {:>3} {:1}{:>4}",
            serial + 1,
            res_name,
            chain_id,
            serial
        )?;
    }
    writeln!(writer, "END")?;
    Ok(())
}
