//! The run report handed to the rendering collaborator.

use std::io::Write;

use serde::Serialize;

use affiliation_core::AffiliationNetwork;

use crate::error::EngineError;

/// Seed plus nodes and history of one run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Seed the run was generated from.
    pub seed: u64,
    /// People, foci, and the snapshot history.
    #[serde(flatten)]
    pub network: &'a AffiliationNetwork,
}

impl RunReport<'_> {
    /// Serialize as JSON to `out`, followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W, pretty: bool) -> Result<(), EngineError> {
        if pretty {
            serde_json::to_writer_pretty(&mut out, self)?;
        } else {
            serde_json::to_writer(&mut out, self)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
