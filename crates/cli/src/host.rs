//! Minimal host loop: feeds captured replies through the post-filter.

use anyhow::Context;
use geoblock_domain::{FilterVerdict, HostResult};
use geoblock_infrastructure::dns::ResponseParser;
use geoblock_infrastructure::GeoBlockFilter;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const STDIN_MARKER: &str = "-";
const RCODE_OFFSET: usize = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub replies: usize,
    pub refused: usize,
    pub errors: usize,
}

fn read_reply(input: &str) -> anyhow::Result<Vec<u8>> {
    if input == STDIN_MARKER {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read reply from stdin")?;
        return Ok(buf);
    }
    std::fs::read(input).with_context(|| format!("Failed to read reply {}", input))
}

/// Output file for the `index`-th input, prefixed so equal file names from
/// different directories stay apart.
fn output_path(dir: &Path, index: usize, input: &str) -> PathBuf {
    let name = if input == STDIN_MARKER {
        "stdin.bin".to_string()
    } else {
        Path::new(input)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "reply.bin".to_string())
    };
    dir.join(format!("{}-{}", index, name))
}

fn rcode_status(wire: &[u8]) -> &'static str {
    wire.get(RCODE_OFFSET)
        .map_or("UNKNOWN", |byte| ResponseParser::rcode_to_status(*byte))
}

/// Run every input through the filter, optionally writing the resulting bytes
/// to `output_dir` as `<index>-<file name>`.
pub fn run(
    filter: &GeoBlockFilter,
    inputs: &[String],
    output_dir: Option<&Path>,
) -> anyhow::Result<RunSummary> {
    if inputs.iter().filter(|input| input.as_str() == STDIN_MARKER).count() > 1 {
        anyhow::bail!("stdin (\"-\") can only be given once");
    }

    let mut summary = RunSummary::default();

    for (index, input) in inputs.iter().enumerate() {
        let mut wire = read_reply(input)?;
        let verdict = filter.post_filter(&mut wire);
        let rcode = rcode_status(&wire);
        summary.replies += 1;

        match verdict.host_result() {
            HostResult::Ok if verdict == FilterVerdict::Refuse => {
                summary.refused += 1;
                info!(reply = %input, verdict = %verdict, rcode, "Reply refused");
            }
            HostResult::Ok => info!(reply = %input, verdict = %verdict, rcode, "Reply passed"),
            HostResult::Error => {
                summary.errors += 1;
                warn!(reply = %input, verdict = %verdict, "Reply is not a valid DNS message");
            }
            HostResult::Fatal => {
                summary.errors += 1;
                error!(reply = %input, verdict = %verdict, "Reply could not be inspected");
            }
        }

        if let Some(dir) = output_dir {
            let path = output_path(dir, index, input);
            std::fs::write(&path, &wire)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    Ok(summary)
}
