use std::fs::File;
use std::io::{self, Write};

use is_terminal::IsTerminal;

use bintext::error::Result;
use bintext::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
}

pub fn write_output(data: &[u8], config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(data)?;
            log::debug!("wrote {} bytes to {}", data.len(), path.display());
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if stdout.is_terminal() && !config.force && !is_safe_for_terminal(data) {
                eprintln!(
                    "Binary output ({} bytes). Showing hex preview (use --force to output raw or --out @file):\n",
                    data.len()
                );
                handle.write_all(hex_preview(data).as_bytes())?;
            } else {
                handle.write_all(data)?;
            }
            Ok(())
        }
    }
}

fn is_safe_for_terminal(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok()
}

const BYTES_PER_LINE: usize = 16;
const MAX_LINES: usize = 32;

/// Offset, hex columns and printable ASCII, one line per 16 bytes.
fn hex_preview(data: &[u8]) -> String {
    let mut out = String::new();

    for (line_idx, chunk) in data.chunks(BYTES_PER_LINE).take(MAX_LINES).enumerate() {
        out.push_str(&format!("{:08x}  ", line_idx * BYTES_PER_LINE));

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => out.push_str(&format!("{:02x} ", byte)),
                None => out.push_str("   "),
            }
            if i == 7 {
                out.push(' ');
            }
        }

        out.push_str(" |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    let shown = BYTES_PER_LINE * MAX_LINES;
    if data.len() > shown {
        out.push_str(&format!("... ({} more bytes)\n", data.len() - shown));
    }
    out
}
