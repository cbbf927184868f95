use std::fs::File;
use std::io::{self, Read};

use bintext::error::Result;
use bintext::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            log::debug!("read {} bytes from stdin", buf.len());
            Ok(buf)
        }
        InputSource::File(path) => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            log::debug!("read {} bytes from {}", buf.len(), path.display());
            Ok(buf)
        }
        InputSource::Literal(data) => Ok(data.clone()),
    }
}

/// Reads encoded text, dropping the line terminator that `echo` and most
/// editors leave behind.
pub fn read_text(source: &InputSource) -> Result<String> {
    let data = read_input(source)?;
    let text = String::from_utf8_lossy(&data);
    Ok(strip_line_ending(&text).to_string())
}

fn strip_line_ending(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}
