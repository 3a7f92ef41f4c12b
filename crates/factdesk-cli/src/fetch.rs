//! Reading draft text from files and stdin.

use std::fs;
use std::io::{self, Read};

use factdesk_domain::{DocumentFetcher, FetchError};

/// Fetches text from a local file, or from stdin for `-`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

impl DocumentFetcher for LocalFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let bytes = if location == "-" {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| network("stdin", e))?;
            buffer
        } else {
            fs::read(location).map_err(|e| network(location, e))?
        };

        String::from_utf8(bytes).map_err(|e| FetchError::Parse {
            location: location.to_string(),
            reason: format!("not valid UTF-8 text ({})", e.utf8_error()),
        })
    }
}

fn network(location: &str, err: io::Error) -> FetchError {
    FetchError::Network {
        location: location.to_string(),
        reason: err.to_string(),
    }
}
