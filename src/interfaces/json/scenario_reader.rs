use crate::domain::confirmation::ConfirmationResult;
use crate::domain::request::ConfirmationRequest;
use crate::error::{BridgeError, Result};
use crate::infrastructure::in_memory::{FetchScript, HostBehavior};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};

/// One scripted launch: the request plus how each collaborator behaves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub request: ConfirmationRequest,
    #[serde(default)]
    pub host: HostBehavior,
    pub confirmation: ConfirmationResult,
    #[serde(default)]
    pub fetch: Option<FetchScript>,
}

/// Reads scenarios from a JSON lines source.
///
/// Blank lines are skipped. A malformed line yields an error for that line
/// only; reading continues with the next one.
pub struct ScenarioReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ScenarioReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    pub fn scenarios(self) -> impl Iterator<Item = Result<Scenario>> {
        self.reader
            .lines()
            .filter(|line| !matches!(line, Ok(text) if text.trim().is_empty()))
            .map(|line| {
                let line = line?;
                serde_json::from_str(&line).map_err(BridgeError::from)
            })
    }
}
