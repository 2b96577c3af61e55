use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::transcript;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioList {
    pub scenarios: Vec<Scenario>,
}

/// A scripted session: the lines typed and the lines printed back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub input: Vec<String>,
    pub output: Vec<String>,
}

impl ScenarioList {
    pub fn open(content: impl AsRef<str>) -> Result<Self> {
        Ok(toml::from_str(content.as_ref())?)
    }
}

impl Scenario {
    pub fn check(&self) -> Result<()> {
        let got = transcript(self.input.as_slice());
        if got != self.output {
            bail!("we printed {got:?}, expected {:?}", self.output);
        }
        Ok(())
    }
}
