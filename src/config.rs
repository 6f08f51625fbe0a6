use std::path::Path;

use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use crate::pool::{CaseMode, Kind};
use crate::sampler::{IndexSource, StringSampler};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl std::str::FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(Error::Config(format!("Unknown output format {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kind: Kind,
    #[serde(default = "default_length")]
    pub length: i64,
    #[serde(default)]
    pub case: CaseMode,
    #[serde(default = "default_count")]
    pub count: usize,
    pub seed: Option<u64>,
    #[serde(default)]
    pub format: Format,
}

fn default_length() -> i64 {
    16
}

fn default_count() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            length: default_length(),
            case: CaseMode::default(),
            count: default_count(),
            seed: None,
            format: Format::default(),
        }
    }
}

impl Config {
    /// Loads a config file, picking the decoder from the extension. Anything
    /// that is not `.json` or `.toml` is read as YAML.
    pub fn load(path: &str) -> Result<Self, Error> {
        let cfg = std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        log::debug!("Parsing config {} as {}", path, if ext.is_empty() { "yaml" } else { ext });
        match ext {
            "json" => Self::from_json(&cfg).map_err(|e| Error::Config(e.to_string())),
            "toml" => Self::from_toml(&cfg).map_err(|e| Error::Config(e.to_string())),
            _ => Self::from_yaml(&cfg).map_err(|e| Error::Config(e.to_string())),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Command line flags win over file values.
    pub fn read_flags(&mut self, matches: &ArgMatches) -> Result<(), Error> {
        if let Some(kind) = matches.get_one::<String>("kind") {
            self.kind = kind.parse()?;
        }
        if let Some(length) = matches.get_one::<i64>("length") {
            self.length = *length;
        }
        if let Some(case) = matches.get_one::<String>("case") {
            self.case = case.parse()?;
        }
        if let Some(count) = matches.get_one::<usize>("count") {
            self.count = *count;
        }
        if let Some(seed) = matches.get_one::<u64>("seed") {
            self.seed = Some(*seed);
        }
        if let Some(format) = matches.get_one::<String>("format") {
            self.format = format.parse()?;
        }
        Ok(())
    }

    /// Produces `count` strings according to this config.
    pub fn generate(&self) -> Vec<String> {
        match self.seed {
            Some(seed) => self.generate_with(&mut StringSampler::seeded(seed)),
            None => self.generate_with(&mut StringSampler::new()),
        }
    }

    /// Formats generated strings for output: one per line, or a JSON/YAML list.
    pub fn render(&self, strings: &[String]) -> Result<String, Error> {
        match self.format {
            Format::Text => Ok(strings.join("\n")),
            Format::Json => {
                serde_json::to_string_pretty(strings).map_err(|e| Error::Output(e.to_string()))
            }
            Format::Yaml => {
                serde_yaml::to_string(strings).map_err(|e| Error::Output(e.to_string()))
            }
        }
    }

    pub fn generate_with<S: IndexSource>(&self, sampler: &mut StringSampler<S>) -> Vec<String> {
        (0..self.count)
            .map(|_| match self.kind {
                Kind::Alpha => sampler.random_alpha(self.length, self.case),
                Kind::Numeric => sampler.random_numeric_string(self.length),
                Kind::AlphaNumeric => sampler.random_alpha_numeric(self.length, self.case),
            })
            .collect()
    }
}
