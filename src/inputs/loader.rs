//! Load growth scenarios from CSV

use super::GrowthInputs;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "MonthlyVisitors")]
    monthly_visitors: f64,
    #[serde(rename = "SignupRate")]
    signup_rate: f64,
    #[serde(rename = "ActivationRate")]
    activation_rate: f64,
    #[serde(rename = "RetentionRate")]
    retention_rate: f64,
    #[serde(rename = "MRR")]
    mrr: f64,
    #[serde(rename = "CAC")]
    cac: f64,
}

/// A named assumption set loaded from a scenario file
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub inputs: GrowthInputs,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario, Box<dyn Error>> {
        let inputs = GrowthInputs::from_assumptions(
            self.monthly_visitors,
            self.signup_rate,
            self.activation_rate,
            self.retention_rate,
            self.mrr,
            self.cac,
        );

        if let Err(e) = inputs.validate() {
            return Err(format!("Scenario '{}': {}", self.scenario, e).into());
        }

        Ok(Scenario {
            name: self.scenario,
            inputs,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
