//! AWS Lambda handler exposing the projection engine as a JSON endpoint
//!
//! Accepts growth assumptions via JSON POST and returns the resolved input
//! record, summary metrics, and monthly projection rows. Invalid inputs are
//! rejected with a 400 before any projection runs.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use growth_system::{
    projection::{
        GrowthSummary, MonthlyRow, ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_MONTHS,
    },
    GrowthInputs,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input assumptions for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub monthly_visitors: f64,
    pub signup_rate: f64,
    pub activation_rate: f64,
    pub retention_rate: f64,
    pub mrr: f64,
    pub cac: f64,

    /// Number of months to project (default: 18)
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    /// The fully resolved input record (derived fields included)
    pub inputs: GrowthInputs,
    pub horizon_months: u32,
    pub summary: GrowthSummary,
    pub monthly: Vec<MonthlyRow>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    if request.horizon_months < 12 {
        return Ok(error_response(
            400,
            "horizon_months must be at least 12 for the revenue forecasts",
        ));
    }

    // Resolve derived fields, then validate before the engine runs
    let inputs = GrowthInputs::from_assumptions(
        request.monthly_visitors,
        request.signup_rate,
        request.activation_rate,
        request.retention_rate,
        request.mrr,
        request.cac,
    );

    if let Err(e) = inputs.validate() {
        return Ok(error_response(400, &e.to_string()));
    }

    let engine = ProjectionEngine::new(ProjectionConfig {
        horizon_months: request.horizon_months,
    });
    let result = engine.project(&inputs);
    let summary = result.summary(&inputs);
    let monthly = result.rows();

    let response = ProjectionResponse {
        inputs,
        horizon_months: request.horizon_months,
        summary,
        monthly,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
