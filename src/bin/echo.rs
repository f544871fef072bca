// Lambda entry point for the echo function: decodes the body and path
// parameters and sends them straight back.

use api_base::core::config::AppConfig;
use api_base::{Api, Bound, Request, Response, Unbound};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EchoBody {
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EchoPath {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Serialize)]
struct Echo<'a> {
    id: Option<&'a str>,
    message: &'a str,
}

fn echo(req: Request<'_, Bound<EchoBody>, Unbound, Bound<EchoPath>>) -> Response {
    let reply = Echo {
        id: req.path_parameters().id.as_deref(),
        message: &req.body().message,
    };

    match Response::json(200, &reply) {
        Ok(response) => response.with_header("X-Echo", "1"),
        Err(e) => {
            error!("Failed to encode echo reply: {}", e);
            Response::new(500)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    api_base::setup_logging(&config);

    let handler = Api::new()
        .with_body::<EchoBody>()
        .with_path_parameters::<EchoPath>()
        .run(echo);

    api_base::run(handler)
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime error: {e}"))
}
