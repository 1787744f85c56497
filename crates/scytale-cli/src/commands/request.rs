use scytale_core::RequestPayload;

use crate::app::AppContext;
use crate::cli::RequestArgs;
use crate::helpers::read_request_body;
use crate::output::response_json;

/// Serve one JSON request; always answers in JSON.
pub fn handle_request(ctx: &AppContext, args: &RequestArgs) -> anyhow::Result<()> {
    let kind = ctx.config()?.method(args.method.as_deref())?;
    let registry = ctx.registry()?;

    let body = read_request_body(args.input.as_deref())?;
    let payload = RequestPayload::from_json(&body)?;
    tracing::debug!(method = %kind, direction = %payload.encrypt_flag, "request decoded");

    let response = registry.handle(&payload.into_request(kind))?;
    println!("{}", serde_json::to_string(&response_json(&response))?);
    Ok(())
}
