use anyhow::Result;
use stack_eleven::api;

/// Print the OpenAPI document for the REST surface to stdout.
fn main() -> Result<()> {
    println!("{}", api::openapi().to_pretty_json()?);

    Ok(())
}
