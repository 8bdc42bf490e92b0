use std::{env, fs};

use anyhow::{Context, Result, bail};
use log::info;
use serde_json::Value;

use linear_regression::json;

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: linear-regression <fixture.json>");
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let fixture: Value = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    info!("loaded fixture {path}");

    let model = match &fixture {
        Value::Object(fields) => {
            let Some(x) = fields.get("x") else {
                bail!("fixture {path} has no \"x\" field");
            };
            json::lr_value(x, fields.get("y"), fields.get("options"))?
        }
        Value::Array(_) => json::lr_value(&fixture, None, None)?,
        other => bail!("fixture must be a record or a zipped array, got {other}"),
    };
    info!(n = model.len(); "fitted model");

    print!("{model}");
    Ok(())
}
