//! Implementation of the `licsync header-config` command.
//!
//! Prints the header file and exclude globs for the external license header
//! tool, or checks individual paths against the excludes.

use crate::cli::HeaderConfigArgs;
use crate::config::HeaderSettings;
use crate::context::ProjectContext;
use crate::error::{LicsyncError, Result};

/// Execute the `licsync header-config` command.
pub fn cmd_header_config(ctx: &ProjectContext, args: HeaderConfigArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = HeaderSettings::resolve(&config, ctx)?;

    print!("{}", render_header_config(&settings, &args)?);
    Ok(())
}

/// Render header settings as YAML or JSON.
///
/// With `--check`, renders one `excluded`/`included` verdict per path instead.
pub fn render_header_config(settings: &HeaderSettings, args: &HeaderConfigArgs) -> Result<String> {
    if !args.check.is_empty() {
        let mut out = String::new();
        for path in &args.check {
            let verdict = if settings.is_excluded(path) {
                "excluded"
            } else {
                "included"
            };
            out.push_str(&format!("{}  {}\n", verdict, path.display()));
        }
        return Ok(out);
    }

    if args.json {
        let mut json = serde_json::to_string_pretty(settings).map_err(|e| {
            LicsyncError::IoError(format!("failed to serialize header settings: {}", e))
        })?;
        json.push('\n');
        return Ok(json);
    }

    serde_yaml::to_string(settings).map_err(|e| {
        LicsyncError::IoError(format!("failed to serialize header settings: {}", e))
    })
}
