//! Purpose: Hold top-level CLI command dispatch for `podspec-gen`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: `render` and `write` produce output only after the whole request validates.
//! Invariants: Advisory version warnings never change the exit code.

use super::*;
use podspec_gen::api::{check_version, generate, validate, write_manifest};

pub(super) fn dispatch_command(
    command: Command,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "podspec-gen", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output(color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Render { request } => {
            let req = build_request(request)?;
            let manifest = generate(&req)?;
            write_stdout(&manifest.text)?;
            Ok(RunOutcome::ok())
        }
        Command::Write {
            request,
            out_dir,
            json,
        } => {
            let req = build_request(request)?;
            let out_dir = out_dir.unwrap_or_else(default_output_dir);
            let path = resolve_podspec_path(&req.pod_name, &out_dir)
                .map_err(map_pod_name_resolve_error)?;
            let manifest = generate(&req)?;
            write_manifest(&path, &manifest.text)?;
            if json {
                emit_json(
                    json!({
                        "written": path.display().to_string(),
                        "pod_name": req.pod_name,
                        "warnings": warnings_json(&manifest.warnings),
                    }),
                    color_mode,
                );
            }
            Ok(RunOutcome::ok())
        }
        Command::CheckPath { path, kind } => {
            validate(&path, kind.into())?;
            emit_json(
                json!({
                    "path": path,
                    "kind": PathKind::from(kind).label(),
                    "ok": true,
                }),
                color_mode,
            );
            Ok(RunOutcome::ok())
        }
        Command::CheckVersion { version, field } => {
            let mut value = json!({
                "field": field,
                "value": version,
                "ok": true,
            });
            if let Some(warning) = check_version(&version, &field) {
                value["ok"] = json!(false);
                value["warning"] = json!(warning.to_string());
            }
            emit_json(value, color_mode);
            Ok(RunOutcome::ok())
        }
    }
}
