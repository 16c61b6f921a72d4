//! Purpose: `podspec-gen` CLI entry point.
//! Role: Binary crate root; parses args, builds a request, runs commands.
//! Invariants: Podspec text goes to stdout or a file; diagnostics go to stderr.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: All podspec semantics live in the library; this file only wires flags.
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{
    Args, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint,
    error::ErrorKind as ClapErrorKind,
};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod json_style;
mod output_paths;

use output_paths::{PodNameResolveError, default_output_dir, resolve_podspec_path};
use podspec_gen::api::{
    Error, ErrorKind, ManifestRequest, PathKind, Platform, VersionWarning, load_request,
    to_exit_code,
};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome { exit_code });
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint(clap_error_hint(&err)),
                    ColorMode::Auto,
                ));
            }
        },
    };

    init_tracing();
    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode).map_err(|err| (err, color_mode))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "podspec-gen",
    version,
    about = "Generate CocoaPods podspecs for prebuilt static libraries",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Paths inside the podspec are checked before anything is written:
  - library, resource, and header paths must be relative to the podspec directory
  - the toolchain home must be absolute
  - no '//', no trailing '/' or '*', no leading '../'
"#,
    after_help = r#"EXAMPLES
  $ podspec-gen render --pod-name MyApp --lib-name MyApp-core \
      --lib-dir build/lib/iosRelease --resources build/res --headers build/objc \
      --toolchain-home /opt/toolchain --min-version 9.0 --pod-version 1.0.0
  $ podspec-gen write --request podspec.json --out-dir build/pods
  $ podspec-gen check-path build/res/ --kind relative

LEARN MORE
  $ podspec-gen <command> --help"#,
    arg_required_else_help = true,
    disable_help_subcommand = false
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and pretty JSON output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlatformCli {
    Ios,
    Osx,
}

impl From<PlatformCli> for Platform {
    fn from(value: PlatformCli) -> Self {
        match value {
            PlatformCli::Ios => Platform::Ios,
            PlatformCli::Osx => Platform::Osx,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PathKindCli {
    Relative,
    Absolute,
}

impl From<PathKindCli> for PathKind {
    fn from(value: PathKindCli) -> Self {
        match value {
            PathKindCli::Relative => PathKind::RelativeRequired,
            PathKindCli::Absolute => PathKind::AbsoluteRequired,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Print a podspec to stdout",
        long_about = r#"Validate the request and print the podspec to stdout.

Nothing is printed if any path fails validation."#,
        after_help = r#"EXAMPLES
  $ podspec-gen render --request podspec.json
  $ podspec-gen render --request podspec.json --pod-version 2.0.0 > MyApp.podspec"#
    )]
    Render {
        #[command(flatten)]
        request: RequestArgs,
    },
    #[command(
        about = "Write <pod-name>.podspec into a directory",
        long_about = r#"Validate the request and write <out-dir>/<pod-name>.podspec.

The output directory is created if missing and an existing podspec is replaced."#,
        after_help = r#"EXAMPLES
  $ podspec-gen write --request podspec.json --out-dir build/pods
  $ podspec-gen write --request podspec.json --out-dir build/pods --json

NOTES
  - Paths in the request are relative to --out-dir, where the podspec lands"#
    )]
    Write {
        #[command(flatten)]
        request: RequestArgs,
        #[arg(
            long = "out-dir",
            help = "Directory to write the podspec into (default: .)",
            value_hint = ValueHint::DirPath
        )]
        out_dir: Option<PathBuf>,
        #[arg(long, help = "Emit a JSON receipt on stdout")]
        json: bool,
    },
    #[command(
        arg_required_else_help = true,
        about = "Check a single path against the podspec path rules",
        after_help = r#"EXAMPLES
  $ podspec-gen check-path build/res --kind relative
  $ podspec-gen check-path /opt/toolchain --kind absolute"#
    )]
    CheckPath {
        #[arg(help = "Path to check")]
        path: String,
        #[arg(long, value_enum, help = "Required kind: relative|absolute")]
        kind: PathKindCli,
    },
    #[command(
        arg_required_else_help = true,
        about = "Check that a version looks like a dotted numeral",
        long_about = r#"Check that a version looks like a dotted numeral (e.g. 8.0).

Advisory only: always exits 0 and reports the result as JSON."#
    )]
    CheckVersion {
        #[arg(help = "Version string to check")]
        version: String,
        #[arg(long, default_value = "version", help = "Field label used in the warning")]
        field: String,
    },
    #[command(
        about = "Print version info as JSON",
        long_about = r#"Emit version info as JSON (stable, machine-readable)."#
    )]
    Version,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        after_help = r#"EXAMPLES
  $ podspec-gen completion bash > ~/.local/share/bash-completion/completions/podspec-gen
  $ podspec-gen completion zsh > ~/.zfunc/_podspec-gen"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

/// Request fields; flags override values loaded from `--request`.
#[derive(Args, Debug, Default)]
struct RequestArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "JSON request file (snake_case fields)",
        value_hint = ValueHint::FilePath
    )]
    request: Option<PathBuf>,
    #[arg(long = "pod-name", help = "Pod name, also the podspec file name")]
    pod_name: Option<String>,
    #[arg(long = "headers", help = "Public headers dir, relative to the podspec")]
    public_headers_path: Option<String>,
    #[arg(long = "resources", help = "Resources dir, relative to the podspec")]
    resource_path: Option<String>,
    #[arg(long = "lib-dir", help = "Static library dir, relative to the podspec")]
    library_dir_path: Option<String>,
    #[arg(long = "lib-name", help = "Library name without 'lib' prefix or '.a' suffix")]
    library_name: Option<String>,
    #[arg(long = "min-version", help = "Minimum platform version, e.g. 8.0")]
    min_platform_version: Option<String>,
    #[arg(
        long = "toolchain-home",
        help = "Absolute toolchain installation path",
        value_hint = ValueHint::DirPath
    )]
    toolchain_home: Option<String>,
    #[arg(long, help = "Podspec author")]
    author: Option<String>,
    #[arg(long, help = "Podspec license")]
    license: Option<String>,
    #[arg(long = "homepage", help = "Podspec homepage URL")]
    homepage_url: Option<String>,
    #[arg(long = "source", help = "Git URL for the podspec source")]
    source_url: Option<String>,
    #[arg(long = "pod-version", help = "Pod version, also used as the git tag")]
    pod_version: Option<String>,
    #[arg(long, value_enum, help = "Target platform: ios|osx")]
    platform: Option<PlatformCli>,
}

fn build_request(args: RequestArgs) -> Result<ManifestRequest, Error> {
    let mut req = match &args.request {
        Some(path) => load_request(path)?,
        None => ManifestRequest::default(),
    };
    override_field(&mut req.pod_name, args.pod_name);
    override_field(&mut req.public_headers_path, args.public_headers_path);
    override_field(&mut req.resource_path, args.resource_path);
    override_field(&mut req.library_dir_path, args.library_dir_path);
    override_field(&mut req.library_name, args.library_name);
    override_field(&mut req.min_platform_version, args.min_platform_version);
    override_field(&mut req.toolchain_home, args.toolchain_home);
    override_field(&mut req.author, args.author);
    override_field(&mut req.license, args.license);
    override_field(&mut req.homepage_url, args.homepage_url);
    override_field(&mut req.source_url, args.source_url);
    override_field(&mut req.version, args.pod_version);
    if let Some(platform) = args.platform {
        req.platform = platform.into();
    }
    Ok(req)
}

fn override_field(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn map_pod_name_resolve_error(err: PodNameResolveError) -> Error {
    let message = match err {
        PodNameResolveError::Empty => "pod name is required to name the podspec file",
        PodNameResolveError::ContainsPathSeparator => "pod name must not contain path separators",
    };
    Error::new(ErrorKind::Usage)
        .with_message(message)
        .with_hint("Pass --pod-name (or \"pod_name\" in --request) as a bare name like MyApp.")
}

fn warnings_json(warnings: &[VersionWarning]) -> Value {
    Value::Array(
        warnings
            .iter()
            .map(|warning| {
                json!({
                    "field": warning.field,
                    "value": warning.value,
                    "message": warning.to_string(),
                })
            })
            .collect(),
    )
}

fn write_stdout(text: &str) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write to stdout")
                .with_source(err)
        })
}

fn emit_version_output(color_mode: ColorMode) {
    if io::stdout().is_terminal() {
        println!("podspec-gen {}", env!("CARGO_PKG_VERSION"));
    } else {
        emit_json(
            json!({
                "name": "podspec-gen",
                "version": env!("CARGO_PKG_VERSION"),
            }),
            color_mode,
        );
    }
}

fn emit_json(value: Value, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    let use_color = color_mode.use_color(is_tty);
    let json = if is_tty || use_color {
        json_style::render_json(&value, use_color)
    } else {
        serde_json::to_string(&value)
            .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
    };
    println!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::InvalidPath => "invalid path".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(rule) = err.rule() {
        inner.insert("rule".to_string(), json!(rule.code()));
    }
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(rule) = err.rule() {
        lines.push(format!(
            "{} {}",
            colorize_label("rule:", use_color, AnsiColor::Yellow),
            rule.code()
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn clap_error_hint(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let usage = rendered
        .lines()
        .find_map(|line| line.trim().strip_prefix("Usage: "))
        .map(str::trim);

    let Some(usage) = usage else {
        return "Try `podspec-gen --help`.".to_string();
    };

    let tokens: Vec<&str> = usage.split_whitespace().collect();
    let Some(pos) = tokens.iter().position(|t| *t == "podspec-gen") else {
        return "Try `podspec-gen --help`.".to_string();
    };

    let mut parts = Vec::new();
    for token in tokens.iter().skip(pos + 1) {
        if token.starts_with('-') || token.starts_with('<') || token.starts_with('[') {
            break;
        }
        parts.push(*token);
    }

    if parts.is_empty() {
        return "Try `podspec-gen --help`.".to_string();
    }
    format!("Try `podspec-gen {} --help`.", parts.join(" "))
}
