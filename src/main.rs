//! etabs - Elastic tabstops re-aligner

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Write};
use std::path::Path;

use anyhow::Context;
use etabs::process::reflow;
use etabs::{find_directive, parse_args, CliArgs, Config, Outcome, Result};

/// Default maximum input size in bytes (100 MB)
/// Larger inputs are refused to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    let args = parse_args();

    // Exactly one input: a filename or `-` for stdin/stdout
    if args.inputs.len() != 1 {
        print_usage();
        return Ok(());
    }

    let input = args.inputs[0].clone();
    if input.as_os_str() == "-" {
        process_stdin(&args)
    } else {
        process_file(&input, &args)
    }
}

/// Build configuration from CLI args and optional config file
///
/// If `for_path` is provided and no explicit config file is specified,
/// uses auto-discovery to find config files in parent directories.
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else if let Some(path) = for_path {
        // Auto-discover config files from parent directories
        if args.debug {
            let discovered = Config::discover_config_files(path);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", path.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", path.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(path)
    } else {
        // No path provided, use current directory for discovery
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // Override with CLI arguments
    if let Some(gap) = args.gap {
        config.gap = gap;
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   gap: {}", config.gap);
    }

    Ok(config)
}

/// Apply directive overrides from the input contents to a configuration
fn apply_directive_overrides(config: &mut Config, contents: &[u8], debug: bool, source_name: &str) {
    let cursor = Cursor::new(contents);
    if let Some(overrides) = find_directive(&mut BufReader::new(cursor)) {
        if debug {
            eprintln!("[DEBUG] Found directive in {source_name}");
        }
        if let Some(gap) = overrides.gap {
            if debug {
                eprintln!("[DEBUG]   Directive override: gap = {gap}");
            }
            config.gap = gap;
        }
    }
}

/// Validate the fully merged configuration (file, CLI, directive)
fn check_config(config: &Config) -> Result<()> {
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }
    Ok(())
}

/// Reflow a single file, replacing it atomically when spacing changed
fn process_file(path: &Path, args: &CliArgs) -> Result<()> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "{} is too large ({} MB exceeds limit of {} MB)",
            path.display(),
            file_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    // Read input file into memory
    let mut file_contents = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut file_contents))
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut config = build_config(args, Some(path))?;
    apply_directive_overrides(
        &mut config,
        &file_contents,
        args.debug,
        &path.display().to_string(),
    );
    check_config(&config)?;

    let reader = BufReader::new(Cursor::new(&file_contents));
    let mut output = Vec::new();
    match reflow(reader, &mut output, &config)? {
        Outcome::Unchanged => {
            // Leave the destination untouched
            if args.debug {
                eprintln!("[DEBUG] {}: no changes", path.display());
            }
        }
        Outcome::Reflowed => {
            if args.stdout {
                io::stdout()
                    .write_all(&output)
                    .context("failed to write output")?;
            } else {
                replace_file(path, &output)?;
                if !args.silent {
                    eprintln!("Reflowed {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Write contents to a temporary file in the destination's directory and
/// atomically rename it over the destination. The destination is never
/// touched on error.
fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix("etab")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents).context("failed to write output")?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin(args: &CliArgs) -> Result<()> {
    // Read all input from stdin
    let mut stdin_contents = Vec::new();
    io::stdin()
        .read_to_end(&mut stdin_contents)
        .context("failed to read input")?;

    let stdin_size = stdin_contents.len() as u64;
    if stdin_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "stdin input too large ({} MB exceeds limit of {} MB)",
            stdin_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    let mut config = build_config(args, None)?;
    apply_directive_overrides(&mut config, &stdin_contents, args.debug, "stdin");
    check_config(&config)?;

    let reader = BufReader::new(Cursor::new(&stdin_contents));
    let mut output = Vec::new();
    match reflow(reader, &mut output, &config)? {
        Outcome::Reflowed => io::stdout()
            .write_all(&output)
            .context("failed to write output")?,
        // A filter always produces its stream: echo the input unchanged
        Outcome::Unchanged => io::stdout()
            .write_all(&stdin_contents)
            .context("failed to write output")?,
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: etabs [FILE]");
    eprintln!("    or etabs - to use stdin/stdout");
}
