//! CLI tool for checking and normalizing Baldr presentation files.

use anyhow::{Context, Result};
use baldr_core::{Assembler, AssemblerOptions, MasterRegistry, OutlineFormatter, Presentation};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Output format of a parsed presentation.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One line per slide
    Outline,
    /// The full document model as JSON
    Json,
    /// The normalized presentation source
    Yaml,
}

impl Format {
    fn extension(&self) -> &'static str {
        match self {
            Self::Outline => "txt",
            Self::Json => "json",
            Self::Yaml => "baldr.yml",
        }
    }
}

/// Parse Baldr presentation files (*.baldr.yml) and print their slides.
#[derive(Parser, Debug)]
#[command(name = "baldr-parse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input presentation file(s)
    #[arg(required_unless_present = "masters")]
    input: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "outline")]
    format: Format,

    /// Output directory (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the steps below each slide in the outline
    #[arg(short, long)]
    steps: bool,

    /// Drop unknown fields with a warning instead of failing
    #[arg(long)]
    lenient: bool,

    /// List the registered master slides and exit
    #[arg(long)]
    masters: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let registry = MasterRegistry::with_builtin_masters();

    if args.masters {
        print!("{}", list_masters(&registry));
        return ExitCode::SUCCESS;
    }

    let assembler = Assembler::new(&registry).with_options(AssemblerOptions {
        strict_fields: !args.lenient,
    });
    let formatter = OutlineFormatter::new(&registry).with_steps(args.steps);

    let mut failed = 0;
    for input_path in &args.input {
        log::debug!("Processing: {}", input_path.display());

        let result = process_file(input_path, &args, &assembler, &formatter).and_then(|output| {
            match &args.output {
                Some(dir) => {
                    let output_path = get_output_path(input_path, dir, args.format)?;
                    write_output(&output_path, &output)?;
                    log::info!("Written to: {}", output_path.display());
                    Ok(())
                }
                None => {
                    print!("{}", output);
                    Ok(())
                }
            }
        });

        if let Err(e) = result {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Parse a single presentation file and render it in the requested format.
fn process_file(
    input_path: &Path,
    args: &Args,
    assembler: &Assembler,
    formatter: &OutlineFormatter,
) -> Result<String> {
    let source = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let presentation = assembler.assemble(&source)?;

    log::debug!(
        "Found {} slides with {} steps",
        presentation.slides.len(),
        presentation.step_count()
    );

    render(&presentation, args.format, formatter)
}

fn render(presentation: &Presentation, format: Format, formatter: &OutlineFormatter) -> Result<String> {
    let output = match format {
        Format::Outline => formatter.format_with_newline(presentation),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(presentation)
                .context("Failed to serialize the presentation to JSON")?;
            json.push('\n');
            json
        }
        Format::Yaml => presentation.to_yaml_string()?,
    };
    Ok(output)
}

/// One line per registered master: symbol, name and display name.
fn list_masters(registry: &MasterRegistry) -> String {
    registry
        .list()
        .map(|master| {
            format!(
                "{}\t{}: {}\n",
                master.icon().unicode_symbol.unwrap_or(" "),
                master.name(),
                master.display_name()
            )
        })
        .collect()
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: &Path, format: Format) -> Result<PathBuf> {
    let file_name = input_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let stem = file_name
        .strip_suffix(".baldr.yml")
        .or_else(|| file_name.rsplit_once('.').map(|(stem, _)| stem))
        .unwrap_or(file_name);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_strips_double_extension() {
        let dir = std::env::temp_dir().join("baldr-parse-test");
        let path = get_output_path(Path::new("Mozart/Praesentation.baldr.yml"), &dir, Format::Json).unwrap();
        assert_eq!(path, dir.join("Praesentation.json"));
    }

    #[test]
    fn test_list_masters() {
        let registry = MasterRegistry::with_builtin_masters();
        let listing = list_masters(&registry);
        assert_eq!(listing.lines().count(), registry.len());
        assert!(listing.contains("youtube: YouTube"));
    }

    #[test]
    fn test_render_yaml_and_json() {
        let registry = MasterRegistry::with_builtin_masters();
        let presentation = Assembler::new(&registry)
            .assemble("slides:\n- youtube: xtKavZG1KiM\n")
            .unwrap();
        let formatter = OutlineFormatter::new(&registry);

        let yaml = render(&presentation, Format::Yaml, &formatter).unwrap();
        assert!(yaml.contains("youtube:"));

        let json = render(&presentation, Format::Json, &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["slides"][0]["fields"]["id"], "xtKavZG1KiM");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["baldr-parse", "--format", "json", "--lenient", "a.baldr.yml"]).unwrap();
        assert_eq!(args.format, Format::Json);
        assert!(args.lenient);

        let args = Args::try_parse_from(["baldr-parse", "--masters"]).unwrap();
        assert!(args.input.is_empty());
        assert!(Args::try_parse_from(["baldr-parse"]).is_err());
    }
}
