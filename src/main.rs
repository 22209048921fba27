//! MSS Toolkit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mss_toolkit::{
    audio::convert_to_wav,
    cli::{Args, Command},
    config::conf_edit,
    error::{exit_codes, Error, Result},
    ingest::{save_uploaded_file, UploadSource},
    net::random_port,
    output::{
        print_error, print_info, print_success, print_warning, print_workspace_summary,
    },
    workspace::{clear_old_output, clear_temp_folder, move_old_files, Workspace},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::MissingConfig(_) | Error::Yaml(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::FFmpeg(_) | Error::FFmpegNotFound => {
                    ExitCode::from(exit_codes::CONVERT_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::IO_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let workspace = Workspace::resolve(args.base_path)?;
    workspace.ensure_layout()?;

    match args.command {
        Command::Init => {
            print_success(&format!("Workspace ready at {}", workspace.base.display()));
            print_workspace_summary(&workspace);
        }
        Command::ClearOldOutput => {
            let status = clear_old_output(&workspace);
            print_info(&status);
        }
        Command::ClearTemp { dir, keep } => {
            let keep: Vec<&str> = keep.iter().map(String::as_str).collect();
            if clear_temp_folder(&dir, &keep) {
                print_success(&format!("Cleared {}", dir.display()));
            } else {
                print_warning(&format!("Could not clear {}", dir.display()));
            }
        }
        Command::Archive { dir } => {
            let output_dir = dir.unwrap_or_else(|| workspace.output_dir.clone());
            move_old_files(&workspace, &output_dir)?;
            print_success(&format!(
                "Archived {} into {}",
                output_dir.display(),
                workspace.old_output_dir.display()
            ));
        }
        Command::Convert { file } => match convert_to_wav(&workspace, &file)? {
            Some(path) => print_success(&format!("WAV ready: {}", path.display())),
            None => {
                return Err(Error::FFmpeg(
                    "conversion failed, see log for encoder output".to_string(),
                ));
            }
        },
        Command::Ingest {
            file,
            input,
            target_dir,
        } => {
            let saved = save_uploaded_file(
                &workspace,
                UploadSource::path(file),
                input,
                target_dir.as_deref(),
            )?;
            print_success(&format!("Saved {}", saved.display()));
        }
        Command::PatchConfig {
            file,
            chunk_size,
            overlap,
        } => {
            conf_edit(&file, chunk_size, overlap)?;
            print_success(&format!("Patched {}", file.display()));
        }
        Command::Port => {
            print_info(&format!("{}", random_port()));
        }
    }

    Ok(())
}
