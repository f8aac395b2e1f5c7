use clap::{ArgAction, Parser};
use copydir::copy::CopierConfig;
use copydir::copy_paths_to_clipboard;
use copydir::errors::ClipboardError;
use copydir::input::{InputSource, PromptInput, StdinInput};
use copydir::install::{launcher_on_path, Installer, LAUNCHER_NAME};
use copydir::logger::initialize_logger;
use copydir::sink::{ArboardSink, Delivery};
use copydir::{ExclusionPolicy, PathResolver, PreviewMode};
use std::env;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

/// Copies the code files under the given paths to the clipboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
struct CliArgs {
    /// Folders or files to copy; `pwd` or `.` means the current directory.
    /// A single argument may hold several paths separated by commas or newlines.
    paths: Vec<String>,

    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    version: (),

    /// Log a preview of every copied file, limited to the first N lines
    #[arg(
        long = "showContent",
        visible_alias = "show-content",
        value_name = "N",
        num_args = 0..=1
    )]
    show_content: Option<Option<String>>,

    /// Do not print the tree of copied files
    #[arg(long)]
    no_summary: bool,

    /// Log debug output
    #[arg(long)]
    verbose: bool,

    /// Install a `copydir` launcher pointing at ARTIFACT and exit
    #[arg(long, value_name = "ARTIFACT")]
    install: Option<PathBuf>,

    /// Directory for the launcher (defaults to ~/bin)
    #[arg(long, value_name = "DIR", requires = "install")]
    install_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger(cli_args.verbose);

    match run(cli_args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClipboardError::EmptyResult) => {
            warn!("⚠️ No valid text-based code files found.");
            ExitCode::FAILURE
        }
        Err(e) if e.is_sink_failure() => {
            error!("❌ Could not copy to clipboard: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli_args: CliArgs) -> Result<(), ClipboardError> {
    if let Some(artifact) = cli_args.install {
        Installer::from_env(artifact, cli_args.install_dir)?.install()?;
        return Ok(());
    }

    let resolver = PathResolver::new(env::current_dir()?);
    let mut tokens = cli_args.paths;

    let show_content = cli_args.show_content.as_ref().map(|value| value.as_deref());
    let preview = PreviewMode::from_flag(show_content);
    // `--showContent src` swallows the path as its value.
    if let Some(Some(raw)) = show_content {
        if raw.trim().parse::<usize>().is_err() {
            debug!("Treating '{}' as a path", raw);
            tokens.insert(0, raw.to_string());
        }
    }

    let paths = if !tokens.is_empty() {
        resolver.resolve_args(&tokens)
    } else if std::io::stdin().is_terminal() {
        let mut prompt = PromptInput::stdio();
        offer_install(&mut prompt);
        resolver.resolve(&prompt.read_paths()?)
    } else {
        resolver.resolve(&StdinInput::stdin().read_paths()?)
    };

    let config = CopierConfig {
        policy: ExclusionPolicy::default(),
        preview,
        summary: !cli_args.no_summary,
    };
    let Delivery::Copied { files, bytes } =
        copy_paths_to_clipboard(config, &paths, &mut ArboardSink::new()).await?;
    debug!("Copied {} file(s), {} bytes", files, bytes);
    Ok(())
}

fn offer_install<R: BufRead, W: Write>(prompt: &mut PromptInput<R, W>) {
    let path_var = env::var_os("PATH").unwrap_or_default();
    if launcher_on_path(LAUNCHER_NAME, &path_var) {
        return;
    }

    let question = format!("❓ '{}' not found in PATH. Add it now?", LAUNCHER_NAME);
    match prompt.confirm(&question) {
        Ok(true) => {}
        Ok(false) => {
            info!("ℹ️ Skipping PATH installation.");
            return;
        }
        Err(e) => {
            warn!("Skipping PATH installation: {}", e);
            return;
        }
    }

    let artifact = match prompt.ask("Path to the copydir executable: ") {
        Ok(answer) if !answer.is_empty() => PathBuf::from(answer),
        Ok(_) => {
            info!("ℹ️ Skipping PATH installation.");
            return;
        }
        Err(e) => {
            warn!("Skipping PATH installation: {}", e);
            return;
        }
    };

    if let Err(e) = Installer::from_env(artifact, None).and_then(|installer| installer.install()) {
        error!("❌ {}", e);
    }
}
