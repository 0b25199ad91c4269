// ============================================================================
// keyprobe-cli/src/commands/extract.rs
// ============================================================================
//
// EXTRACT COMMAND: Keyframe report generation
//
// Builds the core configuration from the parsed arguments, picks the report
// source (ffprobe or a saved report), runs the pipeline and prints either a
// confirmation line or the JSON summary.

use crate::cli::ExtractArgs;
use crate::error::CliResult;
use crate::output::{print_info, print_success, probe_spinner};

use keyprobe_core::{
    CommandFrameProbe, ExtractionSummary, FrameReportProbe, RawReportFile,
    extract_keyframes,
};

/// Executes the extract command.
pub fn run_extract(args: &ExtractArgs) -> CliResult<ExtractionSummary> {
    let config = args.to_config();

    let probe: Box<dyn FrameReportProbe> = match &args.raw_report {
        Some(path) => {
            log::info!("Using saved frame report {}", path.display());
            Box::new(RawReportFile::new(path))
        }
        None => Box::new(CommandFrameProbe::from_config(&config)),
    };

    let show_spinner = !args.json && console::Term::stderr().is_term();
    let spinner = probe_spinner(
        show_spinner,
        format!("Reading frames of {}", config.input_path.display()),
    );
    let result = extract_keyframes(&config, probe.as_ref());
    spinner.finish_and_clear();
    let summary = result?;

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        print_success(&format!(
            "I-frame information has been saved to {}",
            summary.output.display()
        ));
        print_info("Keyframes", summary.keyframes);
        print_info("Frames scanned", summary.frames);
        if summary.incomplete_blocks > 0 {
            print_info("Discarded incomplete blocks", summary.incomplete_blocks);
        }
    }

    Ok(summary)
}
