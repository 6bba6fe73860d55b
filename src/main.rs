//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::warn;

use chatstat::cli::Args;
use chatstat::config::{AnalyzerConfig, ParserConfig};
use chatstat::core::{FilterConfig, apply_filters};
use chatstat::format::{OutputFormat, to_format_string, write_to_format};
use chatstat::lexicon::LexiconSet;
use chatstat::logging::init_logging;
use chatstat::parsers::WhatsAppParser;
use chatstat::stats::Analyzer;
use chatstat::ChatstatError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

// Progress goes to stderr so a report printed to stdout stays parseable.
fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let format = resolve_format(&args)?;

    eprintln!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input.display());
    match &args.output {
        Some(path) => eprintln!("💾 Output:  {}", path.display()),
        None => eprintln!("💾 Output:  stdout"),
    }
    eprintln!("📄 Format:  {}", format);

    // Build filter configuration
    let mut filter_config = FilterConfig::new().with_sender(args.user.as_str());

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_date_from(from)?;
        eprintln!("📅 From:    {}", from);
    }

    if let Some(ref to) = args.to {
        filter_config = filter_config.with_date_to(to)?;
        eprintln!("📅 To:      {}", to);
    }

    eprintln!("👤 User:    {}", args.user);
    eprintln!();

    // Step 1: Parse
    let parser_config = ParserConfig::new().with_date_order(args.date_order.into());
    let parser = WhatsAppParser::with_config(parser_config);

    eprintln!("⏳ Parsing WhatsApp export...");
    let parse_start = Instant::now();
    let frame = parser.parse(&args.input)?;
    let summary = frame.summary().clone();
    eprintln!(
        "   Found {} messages ({:.2}s)",
        frame.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if summary.skipped > 0 {
        eprintln!("   Skipped {} entries with unreadable timestamps", summary.skipped);
    }
    if summary.dropped_bytes > 0 {
        eprintln!("   Dropped {} invalid UTF-8 bytes", summary.dropped_bytes);
    }

    if args.list_senders {
        println!("overall");
        for sender in frame.view().senders() {
            println!("{}", sender);
        }
        return Ok(());
    }

    // Step 2: Filter
    let view = if filter_config.is_active() {
        eprintln!("🔍 Filtering messages...");
        let view = apply_filters(&frame, &filter_config);
        eprintln!("   {} messages after filtering", view.len());
        view
    } else {
        frame.view()
    };

    if !filter_config.sender.is_overall() && view.is_empty() {
        warn!(user = %args.user, "no messages from this sender in the selected range");
    }

    // Step 3: Analyze
    let lexicons = LexiconSet::load(
        args.stop_words.as_deref(),
        args.emotions.as_deref(),
        args.sentiment_lexicon.as_deref(),
    )?;
    let analyzer = Analyzer::with_lexicons(lexicons)
        .with_config(AnalyzerConfig::new().with_top_words(args.top));

    eprintln!("🧮 Computing statistics...");
    let stats_start = Instant::now();
    let report = analyzer
        .report(&view, &filter_config.sender)
        .with_parse_summary(summary);
    eprintln!("   Done in {:.2}s", stats_start.elapsed().as_secs_f64());

    // Step 4: Write
    eprintln!("💾 Writing {}...", format);
    match &args.output {
        Some(path) => {
            write_to_format(&report, path, format)?;
            eprintln!("✅ Done! Report saved to {}", path.display());
        }
        None => {
            let rendered = to_format_string(&report, format)?;
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
        }
    }

    if let Some(ref csv_path) = args.preview_csv {
        write_preview(&view, csv_path)?;
    }

    eprintln!();
    eprintln!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// `-f` wins; otherwise the output extension decides, falling back to JSON.
fn resolve_format(args: &Args) -> Result<OutputFormat, ChatstatError> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    match &args.output {
        Some(path) if path.extension().is_some() => OutputFormat::from_path(path),
        _ => Ok(OutputFormat::default()),
    }
}

#[cfg(feature = "csv-output")]
fn write_preview(
    view: &chatstat::core::FrameView<'_>,
    path: &std::path::Path,
) -> Result<(), ChatstatError> {
    chatstat::core::write_csv(view, path)?;
    eprintln!("📝 Preview saved to {}", path.display());
    Ok(())
}

#[cfg(not(feature = "csv-output"))]
fn write_preview(
    _view: &chatstat::core::FrameView<'_>,
    _path: &std::path::Path,
) -> Result<(), ChatstatError> {
    Err(ChatstatError::invalid_format(
        "csv",
        "CSV preview requires the 'csv-output' feature to be enabled",
    ))
}
