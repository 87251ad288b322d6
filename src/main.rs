// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MindMapify CLI entrypoint.
//!
//! Sends text or a document to the extraction backend and prints the rendered mind map (or its
//! Mermaid markup with `--markup`).

use std::error::Error;
use std::path::Path;

use mindmapify::acquire::{ClientConfig, Document, ExtractionBackend, HttpExtractionClient};
use mindmapify::app::MindMapApp;
use mindmapify::model::ViewSelector;
use mindmapify::render::{RenderEngine, TerminalSink, TreeEngine};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --text <text> [options]\n  {program} --file <path> [options]\n\nOptions:\n  --backend <url>   extraction backend (default: $MINDMAPIFY_BACKEND_URL or http://localhost:8000)\n  --view <name|all> show a single top-level branch (default: all)\n  --zoom-in <n>     zoom in n steps of 20%\n  --zoom-out <n>    zoom out n steps of 20%\n  --markup          print Mermaid markup instead of the rendered tree\n\nLogging is controlled by RUST_LOG (default: warn)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Text(String),
    File(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    backend: Option<String>,
    input: Option<Input>,
    view: Option<String>,
    zoom_in: u8,
    zoom_out: u8,
    markup: bool,
}

fn parse_steps(raw: Option<String>) -> Result<u8, ()> {
    raw.ok_or(())?.parse().map_err(|_| ())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--backend" => {
                if options.backend.is_some() {
                    return Err(());
                }
                options.backend = Some(args.next().ok_or(())?);
            }
            "--text" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(Input::Text(args.next().ok_or(())?));
            }
            "--file" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(Input::File(args.next().ok_or(())?));
            }
            "--view" => {
                if options.view.is_some() {
                    return Err(());
                }
                options.view = Some(args.next().ok_or(())?);
            }
            "--zoom-in" => options.zoom_in = parse_steps(args.next())?,
            "--zoom-out" => options.zoom_out = parse_steps(args.next())?,
            "--markup" => {
                if options.markup {
                    return Err(());
                }
                options.markup = true;
            }
            _ => return Err(()),
        }
    }

    if options.input.is_none() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn read_document(path: &str) -> Result<Document, Box<dyn Error>> {
    let bytes = std::fs::read(path)?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_owned());
    Ok(Document::new(file_name, bytes))
}

async fn run<B, E>(
    app: &mut MindMapApp<B, E, TerminalSink>,
    options: &CliOptions,
) -> Result<String, Box<dyn Error>>
where
    B: ExtractionBackend,
    E: RenderEngine,
{
    // Selector and zoom go in first so the submit renders once, already scaled.
    if let Some(view) = options.view.as_deref() {
        app.select_view(ViewSelector::from(view)).await;
    }
    for _ in 0..options.zoom_in {
        app.zoom_in().await;
    }
    for _ in 0..options.zoom_out {
        app.zoom_out().await;
    }

    match &options.input {
        Some(Input::Text(text)) => app.submit_text(text).await,
        Some(Input::File(path)) => app.submit_document(read_document(path)?).await,
        None => {}
    }

    if let Some(err) = app.view().state().error() {
        return Err(err.into());
    }
    if options.markup {
        return Ok(app.view().state().markup().to_owned());
    }
    let text = app.renderer().sink().await.to_text();
    Ok(text)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mindmapify".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let mut config = ClientConfig::from_env();
        if let Some(backend) = options.backend.clone() {
            config = config.with_base_url(backend);
        }
        let client = HttpExtractionClient::new(config)?;
        let mut app = MindMapApp::new(client, TreeEngine::default(), TerminalSink::new());

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let output = runtime.block_on(run(&mut app, &options))?;

        println!("{output}");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mindmapify: {err}");
        std::process::exit(1);
    }
}
