use anyhow::Result;
use geofix_browser::{
    CapturePage, ChromeFinder, ChromeLauncher, LOCATION_SELECTOR, PageSession, TempProfile,
};
use geofix_core::CoordinateFix;
use geofix_geocode::NominatimClient;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct CaptureReport {
    latitude: String,
    longitude: String,
    accuracy_meters: String,
    address: String,
}

pub fn execute(
    chrome_path: Option<PathBuf>,
    wait_secs: u64,
    endpoint: &str,
    format: OutputFormat,
) -> Result<()> {
    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        println!("Starting GPS capture...");

        // Step 1: Find Chrome binary
        println!("🔍 Locating Chrome...");
        let finder = ChromeFinder::new(chrome_path);
        let chrome_binary = finder.find()?;
        println!("✅ Found Chrome at: {}", chrome_binary.display());

        // Step 2: Throwaway profile for the run
        println!("📁 Using temporary profile");
        let profile = TempProfile::new()?;

        // Step 3: Launch Chrome headless
        println!("🚀 Launching Chrome...");
        let launcher = ChromeLauncher::new(chrome_binary, profile.path().to_path_buf());
        let mut chrome_process = launcher.launch()?;

        // Step 4: Connect over CDP
        let session = PageSession::connect(launcher.debugging_port()).await?;

        // Session established: from here on every failure is contained so
        // the run always reaches the cleanup tail below
        let outcome = load_and_capture(&session, wait_secs, endpoint, format).await;
        if let Err(e) = outcome {
            println!("An error occurred: {}", e);
        }

        // Cleanup: close the session, then make sure Chrome is gone
        session.shutdown().await;
        let _ = chrome_process.kill();
        let _ = chrome_process.wait();

        Ok(())
        // profile dropped here: user-data dir removed
    });

    // Explicitly shutdown runtime with timeout so lingering CDP tasks
    // cannot hang process exit
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

/// Provision the capture page, load it, and run the capture step. The
/// page file is removed when the guard drops, on success and on error.
async fn load_and_capture(
    session: &PageSession,
    wait_secs: u64,
    endpoint: &str,
    format: OutputFormat,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let page = CapturePage::provision(&cwd)?;

    session.navigate(&page.file_url()).await?;

    println!("📡 Waiting for a position fix...");
    if let Err(e) = capture_location(session, wait_secs, endpoint, format).await {
        println!("Error capturing location: {}", e);
    }

    Ok(())
}

async fn capture_location(
    session: &PageSession,
    wait_secs: u64,
    endpoint: &str,
    format: OutputFormat,
) -> Result<()> {
    let text = session
        .wait_for_text(LOCATION_SELECTOR, Duration::from_secs(wait_secs))
        .await?;

    let client = NominatimClient::with_endpoint(endpoint)?;

    match resolve_fix(&text, &client).await? {
        None => println!("No location data received."),
        Some(report) => print_report(&report, format)?,
    }

    Ok(())
}

/// Empty text means the geolocation callback never delivered a fix
/// (denied, timed out, or never fired); the geocoder is not contacted in
/// that case.
async fn resolve_fix(text: &str, client: &NominatimClient) -> Result<Option<CaptureReport>> {
    if text.is_empty() {
        return Ok(None);
    }

    let fix = CoordinateFix::parse(text)?;
    let address = client.lookup_display(&fix.latitude, &fix.longitude).await;

    Ok(Some(CaptureReport {
        latitude: fix.latitude,
        longitude: fix.longitude,
        accuracy_meters: fix.accuracy_meters,
        address,
    }))
}

fn print_report(report: &CaptureReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            println!();
            println!("GPS Location Details:");
            println!("Latitude: {}", report.latitude);
            println!("Longitude: {}", report.longitude);
            println!("Accuracy: {} meters", report.accuracy_meters);
            println!("Address: {}", report.address);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    Ok(())
}
