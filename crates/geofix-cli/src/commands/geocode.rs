use anyhow::Result;
use geofix_geocode::NominatimClient;
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct GeocodeReport<'a> {
    latitude: &'a str,
    longitude: &'a str,
    address: String,
}

pub fn execute(lat: &str, lon: &str, endpoint: &str, format: OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let client = NominatimClient::with_endpoint(endpoint)?;
        let address = client.lookup_display(lat, lon).await;

        match format {
            OutputFormat::Pretty => println!("Address: {}", address),
            OutputFormat::Json => {
                let report = GeocodeReport {
                    latitude: lat,
                    longitude: lon,
                    address,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    })
}
