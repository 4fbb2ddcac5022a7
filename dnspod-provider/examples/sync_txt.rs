//! Creates or updates a TXT record, then appends an A record.
//!
//! ```bash
//! DNSPOD_TOKEN="12345,xxxx" ZONE=example.com RUST_LOG=dnspod_provider=debug \
//!     cargo run -p dnspod-provider --example sync_txt
//! ```

use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dnspod_provider::{
    Address, DnspodConfig, DnspodProvider, Record, RecordAppender, RecordGetter, RecordSetter, Txt,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const TEST_NAME: &str = "libdns-test";

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let Ok(login_token) = std::env::var("DNSPOD_TOKEN") else {
        tracing::error!("DNSPOD_TOKEN not set");
        return ExitCode::FAILURE;
    };
    let Ok(zone) = std::env::var("ZONE") else {
        tracing::error!("ZONE not set");
        return ExitCode::FAILURE;
    };
    let zone = zone.trim_end_matches('.').to_string();

    let provider = match DnspodProvider::from_config(&DnspodConfig { login_token }) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let records = match provider.get_records(&zone).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let fqdn = format!("{TEST_NAME}.{zone}.");
    println!("Existing records:");
    for record in &records {
        let rr = record.rr();
        println!("{} (.{zone}): {}, {}", rr.name, rr.data, rr.record_type);
    }
    let exists = records
        .iter()
        .any(|r| r.name() == fqdn && r.record_type() == "TXT");

    let mut status = ExitCode::SUCCESS;

    if exists {
        println!("Updating existing entry for {TEST_NAME}");
        let record = Record::Txt(Txt {
            name: fqdn.clone(),
            text: format!("Updated test entry created by dnspod-provider at {}", unix_now()),
            ttl: Duration::from_secs(600),
        });
        match provider.set_records(&zone, &[record]).await {
            Ok(_) => println!("Record updated successfully"),
            Err(e) => {
                tracing::error!("{e}");
                status = ExitCode::FAILURE;
            }
        }
    } else {
        println!("Creating new entry for {TEST_NAME}");
        let record = Record::Txt(Txt {
            name: fqdn.clone(),
            text: format!("This is a test entry created by dnspod-provider at {}", unix_now()),
            ttl: Duration::from_secs(600),
        });
        match provider.append_records(&zone, &[record]).await {
            Ok(_) => println!("Record created successfully"),
            Err(e) => {
                tracing::error!("{e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    println!("\nCreating A record example");
    let address = Record::Address(Address {
        name: format!("test-a.{zone}."),
        // RFC 5737 documentation address
        ip: std::net::IpAddr::V4(std::net::Ipv4Addr::new(192, 0, 2, 1)),
        ttl: Duration::from_secs(300),
    });
    match provider.append_records(&zone, &[address]).await {
        Ok(_) => println!("A record created successfully"),
        Err(e) => {
            tracing::error!("creating A record: {e}");
            status = ExitCode::FAILURE;
        }
    }

    status
}
