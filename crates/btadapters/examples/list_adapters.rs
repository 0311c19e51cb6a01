//! Example: Listing HCI adapters
//!
//! This example takes one snapshot of the Bluetooth adapters visible through
//! the HCI raw socket interface. Run with `RUST_LOG=debug` to see why the
//! list is empty on hosts without one.

use btadapters::HciEnumerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let enumerator = HciEnumerator::new();
    let adapters = enumerator.try_enumerate()?;

    println!("Found {} adapter(s)", adapters.len());
    for (dev_id, adapter) in &adapters {
        println!("{}: {} [{}]", dev_id, adapter.name, adapter.address);
        println!("  State:    {:?}", adapter.state);
        println!("  Features: {}", adapter.features_hex());
        println!(
            "  ACL:      {} packets of {} bytes",
            adapter.acl_pkts, adapter.acl_size
        );
    }

    Ok(())
}
