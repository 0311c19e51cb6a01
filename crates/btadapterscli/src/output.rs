//! Rendering of adapter snapshots

use std::io::Write;

use btadapters::{AdapterMap, AdapterRecord};

use crate::config::OutputFormat;
use crate::error::Result;

pub fn write_adapters<W: Write>(
    out: &mut W,
    adapters: &AdapterMap,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, adapters),
        OutputFormat::Json => write_json(out, adapters),
    }
}

fn write_json<W: Write>(out: &mut W, adapters: &AdapterMap) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, adapters)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, adapters: &AdapterMap) -> Result<()> {
    if adapters.is_empty() {
        writeln!(out, "No Bluetooth adapters found")?;
        return Ok(());
    }

    for record in adapters.values() {
        write_record(out, record)?;
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &AdapterRecord) -> Result<()> {
    let state_names: Vec<&str> = record.state.iter_names().map(|(name, _)| name).collect();
    let stats = &record.stats;

    writeln!(out, "{} (device {})", record.name, record.dev_id)?;
    writeln!(out, "    BD_ADDR:      {}", record.address)?;
    writeln!(out, "    State:        0x{:x} [{}]", record.state.bits(), state_names.join(" | "))?;
    writeln!(out, "    Features:     {}", record.features_hex())?;
    writeln!(out, "    Packet types: 0x{:04x}", record.packet_type_info)?;
    writeln!(out, "    Link policy:  0x{:04x}", record.link_policy_info)?;
    writeln!(out, "    Role switch:  {}", record.role_switch_info)?;
    writeln!(out, "    ACL buffers:  {} x {} bytes", record.acl_pkts, record.acl_size)?;
    writeln!(out, "    SCO buffers:  {} x {} bytes", record.sco_pkts, record.sco_size)?;
    writeln!(out, "    Commands:     {} sent, {} events received", stats.cmd_sent, stats.evt_recv)?;
    writeln!(out, "    ACL packets:  {} received, {} sent", stats.acl_recv, stats.acl_sent)?;
    writeln!(out, "    SCO packets:  {} received, {} sent", stats.sco_recv, stats.sco_sent)?;
    writeln!(out, "    Bytes:        {} received, {} sent", stats.bytes_recv, stats.bytes_sent)?;
    Ok(())
}
