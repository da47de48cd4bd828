#![cfg(feature = "pcsc")]

//! Dump every data block of a MIFARE Classic 1K card.
//!
//! Usage:
//!   cargo run -p mifare-pcsc --example dump_card --features pcsc -- [KEY_HEX] [A|B]
//!
//! The key defaults to `FFFFFFFFFFFF` and key type A. Set `RUST_LOG=debug`
//! to see every APDU.

use anyhow::{Context as _, bail};
use mifare_pcsc::transport::PcscTransport;
use mifare_pcsc::{CardBuilder, DumpPlan, KeyType, Protocol, bytes_to_hex_spaced, parse_hex};

const KEY_SLOT: u8 = 0x00;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let key = match args.next() {
        Some(s) => parse_hex(&s).map_err(anyhow::Error::msg)?,
        None => vec![0xFF; 6],
    };
    let key_type = match args.next().as_deref() {
        None | Some("A") | Some("a") => KeyType::A,
        Some("B") | Some("b") => KeyType::B,
        Some(other) => bail!("key type must be A or B, got '{}'", other),
    };

    let ctx = pcsc::Context::establish(pcsc::Scope::User).context("PC/SC service not available")?;
    let mut buf = vec![0u8; ctx.list_readers_len()?];
    let reader = ctx
        .list_readers(&mut buf)?
        .next()
        .context("no PC/SC reader connected")?
        .to_owned();
    let name = reader.to_string_lossy().into_owned();
    println!("Reader: {}", name);

    let handle = ctx
        .connect(&reader, pcsc::ShareMode::Shared, pcsc::Protocols::ANY)
        .context("no card on the reader")?;
    let transport = PcscTransport::new(handle, name);
    let protocol = transport.active_protocol()?.unwrap_or(Protocol::T1);

    let mut card = CardBuilder::new()
        .with_transport(Box::new(transport))
        .protocol(protocol)
        .build()?;

    let uid = card.get_uid()?;
    println!("UID: {} ({})", uid.to_hex(), protocol);

    card.load_auth_key(KEY_SLOT, &key)?;

    let plan = DumpPlan::data_blocks(key_type, vec![KEY_SLOT]);
    let mut failed = 0usize;
    for read in card.dump(&plan) {
        match read.result {
            Ok(data) => println!("{:02x}: {}", read.block, bytes_to_hex_spaced(&data)),
            Err(e) => {
                failed += 1;
                println!("{:02x}: -- {}", read.block, e);
            }
        }
    }
    println!("{} of {} blocks read", plan.blocks.len() - failed, plan.blocks.len());
    Ok(())
}
