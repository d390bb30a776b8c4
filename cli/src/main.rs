use clap::Parser;
use log::info;

use epoch_cipher::{CipherParams, decrypt, encrypt};

/// Demonstration driver: encrypts a message with time-seeded prime keys,
/// prints the full detail, then decrypts it from the two key halves.
#[derive(Parser, Debug)]
#[command(name = "epoch-cipher", version, about)]
struct Args {
    /// Message to encrypt
    #[arg(default_value = "HACKEADO")]
    message: String,

    /// Number of primes in the key
    #[arg(long, default_value_t = 12)]
    key_count: usize,

    /// Maximum decimal digits per key prime
    #[arg(long, default_value_t = 4)]
    digit_len: u32,

    /// Verification increment applied after every modular operation
    #[arg(long, default_value_t = 1)]
    step: u64,

    /// Bound the key length is reduced against
    #[arg(long, default_value_t = 24)]
    max_key_count: usize,

    /// Also print the key material as JSON
    #[arg(long)]
    emit_keys: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = CipherParams::try_with(
        args.key_count,
        args.digit_len,
        args.step,
        args.max_key_count,
    )?;
    info!(
        "generating {} primes of up to {} digits",
        params.key_count(),
        params.digit_len()
    );

    let encryption = encrypt(&args.message, &params)?;

    println!("\nENCRYPTION:");
    println!("    step: {}", params.step());
    println!("    key length: {}", params.key_count());
    println!("    max digits per prime: {}", params.digit_len());
    println!("    message: {:?}", args.message);
    println!("    verification number: {}", encryption.verification);
    println!("    key: {:?}", encryption.key_material.key);
    println!("    private key: {:?}", encryption.key_material.private_key);
    println!("    public key: {:?}", encryption.key_material.public_key);

    println!("\nENCODING DETAIL:");
    for (index, (character, packet)) in
        args.message.chars().zip(&encryption.encoding).enumerate()
    {
        println!("    character #{} {:?}: {}", index + 1, character, packet);
    }

    if args.emit_keys {
        println!("\nKEY MATERIAL (JSON):");
        println!("{}", encryption.key_material.to_json()?);
    }

    let decoded = decrypt(
        &encryption.encoding,
        &encryption.key_material.public_key,
        &encryption.key_material.private_key,
        params.step(),
    )?;

    println!("\nDECRYPTION:");
    println!("    packets: {}", encryption.encoding.len());
    println!("    step: {}", params.step());
    println!(
        "    private key held locally: {:?}",
        encryption.key_material.private_key
    );
    println!(
        "    public key received: {:?}",
        encryption.key_material.public_key
    );
    println!("    decoded message: {:?}", decoded);

    Ok(())
}
