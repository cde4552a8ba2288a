use anyhow::Context;
use clap::{Parser, Subcommand};
use l4::batch;
use l4::BigInt;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "l4")]
#[command(version)]
#[command(about = "ElGamal over Z_p*, F_p^d and NIST P-256", long_about = "ElGamal over Z_p*, F_p^d and NIST P-256\n\nEach command reads its whole input from stdin and writes the result to stdout.\nSet RUST_LOG=debug for progress on stderr.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a line of text over Z_p*: input `p g k`, then the text
    ZpEncrypt {
        /// Seed for the ephemeral exponents (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt over Z_p*: input `p a`, then `r m` pairs
    ZpDecrypt,
    /// Encrypt over F_p^d: input p, h, g and k lines, then the text
    FqEncrypt {
        /// Seed for the ephemeral exponents (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt over F_p^d: input p, h, a, then pairs of coefficient lines
    FqDecrypt,
    /// Encrypt tokens on P-256: input public key `x y`, a count, then tokens
    CurveEncrypt {
        /// Seed for the ephemeral exponents (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt on P-256: input `a`, then point pairs
    CurveDecrypt,
    /// Print the P-256 public key for a private exponent
    CurvePublicKey {
        /// Private exponent
        private: String,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });
    info!("ephemeral exponent seed: {}", seed);
    StdRng::seed_from_u64(seed)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::ZpEncrypt { seed } => batch::zp_encrypt(&read_stdin()?, &mut rng_from(seed))?,
        Command::ZpDecrypt => batch::zp_decrypt(&read_stdin()?)?,
        Command::FqEncrypt { seed } => batch::fq_encrypt(&read_stdin()?, &mut rng_from(seed))?,
        Command::FqDecrypt => batch::fq_decrypt(&read_stdin()?)?,
        Command::CurveEncrypt { seed } => {
            batch::curve_encrypt(&read_stdin()?, &mut rng_from(seed))?
        }
        Command::CurveDecrypt => batch::curve_decrypt(&read_stdin()?)?,
        Command::CurvePublicKey { private } => {
            let private: BigInt = private
                .parse()
                .with_context(|| format!("invalid private exponent {:?}", private))?;
            batch::curve_public_key(&private)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
