//! zkauth CLI
//!
//! Command-line interface for the zkauth zero-knowledge authentication
//! protocol.

use std::process::exit;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use zkauth::commitment::CommitmentGenerator;
use zkauth::crypto::Poseidon;
use zkauth::error::Error;
use zkauth::proof::{self, Groth16Backend, ProofGenerator, ProofVerifier, ProvingKey, VerificationKey};
use zkauth::types::{ProofBundle, UserAttributes};
use zkauth::utils::Logger;

#[derive(Parser)]
#[command(name = "zkauth")]
#[command(about = "Privacy-Preserving Zero-Knowledge Authentication", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a proving/verification key pair
    Setup {
        /// Proving key output path
        #[arg(long, default_value = "proving_key.json")]
        proving_key: String,

        /// Verification key output path
        #[arg(long, default_value = "verification_key.json")]
        verification_key: String,
    },

    /// Register a user and derive their commitment
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Full name
        #[arg(short, long)]
        name: String,

        /// Age in years
        #[arg(short, long)]
        age: u32,

        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        dob: String,
    },

    /// Generate a proof of secret knowledge
    Prove {
        /// Secret as hex, with or without 0x prefix
        #[arg(short, long)]
        secret: String,

        /// Commitment as a decimal string
        #[arg(short, long)]
        commitment: String,

        /// Proving key path
        #[arg(long, default_value = "proving_key.json")]
        proving_key: String,

        /// Proof bundle output path
        #[arg(short, long, default_value = "proof.json")]
        output: String,
    },

    /// Verify a proof against a commitment
    Verify {
        /// Commitment as a decimal string
        #[arg(short, long)]
        commitment: String,

        /// Proof bundle file path
        #[arg(short, long, default_value = "proof.json")]
        proof: String,

        /// Verification key path
        #[arg(long, default_value = "verification_key.json")]
        verification_key: String,
    },
}

fn main() -> anyhow::Result<()> {
    Logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup {
            proving_key,
            verification_key,
        } => {
            println!("🚀 Generating key pair...");
            let (pk, vk) = proof::setup();
            pk.save(&proving_key)
                .with_context(|| format!("writing {}", proving_key))?;
            vk.save(&verification_key)
                .with_context(|| format!("writing {}", verification_key))?;
            println!("📁 Proving key: {}", proving_key);
            println!("📁 Verification key: {}", verification_key);
            println!("✅ Setup complete");
        }
        Commands::Register {
            email,
            name,
            age,
            country,
            dob,
        } => {
            let attrs = UserAttributes {
                email,
                name,
                age,
                country,
                dob,
            };
            attrs.validate()?;
            let generator = CommitmentGenerator::new(Arc::new(Poseidon::new()));
            let response = generator.generate(&attrs)?.to_response();
            println!("🔐 Registration complete");
            println!("   secret:     {}", response.secret);
            println!("   nonce:      {}", response.nonce);
            println!("   commitment: {}", response.commitment);
            println!("⚠️  Store the secret client-side; it is never recoverable");
        }
        Commands::Prove {
            secret,
            commitment,
            proving_key,
            output,
        } => {
            println!("🔍 Generating proof...");
            let pk = ProvingKey::load(&proving_key)
                .with_context(|| format!("reading {}", proving_key))?;
            let backend = Arc::new(Groth16Backend::new(Arc::new(Poseidon::new())));
            let prover = ProofGenerator::new(backend, pk);
            let bundle = prover.prove(&secret, &commitment)?;
            std::fs::write(&output, serde_json::to_string_pretty(&bundle)?)
                .with_context(|| format!("writing {}", output))?;
            println!("📁 Proof bundle: {}", output);
            println!("✅ Proof generated");
        }
        Commands::Verify {
            commitment,
            proof,
            verification_key,
        } => {
            println!("✅ Verifying proof...");
            let vk = VerificationKey::load(&verification_key)
                .with_context(|| format!("reading {}", verification_key))?;
            let raw = std::fs::read_to_string(&proof)
                .with_context(|| format!("reading {}", proof))?;
            let bundle: ProofBundle = serde_json::from_str(&raw)?;
            let backend = Arc::new(Groth16Backend::new(Arc::new(Poseidon::new())));
            let verifier = ProofVerifier::new(backend, vk);
            match verifier.verify(&commitment, &bundle.proof, &bundle.public_signals) {
                Ok(_) => println!("✅ Proof verified: authenticated"),
                Err(Error::Authentication) => {
                    println!("❌ unauthorized");
                    exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}
