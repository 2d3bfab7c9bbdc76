use clap::{Parser, Subcommand};

mod decrypt;
mod dgst;
mod encrypt;
mod keygen;
mod mac;
mod sign;
mod textfile;
mod verify;

/// Command-line tool for Ed448-Goldilocks encryption and signatures.
#[derive(Parser)]
#[command(name = "goldi")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a key pair from a passphrase.
    Keygen {
        /// Passphrase to derive the key pair from.
        #[arg(short, long)]
        passphrase: String,
        /// File for the private scalar (stdout if omitted).
        #[arg(long)]
        private_out: Option<String>,
        /// File for the public key point (stdout if omitted).
        #[arg(long)]
        public_out: Option<String>,
    },
    /// Encrypt a file under a public key.
    Encrypt {
        /// Recipient public key file.
        #[arg(short = 'k', long)]
        public_key: String,
        /// Input file (use - for stdin).
        #[arg(short, long)]
        input: String,
        /// Cryptogram output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decrypt a cryptogram with a passphrase.
    Decrypt {
        /// Passphrase that owns the recipient key.
        #[arg(short, long)]
        passphrase: String,
        /// Cryptogram input file.
        #[arg(short, long)]
        input: String,
        /// Plaintext output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Sign a file with a passphrase-derived key.
    Sign {
        /// Signing passphrase.
        #[arg(short, long)]
        passphrase: String,
        /// Input file (use - for stdin).
        #[arg(short, long)]
        input: String,
        /// Signature output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Verify a signature against a public key.
    Verify {
        /// Signer public key file.
        #[arg(short = 'k', long)]
        public_key: String,
        /// Input file (use - for stdin).
        #[arg(short, long)]
        input: String,
        /// Signature file.
        #[arg(short, long)]
        signature: String,
    },
    /// Print the 512-bit KMACXOF256 hash of a file.
    Dgst {
        /// Input file (use - for stdin).
        file: String,
    },
    /// Print a 512-bit keyed authentication tag for a file.
    Mac {
        /// MAC passphrase.
        #[arg(short, long)]
        passphrase: String,
        /// Input file (use - for stdin).
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Keygen {
            passphrase,
            private_out,
            public_out,
        } => keygen::run(passphrase, private_out.as_deref(), public_out.as_deref()),
        Commands::Encrypt {
            public_key,
            input,
            output,
        } => encrypt::run(public_key, input, output.as_deref()),
        Commands::Decrypt {
            passphrase,
            input,
            output,
        } => decrypt::run(passphrase, input, output.as_deref()),
        Commands::Sign {
            passphrase,
            input,
            output,
        } => sign::run(passphrase, input, output.as_deref()),
        Commands::Verify {
            public_key,
            input,
            signature,
        } => verify::run(public_key, input, signature),
        Commands::Dgst { file } => dgst::run(file),
        Commands::Mac { passphrase, file } => mac::run(passphrase, file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
