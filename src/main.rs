use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use porttag::{
    avec::reader::{self, Error},
    sans::{Token, base85::DecodeError, legacy::LegacyTag},
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "porttag", version)]
#[command(about = "Compact tokens for network switch ports", long_about = None)]
struct Cli {
    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a switch name and port specification into a token.
    Encode {
        /// Switch name, checksummed byte for byte.
        switch: OsString,
        /// Port specification, such as `eth1/2/3` or `eth1/2/3:4`.
        port: String,
        /// Port type table, one `NAME CODE` pair per line.
        #[arg(long, env = "PORTTAG_TYPES", default_value = "/etc/porttag/types")]
        types: PathBuf,
        /// Print the legacy 15-character tag instead.
        #[arg(long)]
        legacy: bool,
    },
    /// Decode a token into its checksum and port fields.
    Decode {
        token: String,
    },
}

impl Commands {
    fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Encode {
                switch,
                port,
                types,
                legacy,
            } => {
                let switch = switch.as_encoded_bytes();
                let context = || format!("Unable to encode [{port}] with {}", types.display());

                let output = if legacy {
                    reader::encode_path::<LegacyTag>(switch, &port, &types)
                        .with_context(context)?
                        .to_string()
                } else {
                    reader::encode_path::<Token>(switch, &port, &types)
                        .with_context(context)?
                        .to_string()
                };

                println!("{output}");
            }
            Self::Decode { token } => {
                let token: Token = token
                    .parse()
                    .with_context(|| format!("Unable to decode [{token}]"))?;
                let fields = token.descriptor().unpack();

                println!("checksum  {:08X}", token.checksum());
                println!("type      {}", fields.type_code);
                println!("interface {}", fields.interface);
                println!("module    {}", fields.module);
                println!("port      {}", fields.port);
                match fields.split {
                    Some(split) => println!("split     {split}"),
                    None => println!("split     -"),
                }
            }
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so stdout carries only the token.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("porttag: {err:#}");
            exit_code(&err)
        }
    }
}

/// Map a failure to the exit status reported for its stage.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = match err.downcast_ref::<Error>() {
        Some(Error::Io(_)) => 3,
        Some(Error::UnknownPortType(_)) => 4,
        Some(Error::MalformedPortSpec(_) | Error::MalformedTypeName(_)) => 5,
        Some(Error::SplitOutOfRange(_)) => 6,
        None if err.downcast_ref::<DecodeError>().is_some() => 7,
        None => 1,
    };

    ExitCode::from(code)
}
