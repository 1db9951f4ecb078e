//! mbtool-client: diagnostic front end for the mbtool daemon.
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐
//! │   clap   │──▶│ ClientConfig │──▶│ MbtoolClient │──▶│   daemon   │
//! │  (args)  │   │ (JSON + CLI) │   │ (handshake)  │   │ (@socket)  │
//! └──────────┘   └──────────────┘   └──────────────┘   └────────────┘
//! ```

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use serde::Serialize;

use mbtool_client::{
    ClientConfig, FileOpenFlag, MbtoolClient, ProbingResolver, SignedExecStatus, WipeTarget,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bytes requested per `FileReadRequest` by `cat`.
const READ_CHUNK: u64 = 64 * 1024;

#[derive(Parser)]
#[command(name = "mbtool-client")]
#[command(version = VERSION)]
#[command(about = "Talk to the mbtool daemon over its v3 socket protocol")]
struct Cli {
    /// JSON config file (missing keys keep their defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Daemon socket, `@name` for the abstract namespace
    #[arg(long, global = true)]
    socket: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the daemon version
    Version,
    /// List installed ROMs
    Roms,
    /// Print the ID of the booted ROM
    BootedRom,
    /// Switch the ROM that boots next
    SwitchRom {
        rom_id: String,
        #[arg(long)]
        force_update_checksums: bool,
    },
    /// Write a ROM's kernel to the boot partition
    SetKernel { rom_id: String },
    /// Wipe parts of a ROM
    WipeRom {
        rom_id: String,
        /// system, cache, data, dalvik_cache, multiboot
        #[arg(required = true)]
        targets: Vec<WipeTarget>,
    },
    /// Count a ROM's installed packages
    Packages { rom_id: String },
    /// Reboot the device
    Reboot {
        #[arg(long, value_enum, default_value_t = RebootVia::Init)]
        via: RebootVia,
        /// Reboot argument, e.g. `recovery`
        #[arg(long)]
        arg: Option<String>,
        /// Ask the framework to show its confirmation dialog
        #[arg(long)]
        confirm: bool,
    },
    /// Power the device off
    Shutdown {
        #[arg(long, value_enum, default_value_t = ShutdownVia::Init)]
        via: ShutdownVia,
    },
    /// stat(2) a file through the daemon
    Stat { path: String },
    /// Copy a file's contents to stdout
    Cat { path: String },
    /// Directory size in bytes
    Du {
        path: String,
        #[arg(long = "exclude")]
        exclusions: Vec<String>,
    },
    /// Print a symlink's target
    Readlink { path: String },
    /// Run a signed executable, streaming its output
    Exec {
        binary: String,
        signature: String,
        #[arg(long)]
        arg0: Option<String>,
        #[arg(last = true)]
        args: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RebootVia {
    Framework,
    Init,
    Mbtool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShutdownVia {
    Init,
    Mbtool,
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(socket) = &cli.socket {
        config.socket_address.clone_from(socket);
    }
    config.validate().context("invalid configuration")?;
    debug!("config: {config:?}");
    Ok(config)
}

fn emit<V: Serialize>(json: bool, value: &V, plain: impl FnOnce(&V)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain(value);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let json = cli.json;

    let mut client = MbtoolClient::connect(&config)
        .with_context(|| format!("connecting to mbtool at {}", config.socket_address))?;
    info!("mbtool-client v{VERSION} connected");

    match cli.command {
        Commands::Version => {
            let version = client.get_version()?;
            emit(json, &version, |v| println!("{v}"))?;
        }
        Commands::Roms => {
            let roms = client.get_installed_roms()?;
            emit(json, &roms, |roms| {
                for rom in roms {
                    println!("{}\t{}\t{}", rom.id, rom.version, rom.build);
                }
            })?;
        }
        Commands::BootedRom => {
            let id = client.get_booted_rom_id()?;
            emit(json, &id, |id| println!("{}", id.as_deref().unwrap_or("unknown")))?;
        }
        Commands::SwitchRom {
            rom_id,
            force_update_checksums,
        } => {
            let resolver = ProbingResolver::from_config(&config);
            let result = client.switch_rom(&rom_id, force_update_checksums, &resolver)?;
            emit(json, &result, |r| println!("{r}"))?;
        }
        Commands::SetKernel { rom_id } => {
            let resolver = ProbingResolver::from_config(&config);
            let result = client.set_kernel(&rom_id, &resolver)?;
            emit(json, &result, |r| println!("{r}"))?;
        }
        Commands::WipeRom { rom_id, targets } => {
            let result = client.wipe_rom(&rom_id, &targets)?;
            emit(json, &result, |r| {
                for t in &r.succeeded {
                    println!("wiped\t{t}");
                }
                for t in &r.failed {
                    println!("failed\t{t}");
                }
            })?;
            if !result.failed.is_empty() {
                bail!("{} wipe target(s) failed", result.failed.len());
            }
        }
        Commands::Packages { rom_id } => {
            let counts = client.get_packages_counts(&rom_id)?;
            emit(json, &counts, |c| {
                println!("system\t{}", c.system_packages);
                println!("updated\t{}", c.system_update_packages);
                println!("user\t{}", c.non_system_packages);
            })?;
        }
        Commands::Reboot { via, arg, confirm } => match via {
            RebootVia::Framework => client.reboot_via_framework(confirm)?,
            RebootVia::Init => client.reboot_via_init(arg.as_deref())?,
            RebootVia::Mbtool => client.reboot_via_mbtool(arg.as_deref())?,
        },
        Commands::Shutdown { via } => match via {
            ShutdownVia::Init => client.shutdown_via_init()?,
            ShutdownVia::Mbtool => client.shutdown_via_mbtool()?,
        },
        Commands::Stat { path } => {
            let stat = client.with_file(&path, &[FileOpenFlag::RdOnly], 0, |c, id| c.file_stat(id))?;
            emit(json, &stat, |st| {
                println!("size\t{}", st.st_size);
                println!("mode\t{:o}", st.st_mode);
                println!("uid\t{}", st.st_uid);
                println!("gid\t{}", st.st_gid);
                println!("mtime\t{}", st.st_mtime);
            })?;
        }
        Commands::Cat { path } => {
            let mut file = client
                .open_file(&path, &[FileOpenFlag::RdOnly], 0)
                .with_context(|| format!("opening {path}"))?;
            let data = file.read_to_end(READ_CHUNK)?;
            file.close()?;
            std::io::stdout().write_all(&data)?;
        }
        Commands::Du { path, exclusions } => {
            let size = client.path_get_directory_size(&path, &exclusions)?;
            emit(json, &size, |s| println!("{s}"))?;
        }
        Commands::Readlink { path } => {
            let target = client.path_readlink(&path)?;
            emit(json, &target, |t| println!("{t}"))?;
        }
        Commands::Exec {
            binary,
            signature,
            arg0,
            args,
        } => {
            let result = client.signed_exec(&binary, &signature, arg0.as_deref(), &args, |line| {
                println!("{line}");
            })?;
            match result.status {
                SignedExecStatus::ProcessExited if result.exit_status == 0 => {}
                SignedExecStatus::ProcessExited => bail!("exited with status {}", result.exit_status),
                SignedExecStatus::ProcessKilledBySignal => {
                    bail!("killed by signal {}", result.term_sig);
                }
                status => bail!(
                    "{status}: {}",
                    result.error_msg.as_deref().unwrap_or("no details")
                ),
            }
        }
    }

    Ok(())
}
