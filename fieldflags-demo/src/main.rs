mod error;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context as _;
use fieldflags::{ArgFlags, Record};
use tracing_subscriber::EnvFilter;

use crate::error::Format;

#[derive(Record, Debug, Default)]
struct Arguments {
    #[flag = "v"]
    pub verbose: bool,

    #[flag = "names,n"]
    pub names: Vec<String>,

    #[flag = "c"]
    pub count: i32,

    pub ratio: f64,

    pub bind: Option<IpAddr>,

    #[flag = "peer"]
    pub peers: Vec<SocketAddr>,

    #[flag = "log-dir"]
    pub log_dir: Option<PathBuf>,

    #[flag = "+"]
    pub output: Option<Box<Output>>,

    #[flag = "+"]
    pub limits: Limits,

    // Never matched, because it isn't `pub`
    #[allow(dead_code)]
    secret: String,
}

#[derive(Record, Debug, Default)]
struct Output {
    #[flag = "o,out"]
    pub path: PathBuf,

    #[flag = "f"]
    pub format: Format,
}

#[derive(Record, Debug, Default)]
struct Limits {
    #[flag = "max-depth"]
    pub depth: i64,

    pub retries: Option<i16>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let flags = ArgFlags::new(&args);

    tracing::info!(flags = ?flags.flag_names(), "applying {flags}");

    let mut arguments = Arguments::default();
    let unused = flags
        .apply_to(&mut arguments)
        .context("failed to apply command line flags")?;

    println!("{arguments:#?}");
    println!("unused: {unused:?}");

    Ok(())
}
