use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the source logo.
    #[clap(short, long, default_value = "logo.png")]
    icon: PathBuf,
    /// Android res directory to write the mipmaps into.
    #[clap(short, long, default_value = "app/src/main/res")]
    res: PathBuf,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("MIPMAP_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let written = mipmap::android::mipmap_ic_launcher(&args.icon, &args.res)?;
    for path in &written {
        println!("created {}", path.display());
    }
    println!("generated {} launcher icons", written.len());
    Ok(())
}
