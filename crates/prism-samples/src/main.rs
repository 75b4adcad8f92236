use anyhow::Result;
use prism_engine::logging::{init_logging, LoggingConfig};

mod samples;

use samples::SampleKind;

fn usage() -> String {
    let names: Vec<&str> = SampleKind::ALL.iter().map(|s| s.name()).collect();
    format!("usage: prism-samples <sample>\n\nsamples: {}", names.join(", "))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Some(arg) = std::env::args().nth(1) else {
        println!("{}", usage());
        return Ok(());
    };

    if arg == "--list" || arg == "-l" {
        for sample in SampleKind::ALL {
            println!("{:<14} {}", sample.name(), sample.description());
        }
        return Ok(());
    }

    let sample: SampleKind = arg.parse()?;
    log::info!("running sample `{}`", sample.name());
    samples::run(sample)
}
