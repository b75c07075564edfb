use anyhow::Context;
use clap::Parser;

use dogview::cli::Args;
use dogview::dog::{DogClient, DogImage};
use dogview::logging::{init_tracing, LogTarget};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(if args.once {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    let config = args.resolve_config()?;
    let client = DogClient::new(&config.api).context("Failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if args.once {
        let dog = runtime.block_on(client.fetch_random_dog())?;
        print_dog(&dog, args.json)?;
        return Ok(());
    }

    dogview::ui::run(&config, client, runtime.handle()).context("Terminal UI failed")?;
    Ok(())
}

fn print_dog(dog: &DogImage, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(dog)?);
    } else {
        println!("{}", dog.breed);
        println!("{}", dog.image_url);
    }
    Ok(())
}
