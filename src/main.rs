mod cli;

use agify::{AgifyClient, Config};
use cli::CliOptions;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches();
    let opts = CliOptions::from_matches(&matches);

    cli::init_logging(opts.log_level.as_deref());

    if opts.version {
        println!("agify {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = opts.apply(Config::from_env());
    let client = AgifyClient::from_config(&cfg)?;
    info!(
        "querying {} for {} name(s)",
        client.base_url(),
        opts.names.len()
    );

    let (out, failed) = match opts.names.as_slice() {
        [name] => cli::render(client.predict_with_country(name, &opts.country).await)?,
        names => cli::render(client.batch_predict_with_country(names, &opts.country).await)?,
    };
    println!("{}", out);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
