use spf_ip4_summary::input::{load_input, precision_from_env, resolve_input_path};
use spf_ip4_summary::output::print_summary;
use spf_ip4_summary::{format_ranges, summarize_ips};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("log4rs.yml not loaded, logging disabled: {e}");
    }
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let path = resolve_input_path(std::env::args().nth(1));
    let mut config = load_input(&path)?;
    if let Some(precision) = precision_from_env()? {
        config.precision = precision;
    }
    log::debug!("precision={} (not applied)", config.precision);

    let ranges = summarize_ips(&config.addresses)?;
    if std::env::var("SPF_IP4_REPORT").is_ok() {
        print_summary(&ranges);
    }

    println!("{}", format_ranges(&ranges));

    Ok(())
}
