//! Host shell: loads an element list, classifies the net and reports.
use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use log::info;

use pn_classify::config::PncConfig;
use pn_classify::net::builder::NetModelBuilder;
use pn_classify::net::classify::classify;
use pn_classify::net::io::{read_elements_json, read_elements_ron, write_report_json};
use pn_classify::report::ClassificationReport;

fn make_options_parser() -> Command {
    Command::new("pnc")
        .version("v0.1.0")
        .about("Structural classifier for Petri net models")
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("FILE")
                .help("Element list exported by the hosting model repository"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Input file format")
                .default_value("json")
                .value_parser(["json", "ron"]),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("net-name")
                .help("Net name used in the report")
                .default_value("net"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the classification report will be stored"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("pnc.toml"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject arcs whose endpoints resolve to the wrong node kind"),
        )
}

fn main() -> Result<()> {
    if std::env::var("PNC_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("PNC_LOG")
            .write_style("PNC_LOG_STYLE");
        env_logger::init_from_env(e);
    } else {
        env_logger::init();
    }

    let matches = make_options_parser().get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = PncConfig::load_from_file(config_path)?;
    if matches.get_flag("strict") {
        config.strict = true;
    }

    let input = matches.get_one::<String>("input").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let net_name = matches.get_one::<String>("name").unwrap();

    let elements = match format.as_str() {
        "json" => read_elements_json(input)
            .with_context(|| format!("Failed to load element list from {}", input))?,
        "ron" => read_elements_ron(input)
            .with_context(|| format!("Failed to load element list from {}", input))?,
        other => bail!("unsupported input format: {}", other),
    };
    info!("loaded {} elements from {}", elements.len(), input);

    let model = NetModelBuilder::new().strict(config.strict).build(&elements)?;
    let report = ClassificationReport::new(net_name.clone(), &model, classify(&model));

    print!("{}", report);

    let output = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(|| config.report.clone());
    write_report_json(&output, &report)
        .with_context(|| format!("Failed to write report to {}", output))?;
    info!("report written to {}", output);

    Ok(())
}
