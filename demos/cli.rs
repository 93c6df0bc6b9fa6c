use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cbrf::{Catalog, Client, Element, Endpoints};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// Serve requests from another host, e.g. a mirror.
	#[clap(long)]
	host: Option<String>,
	/// Print the whole tree as JSON.
	#[clap(long)]
	json: bool,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Currencies {
		#[clap(long)]
		monthly: bool,
	},
	Daily {
		date: Option<NaiveDate>,
		#[clap(long, default_value = "rus")]
		lang: String,
	},
	Dynamic {
		start: NaiveDate,
		end: NaiveDate,
		currency: String,
	},
}

fn main() {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
	let cli = Cli::parse();
	let mut client = Client::new();
	if let Some(host) = &cli.host {
		client = client.with_endpoints(Endpoints::with_host(host));
	}

	let result = match cli.command {
		CliCommand::Currencies { monthly } => {
			client.currencies_catalog(if monthly { Catalog::Monthly } else { Catalog::Daily })
		}
		CliCommand::Daily { date, lang } => client.daily_rate(date, lang.as_str()),
		CliCommand::Dynamic { start, end, currency } => client.dynamic_rates(start, end, &currency),
	};
	let root = match result {
		Ok(root) => root,
		Err(error) => {
			eprintln!("{error}");
			std::process::exit(1);
		}
	};

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&root).unwrap());
	} else {
		print_tree(&root, 0);
	}
}

fn print_tree(element: &Element, depth: usize) {
	let attributes: Vec<_> = element.attributes.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
	print!("{:indent$}{} {}", "", element.tag, attributes.join(" "), indent = depth * 2);
	match element.text() {
		Some(text) => println!(": {text}"),
		None => println!(),
	}
	for child in &element.children {
		print_tree(child, depth + 1);
	}
}
