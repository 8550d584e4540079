use anyhow::{anyhow, bail, Context, Result};
use opay_client::{BankListRequest, OpayClient, OpayConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: opay-cli <command>

commands:
  balance
  banks [COUNTRY]
  validate-user PHONE
  validate-merchant EMAIL
  transaction-status REFERENCE ORDER_NO";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if std::env::var("OPAY_LOG_FORMAT").as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn arg(args: &[String], index: usize, name: &str) -> Result<String> {
    args.get(index)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument {}\n\n{}", name, USAGE))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");
    if command == "help" || command == "--help" || command == "-h" {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = OpayConfig::from_env().context("Failed to load OPay configuration")?;
    tracing::info!("Using OPay API at {}", config.base_url);
    let client = OpayClient::new(config).context("Failed to create OPay client")?;

    let body = match command {
        "balance" => client.get_balance().await?,
        "banks" => {
            let request = match args.get(1) {
                Some(country) => BankListRequest::for_country(country.as_str()),
                None => BankListRequest::default(),
            };
            client.fetch_bank_list(request).await?
        }
        "validate-user" => client.validate_user(&arg(&args, 1, "PHONE")?).await?,
        "validate-merchant" => client.validate_merchant(&arg(&args, 1, "EMAIL")?).await?,
        "transaction-status" => {
            let reference = arg(&args, 1, "REFERENCE")?;
            let order_no = arg(&args, 2, "ORDER_NO")?;
            client.transaction_status(&reference, &order_no).await?
        }
        other => bail!("unknown command: {}\n\n{}", other, USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
