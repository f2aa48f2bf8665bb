mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lava_payments::{Bill, CreateBill, LavaPayments, Service, DEFAULT_EXPIRE};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "lava", version, about = "Счета через Бизнес API Lava.ru")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Выставить счёт
    Create(CreateArgs),
    /// Получить счёт по ID счёта или ID заказа
    Get(GetArgs),
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Сумма счёта, не меньше 1
    #[arg(long)]
    amount: f64,

    /// ID платежа в системе мерчанта
    #[arg(long)]
    order_id: Option<String>,

    #[arg(long)]
    hook_url: Option<String>,

    #[arg(long)]
    fail_url: Option<String>,

    #[arg(long)]
    success_url: Option<String>,

    /// Время жизни счёта в минутах (1..=43200)
    #[arg(long, default_value_t = DEFAULT_EXPIRE)]
    expire: u32,

    #[arg(long)]
    custom_fields: Option<String>,

    /// Комментарий к счёту
    #[arg(long)]
    comment: Option<String>,

    /// Методы оплаты через запятую: card,sbp,qiwi
    #[arg(long, value_delimiter = ',')]
    include_service: Vec<Service>,

    #[arg(long, value_delimiter = ',')]
    exclude_service: Vec<Service>,
}

impl CreateArgs {
    fn into_params(self) -> CreateBill {
        let mut params = CreateBill::new(self.amount).expire(self.expire);

        if let Some(order_id) = self.order_id {
            params = params.order_id(order_id);
        }
        if let Some(hook_url) = self.hook_url {
            params = params.hook_url(hook_url);
        }
        if let Some(fail_url) = self.fail_url {
            params = params.fail_url(fail_url);
        }
        if let Some(success_url) = self.success_url {
            params = params.success_url(success_url);
        }
        if let Some(custom_fields) = self.custom_fields {
            params = params.custom_fields(custom_fields);
        }
        if let Some(comment) = self.comment {
            params = params.comment(comment);
        }
        if !self.include_service.is_empty() {
            params = params.include_service(self.include_service);
        }
        if !self.exclude_service.is_empty() {
            params = params.exclude_service(self.exclude_service);
        }

        params
    }
}

#[derive(Args, Debug)]
struct GetArgs {
    #[arg(long, conflicts_with = "order_id")]
    invoice_id: Option<String>,

    #[arg(long)]
    order_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = LavaPayments::with_config(Config::from_env()?.into_lava_config());

    let bill = run(&client, cli.command).await?;

    info!(
        id = bill.id(),
        status = %bill.status(),
        expired = bill.is_expired(),
        "Bill received"
    );

    println!("{}", serde_json::to_string_pretty(&bill)?);

    Ok(())
}

async fn run(client: &LavaPayments, command: Command) -> Result<Bill> {
    let bill = match command {
        Command::Create(args) => client.create_bill(args.into_params()).await?,
        Command::Get(args) => {
            client
                .get_bill(args.invoice_id.as_deref(), args.order_id.as_deref())
                .await?
        }
    };

    Ok(bill)
}
